use std::path::{Path, PathBuf};

use image::{ImageFormat, Rgb, RgbImage};
use log::info;

use crate::config::{BACKGROUND, BOLT_FRACTIONS, FOREGROUND, IconTarget};
use crate::error::{IconError, Result};

/// Check a size coming from signed input; anything `<= 0` is rejected.
pub fn validate_size(size: i64) -> Result<u32> {
    if size <= 0 {
        return Err(IconError::InvalidSize(size));
    }
    u32::try_from(size).map_err(|_| IconError::InvalidSize(size))
}

/// Lightning bolt vertices scaled to a `size`-pixel canvas.
pub fn bolt_polygon(size: u32) -> [(f32, f32); 6] {
    let s = size as f32;
    BOLT_FRACTIONS.map(|(fx, fy)| (fx * s, fy * s))
}

// Draw the bolt icon in memory: background fill + white bolt
pub fn draw_icon(size: u32) -> Result<RgbImage> {
    validate_size(size as i64)?;
    let mut img = RgbImage::from_pixel(size, size, BACKGROUND);
    fill_polygon(&mut img, &bolt_polygon(size), FOREGROUND);
    Ok(img)
}

/// Draw the icon and write it as PNG to `output_path`, replacing any existing file.
pub fn render_icon(size: u32, output_path: impl AsRef<Path>) -> Result<()> {
    let path = output_path.as_ref();
    let img = draw_icon(size)?;
    img.save_with_format(path, ImageFormat::Png)
        .map_err(|e| IconError::from_image(path, e))?;
    info!("Created {}", path.display());
    Ok(())
}

/// Render every target into `out_dir`, in order. Stops at the first failure;
/// files already written are left in place.
pub fn render_all(targets: &[IconTarget], out_dir: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
    let out_dir = out_dir.as_ref();
    let mut written = Vec::with_capacity(targets.len());
    for target in targets {
        let path = out_dir.join(target.file_name);
        render_icon(target.size, &path)?;
        written.push(path);
    }
    Ok(written)
}

/// Fill a polygon including every pixel its outline touches.
///
/// Rows are filled between even-odd crossings at the row center, from the
/// pixel holding the left crossing to the pixel holding the right one. The
/// outline is then traced so thin parts of the shape stay connected.
pub fn fill_polygon(img: &mut RgbImage, poly: &[(f32, f32)], color: Rgb<u8>) {
    let (w, h) = img.dimensions();
    if w == 0 || h == 0 || poly.len() < 3 {
        return;
    }
    let px = |v: f32, len: u32| v.floor().clamp(0.0, (len - 1) as f32) as u32;

    for y in 0..h {
        let crossings = scanline_crossings(poly, y as f32 + 0.5);
        for span in crossings.chunks_exact(2) {
            for x in px(span[0], w)..=px(span[1], w) {
                img.put_pixel(x, y, color);
            }
        }
    }

    for i in 0..poly.len() {
        let (x0, y0) = poly[i];
        let (x1, y1) = poly[(i + 1) % poly.len()];
        // half-pixel steps never skip a pixel
        let steps = ((x1 - x0).hypot(y1 - y0) * 2.0).ceil().max(1.0) as u32;
        for s in 0..=steps {
            let t = s as f32 / steps as f32;
            let x = px(x0 + (x1 - x0) * t, w);
            let y = px(y0 + (y1 - y0) * t, h);
            img.put_pixel(x, y, color);
        }
    }
}

/// Sorted x positions where the horizontal line `y = py` crosses the polygon's edges.
pub fn scanline_crossings(poly: &[(f32, f32)], py: f32) -> Vec<f32> {
    let mut xs = Vec::new();
    let mut j = poly.len().wrapping_sub(1);
    for i in 0..poly.len() {
        let (xi, yi) = poly[i];
        let (xj, yj) = poly[j];
        if (yi > py) != (yj > py) {
            xs.push(xi + (py - yi) * (xj - xi) / (yj - yi));
        }
        j = i;
    }
    xs.sort_by(|a, b| a.total_cmp(b));
    xs
}

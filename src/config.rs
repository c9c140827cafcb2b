use image::Rgb;

/// One icon to produce: side length in pixels and output file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconTarget {
    pub size: u32,
    pub file_name: &'static str,
}

impl IconTarget {
    pub const fn new(size: u32, file_name: &'static str) -> Self {
        Self { size, file_name }
    }
}

pub const DEFAULT_TARGETS: [IconTarget; 3] = [
    IconTarget::new(16, "icon16.png"),
    IconTarget::new(48, "icon48.png"),
    IconTarget::new(128, "icon128.png"),
];

/// `#667eea`
pub const BACKGROUND: Rgb<u8> = Rgb([0x66, 0x7e, 0xea]);
/// `#ffffff`
pub const FOREGROUND: Rgb<u8> = Rgb([0xff, 0xff, 0xff]);

// Bolt outline as fractions of the side length, in drawing order
pub const BOLT_FRACTIONS: [(f32, f32); 6] = [
    (0.50, 0.20),
    (0.40, 0.50),
    (0.55, 0.50),
    (0.45, 0.80),
    (0.60, 0.45),
    (0.50, 0.45),
];

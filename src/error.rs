//! Error types for icon rendering

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type alias for icon operations
pub type Result<T> = std::result::Result<T, IconError>;

/// Errors that can occur while rendering an icon
#[derive(Error, Debug)]
pub enum IconError {
    /// Icon side length was zero or negative
    #[error("Invalid icon size: {0} (must be a positive number of pixels)")]
    InvalidSize(i64),

    /// Output file could not be created or written
    #[error("Failed to write {path}: {source}", path = .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The imaging library failed to encode the canvas
    #[error("Image encoding failed: {0}")]
    Dependency(#[source] image::ImageError),
}

impl IconError {
    /// Split an `image` error into a filesystem failure or an encoder failure.
    pub fn from_image(path: &Path, err: image::ImageError) -> Self {
        match err {
            image::ImageError::IoError(source) => IconError::Io {
                path: path.to_path_buf(),
                source,
            },
            other => IconError::Dependency(other),
        }
    }
}

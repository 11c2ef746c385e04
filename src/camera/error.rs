use std::path::PathBuf;

use thiserror::Error;

/// Capture subsystem errors.
#[derive(Debug, Error)]
pub enum CaptureError {
    #[error("camera returned no frame")]
    NoFrame,

    #[error("frame buffer does not match {width}x{height} RGB dimensions")]
    BadFrame { width: u32, height: u32 },

    #[error("could not find snapshot: {}", .0.display())]
    MissingFile(PathBuf),

    #[error("camera device unavailable: {0}")]
    DeviceUnavailable(String),

    #[error("image codec failed: {0}")]
    Image(#[from] image::ImageError),

    #[error("snapshot I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience Result alias.
pub type Result<T> = std::result::Result<T, CaptureError>;

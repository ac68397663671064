use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CompressionError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to decode image: {0}")]
    Decode(#[from] image::ImageError),

    #[error("Failed to encode image: {0}")]
    Encode(String),

    #[error("Failed to write output file {}: {}", .0.display(), .1)]
    Write(PathBuf, std::io::Error),

    #[error("Invalid quality level: {0:?}. Please enter a number between 0 and 100")]
    InvalidQuality(String),

    #[error("Lossless mode is only available for WebP output")]
    LosslessUnsupported,

    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("Failed to create output directory: {}", .0.display())]
    DirectoryCreationFailed(PathBuf),

    #[error("Walkdir error: {0}")]
    Walkdir(#[from] walkdir::Error),

    #[error("{0} is not installed or not in PATH")]
    ToolNotFound(&'static str),

    #[error("Ghostscript error: {0}")]
    ToolExecution(String),
}

pub type Result<T> = std::result::Result<T, CompressionError>;

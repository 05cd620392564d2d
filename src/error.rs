use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the meme synthesis pipeline
#[derive(Error, Debug)]
pub enum MemeError {
    #[error("Image processing error: {0}")]
    Image(#[from] ImageError),

    #[error("Output error: {0}")]
    Output(#[from] OutputError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised while loading or transforming rasters
#[derive(Error, Debug)]
pub enum ImageError {
    #[error("Invalid source image: {reason}")]
    InvalidImage { reason: String },

    #[error("Failed to load image: {path}")]
    LoadFailed { path: String },

    #[error("Failed to decode image data: {0}")]
    DecodeFailed(#[from] image::ImageError),
}

/// Errors raised while persisting artifacts
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Could not create output directory {path}: {source}")]
    DirectoryFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("PNG encoding failed: {0}")]
    EncodeFailed(#[from] image::ImageError),
}

/// Configuration-specific errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to parse configuration file: {path}")]
    ParseFailed { path: String },

    #[error("Invalid configuration value: {key} = {value}")]
    InvalidValue { key: String, value: String },

    #[error("Configuration file not found: {path}")]
    FileNotFound { path: String },
}

/// Convenience type alias for Results using MemeError
pub type Result<T> = std::result::Result<T, MemeError>;

impl MemeError {
    /// Create an `InvalidImage` error with the given reason
    pub fn invalid_image<S: Into<String>>(reason: S) -> Self {
        ImageError::InvalidImage {
            reason: reason.into(),
        }
        .into()
    }
}

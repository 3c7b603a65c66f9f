//! Crate-wide error type.
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The input pixel grid cannot be transformed (zero area, bad buffer size, ...).
    #[error("invalid input image {width}x{height}: {reason}")]
    InvalidInput {
        width: usize,
        height: usize,
        reason: String,
    },

    #[error("image codec error: {0}")]
    Image(#[from] image::ImageError),

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("config {}: {message}", path.display())]
    Config { path: PathBuf, message: String },

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn invalid_input(width: usize, height: usize, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            width,
            height,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

use std::path::PathBuf;

use decor_fx::PaletteError;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StyleError {
    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Write error: {}: {reason}", .path.display())]
    Write { path: PathBuf, reason: String },

    #[error("Task error: {0}")]
    Task(String),
}

impl StyleError {
    pub(crate) fn write(path: impl Into<PathBuf>, err: impl std::fmt::Display) -> Self {
        StyleError::Write {
            path: path.into(),
            reason: err.to_string(),
        }
    }

    /// HTTP status the upload layer should answer with.
    pub fn status_code(&self) -> u16 {
        match self {
            StyleError::Decode(_) | StyleError::InvalidArgument(_) => 400,
            StyleError::Write { .. } | StyleError::Task(_) => 500,
        }
    }

    /// User-facing error body: `{"status": <code>, "error": <message>}`.
    pub fn to_json(&self) -> serde_json::Value {
        json!({
            "status": self.status_code(),
            "error": self.to_string(),
        })
    }
}

impl From<PaletteError> for StyleError {
    fn from(e: PaletteError) -> Self {
        StyleError::InvalidArgument(e.to_string())
    }
}

impl From<image::ImageError> for StyleError {
    fn from(e: image::ImageError) -> Self {
        StyleError::Decode(e.to_string())
    }
}

//! Errors for loading and validating scene data.

use std::path::PathBuf;

/// Errors that can occur when working with scenarios and settings.
#[derive(Debug, thiserror::Error)]
pub enum SceneError {
    #[error("I/O error at {path}: {source}")]
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Parse error in {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Invalid scenario: {message}")]
    ValidationError { message: String },
}

impl SceneError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::ValidationError {
            message: msg.into(),
        }
    }
}

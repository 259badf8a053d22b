//! Error types shared across FollowCam crates.
//!
//! The per-tick camera update never fails; these errors only surface at the
//! edges (loading settings, scenario files, running the CLI).

use std::path::PathBuf;

/// Top-level error type for FollowCam operations.
#[derive(Debug, thiserror::Error)]
pub enum FollowcamError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Scenario error: {message}")]
    Scenario { message: String },

    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias using FollowcamError.
pub type FollowcamResult<T> = Result<T, FollowcamError>;

impl FollowcamError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }

    pub fn scenario(msg: impl Into<String>) -> Self {
        Self::Scenario {
            message: msg.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructor_messages() {
        let err = FollowcamError::config("smoothness must be finite");
        assert_eq!(
            err.to_string(),
            "Configuration error: smoothness must be finite"
        );

        let err = FollowcamError::scenario("unknown camera 7");
        assert_eq!(err.to_string(), "Scenario error: unknown camera 7");
    }

    #[test]
    fn test_io_error_converts() {
        fn read() -> FollowcamResult<()> {
            Err(std::io::Error::new(std::io::ErrorKind::Other, "disk gone"))?;
            Ok(())
        }
        assert!(matches!(read(), Err(FollowcamError::Io(_))));
    }
}

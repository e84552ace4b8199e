//! Centralized error types for Sentra.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for Sentra operations.
#[derive(Error, Debug)]
pub enum SentraError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid artifact '{path}': {reason}")]
    Artifact { path: PathBuf, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type for Sentra operations.
pub type SentraResult<T> = Result<T, SentraError>;

impl SentraError {
    /// Create a validation error.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create an artifact error for the file at `path`.
    pub fn artifact(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::Artifact {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Whether the error was caused by the caller's input.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

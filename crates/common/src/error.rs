//! Error types shared across PointMe crates.

use std::path::PathBuf;

/// Top-level error type for PointMe operations.
#[derive(Debug, thiserror::Error)]
pub enum PointmeError {
    #[error("Filter error: {message}")]
    Filter { message: String },

    #[error("Gesture error: {message}")]
    Gesture { message: String },

    #[error("Pipeline error: {message}")]
    Pipeline { message: String },

    #[error("Landmark contract violation: {message}")]
    Landmark { message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Replay error: {message}")]
    Replay { message: String },

    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias using PointmeError.
pub type PointmeResult<T> = Result<T, PointmeError>;

impl PointmeError {
    pub fn filter(msg: impl Into<String>) -> Self {
        Self::Filter {
            message: msg.into(),
        }
    }

    pub fn gesture(msg: impl Into<String>) -> Self {
        Self::Gesture {
            message: msg.into(),
        }
    }

    pub fn pipeline(msg: impl Into<String>) -> Self {
        Self::Pipeline {
            message: msg.into(),
        }
    }

    pub fn landmark(msg: impl Into<String>) -> Self {
        Self::Landmark {
            message: msg.into(),
        }
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }

    pub fn replay(msg: impl Into<String>) -> Self {
        Self::Replay {
            message: msg.into(),
        }
    }
}

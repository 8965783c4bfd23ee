//! Forklore Error Types
//!
//! Centralized error handling for the aggregator.

use thiserror::Error;

/// Central error type for Forklore
#[derive(Error, Debug)]
pub enum ForkloreError {
    #[error("Provider error: {0}")]
    Provider(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for Forklore operations
pub type ForkloreResult<T> = Result<T, ForkloreError>;

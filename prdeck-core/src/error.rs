//! Error types for prdeck

use thiserror::Error;

/// Result type alias for prdeck operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for prdeck core operations
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Loading records for a view failed
    #[error("Failed to load records: {0}")]
    Fetch(String),

    /// Generic error with message
    #[error("{0}")]
    Other(String),
}

//! Error types for the eventry client.

use thiserror::Error;

/// Errors that can occur in eventry operations.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Network error: {0}")]
    Network(reqwest::Error),

    #[error("Protocol error: {0}")]
    Protocol(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Access denied: {0}")]
    Forbidden(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for eventry operations.
pub type Result<T> = std::result::Result<T, Error>;

//! Error types for sieve CLI operations.

use std::io;
use thiserror::Error;

/// The error type for sieve CLI operations.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred while reading input or writing output.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Configuration file or option is invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for sieve operations.
pub type Result<T> = std::result::Result<T, Error>;

//! Client error types.

use thiserror::Error;

/// Result type alias for client module.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Server returned {status}: {message}")]
    ServerError { status: u16, message: String },

    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Smoke test failed at '{step}': {reason}")]
    SmokeFailed { step: &'static str, reason: String },
}

impl ClientError {
    /// Whether the server answered 404.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ClientError::NotFound { .. })
    }
}

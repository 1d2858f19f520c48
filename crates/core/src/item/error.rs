use thiserror::Error;

/// Errors that can occur when validating item payloads.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ItemError {
    #[error("Item name cannot be empty")]
    EmptyName,
    #[error("Item name too long (max 255 characters)")]
    NameTooLong,
    #[error("Item price must be a finite number")]
    InvalidPrice,
}

//! Pure functions for mapping repository errors to HTTP status codes.

use super::RepositoryError;

/// Maps a [`RepositoryError`] to an HTTP status code.
///
/// - `NotFound` -> 404
/// - `AlreadyExists` -> 409
/// - `ConnectionFailed` -> 503, the store is unreachable
/// - `QueryFailed`, `Serialization` -> 500
/// - `InvalidData` -> 400, an integrity constraint rejected the write
///
/// # Examples
///
/// ```
/// use itemstore_core::storage::{repository_error_to_status_code, RepositoryError};
///
/// let error = RepositoryError::item_not_found("abc-123");
/// assert_eq!(repository_error_to_status_code(&error), 404);
/// ```
pub fn repository_error_to_status_code(error: &RepositoryError) -> u16 {
    match error {
        RepositoryError::NotFound { .. } => 404,
        RepositoryError::AlreadyExists { .. } => 409,
        RepositoryError::ConnectionFailed(_) => 503,
        RepositoryError::QueryFailed(_) => 500,
        RepositoryError::Serialization(_) => 500,
        RepositoryError::InvalidData(_) => 400,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes_by_category() {
        let cases = [
            (RepositoryError::item_not_found("item-1"), 404),
            (
                RepositoryError::AlreadyExists {
                    entity_type: "Item",
                    id: "item-1".to_string(),
                },
                409,
            ),
            (
                RepositoryError::ConnectionFailed("connection refused".to_string()),
                503,
            ),
            (RepositoryError::QueryFailed("syntax".to_string()), 500),
            (RepositoryError::Serialization("bad row".to_string()), 500),
            (RepositoryError::InvalidData("constraint".to_string()), 400),
        ];

        for (error, expected) in cases {
            assert_eq!(repository_error_to_status_code(&error), expected, "{error}");
        }
    }
}

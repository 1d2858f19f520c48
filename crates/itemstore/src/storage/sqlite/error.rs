//! SQLite error mapping.
//!
//! Maps `tokio_rusqlite::Error` and `rusqlite::Error` to `RepositoryError` from `itemstore_core::storage`.
//! Specific errors are mapped to semantic variants (e.g., CHECK constraint to InvalidData).

use itemstore_core::storage::RepositoryError;

const ENTITY: &str = "Item";

/// Maps a rusqlite error to a RepositoryError.
///
/// # Error Mapping
///
/// - `SQLITE_CONSTRAINT_PRIMARYKEY` / `UNIQUE` → `RepositoryError::AlreadyExists`
/// - `SQLITE_CONSTRAINT_CHECK` / `NOTNULL` → `RepositoryError::InvalidData`
/// - `QueryReturnedNoRows` → `RepositoryError::NotFound`
/// - Open/busy/locked errors → `RepositoryError::ConnectionFailed`
/// - Row decoding errors → `RepositoryError::Serialization`
/// - All other errors → `RepositoryError::QueryFailed`
fn map_rusqlite_error(err: &rusqlite::Error, id: &str) -> RepositoryError {
    match err {
        rusqlite::Error::SqliteFailure(sqlite_err, _)
            if sqlite_err.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_PRIMARYKEY
                || sqlite_err.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE =>
        {
            RepositoryError::AlreadyExists {
                entity_type: ENTITY,
                id: id.to_string(),
            }
        }

        rusqlite::Error::SqliteFailure(sqlite_err, _)
            if sqlite_err.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_CHECK
                || sqlite_err.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_NOTNULL =>
        {
            RepositoryError::InvalidData(format!("Constraint violation for {ENTITY}: {err}"))
        }

        rusqlite::Error::SqliteFailure(sqlite_err, _)
            if matches!(
                sqlite_err.code,
                rusqlite::ErrorCode::CannotOpen
                    | rusqlite::ErrorCode::DatabaseBusy
                    | rusqlite::ErrorCode::DatabaseLocked
            ) =>
        {
            RepositoryError::ConnectionFailed(format!("Database unavailable: {err}"))
        }

        rusqlite::Error::QueryReturnedNoRows => RepositoryError::item_not_found(id),

        rusqlite::Error::FromSqlConversionFailure(..) | rusqlite::Error::InvalidColumnType(..) => {
            RepositoryError::Serialization(err.to_string())
        }

        _ => RepositoryError::QueryFailed(err.to_string()),
    }
}

/// Maps a tokio_rusqlite error with a known ID to a RepositoryError.
///
/// Use an empty `id` when no single item is targeted (e.g. listing).
pub fn map_tokio_rusqlite_error(err: tokio_rusqlite::Error, id: impl AsRef<str>) -> RepositoryError {
    match &err {
        tokio_rusqlite::Error::Rusqlite(rusqlite_err) => {
            map_rusqlite_error(rusqlite_err, id.as_ref())
        }
        tokio_rusqlite::Error::ConnectionClosed | tokio_rusqlite::Error::Close(_) => {
            RepositoryError::ConnectionFailed("Connection closed unexpectedly".to_string())
        }
        _ => RepositoryError::QueryFailed(err.to_string()),
    }
}

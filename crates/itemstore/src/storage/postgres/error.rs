//! PostgreSQL error mapping.
//!
//! Maps `sqlx::Error` to `RepositoryError` by SQLSTATE class.

use itemstore_core::storage::RepositoryError;

/// Category of a PostgreSQL SQLSTATE code relevant to item writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SqlStateKind {
    UniqueViolation,
    Integrity,
    Unavailable,
    Other,
}

fn classify_sqlstate(code: &str) -> SqlStateKind {
    match code {
        "23505" => SqlStateKind::UniqueViolation,
        // not_null, check, foreign key, string too long, numeric out of range
        "23502" | "23503" | "23514" | "22001" | "22003" => SqlStateKind::Integrity,
        // connection exceptions, admin shutdown, cannot connect now
        c if c.starts_with("08") => SqlStateKind::Unavailable,
        "57P01" | "57P02" | "57P03" => SqlStateKind::Unavailable,
        _ => SqlStateKind::Other,
    }
}

/// Maps a sqlx error to a RepositoryError.
///
/// Use an empty `id` when no single item is targeted (e.g. listing).
pub fn map_sqlx_error(err: sqlx::Error, id: impl AsRef<str>) -> RepositoryError {
    let id = id.as_ref();
    match &err {
        sqlx::Error::RowNotFound => RepositoryError::item_not_found(id),

        sqlx::Error::Database(db_err) => {
            let code = db_err.code().map(|c| c.into_owned()).unwrap_or_default();
            match classify_sqlstate(&code) {
                SqlStateKind::UniqueViolation => RepositoryError::AlreadyExists {
                    entity_type: "Item",
                    id: id.to_string(),
                },
                SqlStateKind::Integrity => {
                    RepositoryError::InvalidData(format!("Constraint violation: {db_err}"))
                }
                SqlStateKind::Unavailable => RepositoryError::ConnectionFailed(db_err.to_string()),
                SqlStateKind::Other => RepositoryError::QueryFailed(db_err.to_string()),
            }
        }

        sqlx::Error::Io(_)
        | sqlx::Error::Tls(_)
        | sqlx::Error::PoolTimedOut
        | sqlx::Error::PoolClosed
        | sqlx::Error::WorkerCrashed => RepositoryError::ConnectionFailed(err.to_string()),

        sqlx::Error::ColumnDecode { .. }
        | sqlx::Error::ColumnNotFound(_)
        | sqlx::Error::Decode(_)
        | sqlx::Error::TypeNotFound { .. } => RepositoryError::Serialization(err.to_string()),

        _ => RepositoryError::QueryFailed(err.to_string()),
    }
}

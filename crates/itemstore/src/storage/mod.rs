//! Storage backend implementations.
//!
//! This module provides concrete implementations of [`ItemRepository`]
//! and picks one at startup.
//!
//! # Feature Flags
//!
//! - `postgres` (default): PostgreSQL backend using `sqlx`
//! - `sqlite` (default): SQLite backend using `rusqlite` and `tokio-rusqlite`
//!
//! The in-memory backend is always available. Unlike the compile-time
//! selection of a single backend, every compiled backend can be chosen at
//! runtime with `--storage`, and `--fallback` names the store to use when
//! the primary one fails to initialize.

use std::sync::Arc;

use clap::ValueEnum;
use itemstore_core::storage::{ItemRepository, Result};

use crate::config::Config;

pub mod inmemory;
#[cfg(feature = "postgres")]
pub mod postgres;
#[cfg(feature = "sqlite")]
pub mod sqlite;

pub use inmemory::InMemoryRepository;
#[cfg(feature = "postgres")]
pub use postgres::PostgresRepository;
#[cfg(feature = "sqlite")]
pub use sqlite::SqliteRepository;

/// Store backends selectable at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StorageBackend {
    /// PostgreSQL, configured from the `POSTGRES_*` variables.
    Postgres,
    /// SQLite database file at `SQLITE_PATH`.
    Sqlite,
    /// Process memory; lost on restart.
    Memory,
}

/// Store to use when the primary backend cannot be initialized.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Fallback {
    /// Abort startup with the initialization error.
    #[default]
    None,
    /// Fall back to SQLite.
    Sqlite,
    /// Fall back to process memory.
    Memory,
}

impl Fallback {
    fn backend(self) -> Option<StorageBackend> {
        match self {
            Fallback::None => None,
            Fallback::Sqlite => Some(StorageBackend::Sqlite),
            Fallback::Memory => Some(StorageBackend::Memory),
        }
    }
}

/// Opens the given backend, creating its schema when needed.
pub async fn open(backend: StorageBackend, config: &Config) -> Result<Arc<dyn ItemRepository>> {
    match backend {
        StorageBackend::Memory => Ok(Arc::new(InMemoryRepository::new())),
        StorageBackend::Postgres => open_postgres(config).await,
        StorageBackend::Sqlite => open_sqlite(config).await,
    }
}

/// Opens `primary`, or `fallback` if the primary store fails to initialize.
pub async fn open_with_fallback(
    primary: StorageBackend,
    fallback: Fallback,
    config: &Config,
) -> Result<Arc<dyn ItemRepository>> {
    match open(primary, config).await {
        Ok(repo) => Ok(repo),
        Err(e) => match fallback.backend() {
            Some(backend) if backend != primary => {
                tracing::warn!(
                    error = %e,
                    primary = ?primary,
                    fallback = ?backend,
                    "Primary store unavailable, using fallback"
                );
                open(backend, config).await
            }
            _ => Err(e),
        },
    }
}

#[cfg(feature = "postgres")]
async fn open_postgres(config: &Config) -> Result<Arc<dyn ItemRepository>> {
    tracing::info!(url = %config.postgres.redacted_url(), "Connecting to PostgreSQL");
    let repo = PostgresRepository::connect(
        &config.database_url(),
        config.db_max_connections,
        std::time::Duration::from_secs(config.db_connect_timeout_secs),
    )
    .await?;
    Ok(Arc::new(repo))
}

#[cfg(not(feature = "postgres"))]
async fn open_postgres(_config: &Config) -> Result<Arc<dyn ItemRepository>> {
    Err(not_compiled("postgres"))
}

#[cfg(feature = "sqlite")]
async fn open_sqlite(config: &Config) -> Result<Arc<dyn ItemRepository>> {
    tracing::info!(path = %config.sqlite_path, "Opening SQLite database");
    let repo = SqliteRepository::new(&config.sqlite_path).await?;
    Ok(Arc::new(repo))
}

#[cfg(not(feature = "sqlite"))]
async fn open_sqlite(_config: &Config) -> Result<Arc<dyn ItemRepository>> {
    Err(not_compiled("sqlite"))
}

#[cfg(not(all(feature = "postgres", feature = "sqlite")))]
fn not_compiled(feature: &str) -> itemstore_core::storage::RepositoryError {
    itemstore_core::storage::RepositoryError::ConnectionFailed(format!(
        "{feature} backend not compiled in; rebuild with --features {feature}"
    ))
}

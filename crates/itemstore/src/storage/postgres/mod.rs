//! PostgreSQL storage backend implementation.
//!
//! Uses a `sqlx` connection pool. The `items` table is created at startup
//! when missing; there are no versioned migrations.

mod error;
mod repository;
mod schema;

pub use repository::PostgresRepository;

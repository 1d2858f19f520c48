//! SQLite repository implementation.
//!
//! Implements [`ItemRepository`] from `itemstore_core::storage` using SQLite.

use async_trait::async_trait;
use tokio_rusqlite::Connection;
use uuid::Uuid;

use itemstore_core::item::{apply_item_update, timestamp_now, CreateItemRequest, Item, UpdateItemRequest};
use itemstore_core::storage::{ItemRepository, RepositoryError, Result};

use super::conversions::{format_datetime, row_to_item};
use super::error::map_tokio_rusqlite_error;
use super::schema;

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

/// SQLite-based repository implementation.
///
/// All statements run on the single background thread owned by the
/// `tokio_rusqlite` connection, so a read-merge-write inside one `call`
/// cannot interleave with another request.
pub struct SqliteRepository {
    conn: Connection,
}

impl SqliteRepository {
    /// Creates a new repository with a file-based database.
    ///
    /// The database file will be created if it doesn't exist.
    /// Schema tables are created automatically.
    pub async fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(path)
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Creates a new repository with an in-memory database.
    ///
    /// Data is lost when the connection is dropped.
    #[cfg(test)]
    pub async fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Initialize the database schema.
    async fn init_schema(conn: &Connection) -> Result<()> {
        conn.call(|conn| {
            conn.execute_batch(schema::CREATE_TABLES)
                .map_err(wrap_err)?;
            Ok(())
        })
        .await
        .map_err(|e| map_tokio_rusqlite_error(e, ""))
    }
}

#[async_trait]
impl ItemRepository for SqliteRepository {
    fn backend_name(&self) -> &'static str {
        "sqlite"
    }

    async fn create_item(&self, request: &CreateItemRequest) -> Result<Item> {
        let item = request.clone().into_item();
        let id = item.id.to_string();
        let stored = item.clone();

        self.conn
            .call(move |conn| {
                conn.execute(
                    schema::INSERT_ITEM,
                    rusqlite::params![
                        item.id.to_string(),
                        item.name,
                        item.price,
                        item.description,
                        item.is_offer,
                        format_datetime(&item.created_at),
                        format_datetime(&item.updated_at),
                    ],
                )
                .map_err(wrap_err)?;
                Ok(())
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, &id))?;

        Ok(stored)
    }

    async fn list_items(&self) -> Result<Vec<Item>> {
        self.conn
            .call(|conn| {
                let mut stmt = conn.prepare(schema::SELECT_ITEMS).map_err(wrap_err)?;
                let rows = stmt.query_map([], row_to_item).map_err(wrap_err)?;

                let mut items = Vec::new();
                for row_result in rows {
                    items.push(row_result.map_err(wrap_err)?);
                }
                Ok(items)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, ""))
    }

    async fn get_item(&self, id: Uuid) -> Result<Item> {
        let id_str = id.to_string();

        self.conn
            .call(move |conn| {
                conn.query_row(schema::SELECT_ITEM_BY_ID, [&id_str], row_to_item)
                    .map_err(wrap_err)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, id.to_string()))
    }

    async fn update_item(&self, id: Uuid, update: &UpdateItemRequest) -> Result<Item> {
        let id_str = id.to_string();
        let update = update.clone();

        self.conn
            .call(move |conn| {
                let mut item = conn
                    .query_row(schema::SELECT_ITEM_BY_ID, [&id_str], row_to_item)
                    .map_err(wrap_err)?;

                apply_item_update(&mut item, &update, timestamp_now());

                conn.execute(
                    schema::UPDATE_ITEM,
                    rusqlite::params![
                        id_str,
                        item.name,
                        item.price,
                        item.description,
                        item.is_offer,
                        format_datetime(&item.updated_at),
                    ],
                )
                .map_err(wrap_err)?;
                Ok(item)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, id.to_string()))
    }

    async fn delete_item(&self, id: Uuid) -> Result<()> {
        let id_str = id.to_string();

        self.conn
            .call(move |conn| {
                let rows = conn
                    .execute(schema::DELETE_ITEM, [&id_str])
                    .map_err(wrap_err)?;
                if rows == 0 {
                    Err(wrap_err(rusqlite::Error::QueryReturnedNoRows))
                } else {
                    Ok(())
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, id.to_string()))
    }
}

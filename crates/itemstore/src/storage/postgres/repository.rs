//! PostgreSQL repository implementation.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use uuid::Uuid;

use itemstore_core::item::{timestamp_now, CreateItemRequest, Item, UpdateItemRequest};
use itemstore_core::storage::{ItemRepository, RepositoryError, Result};

use super::error::map_sqlx_error;
use super::schema;

/// Row shape of the `items` table.
#[derive(Debug, sqlx::FromRow)]
struct ItemRow {
    id: Uuid,
    name: String,
    price: f64,
    description: Option<String>,
    is_offer: Option<bool>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<ItemRow> for Item {
    fn from(row: ItemRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            price: row.price,
            description: row.description,
            is_offer: row.is_offer,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// PostgreSQL-backed repository.
pub struct PostgresRepository {
    pool: PgPool,
}

impl PostgresRepository {
    /// Connects a pool to `database_url` and ensures the schema exists.
    pub async fn connect(
        database_url: &str,
        max_connections: u32,
        connect_timeout: Duration,
    ) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .acquire_timeout(connect_timeout)
            .connect(database_url)
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        let repo = Self::from_pool(pool);
        repo.migrate().await?;
        Ok(repo)
    }

    /// Wraps an existing pool without touching the schema.
    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Creates the items table if it does not exist.
    pub async fn migrate(&self) -> Result<()> {
        sqlx::raw_sql(schema::CREATE_TABLES)
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(e, ""))?;

        tracing::debug!("items schema ensured");
        Ok(())
    }
}

#[async_trait]
impl ItemRepository for PostgresRepository {
    fn backend_name(&self) -> &'static str {
        "postgres"
    }

    async fn create_item(&self, request: &CreateItemRequest) -> Result<Item> {
        let item = request.clone().into_item();

        sqlx::query_as::<_, ItemRow>(&schema::insert_item())
            .bind(item.id)
            .bind(&item.name)
            .bind(item.price)
            .bind(&item.description)
            .bind(item.is_offer)
            .bind(item.created_at)
            .bind(item.updated_at)
            .fetch_one(&self.pool)
            .await
            .map(Item::from)
            .map_err(|e| map_sqlx_error(e, item.id.to_string()))
    }

    async fn list_items(&self) -> Result<Vec<Item>> {
        let rows = sqlx::query_as::<_, ItemRow>(&schema::select_items())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(e, ""))?;

        Ok(rows.into_iter().map(Item::from).collect())
    }

    async fn get_item(&self, id: Uuid) -> Result<Item> {
        sqlx::query_as::<_, ItemRow>(&schema::select_item_by_id())
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(e, id.to_string()))?
            .map(Item::from)
            .ok_or_else(|| RepositoryError::item_not_found(id))
    }

    async fn update_item(&self, id: Uuid, update: &UpdateItemRequest) -> Result<Item> {
        if update.is_empty() {
            return self.get_item(id).await;
        }

        sqlx::query_as::<_, ItemRow>(&schema::update_item())
            .bind(id)
            .bind(&update.name)
            .bind(update.price)
            .bind(update.description.is_some())
            .bind(update.description.clone().flatten())
            .bind(update.is_offer.is_some())
            .bind(update.is_offer.flatten())
            .bind(timestamp_now())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(e, id.to_string()))?
            .map(Item::from)
            .ok_or_else(|| RepositoryError::item_not_found(id))
    }

    async fn delete_item(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query(schema::DELETE_ITEM)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(e, id.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::item_not_found(id));
        }
        Ok(())
    }
}

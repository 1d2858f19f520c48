use async_trait::async_trait;
use uuid::Uuid;

use crate::item::{CreateItemRequest, Item, UpdateItemRequest};

use super::Result;

/// Repository for item operations.
///
/// Every backend must uphold the same contract: IDs are assigned by the
/// repository and never reused, updates merge only supplied fields and never
/// create records, and missing IDs surface as [`RepositoryError::NotFound`].
///
/// [`RepositoryError::NotFound`]: super::RepositoryError::NotFound
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Short name of the backend, e.g. `"postgres"`.
    fn backend_name(&self) -> &'static str;

    /// Creates a new item and returns its stored representation.
    async fn create_item(&self, request: &CreateItemRequest) -> Result<Item>;

    /// Lists all stored items.
    async fn list_items(&self) -> Result<Vec<Item>>;

    /// Gets an item by its ID.
    async fn get_item(&self, id: Uuid) -> Result<Item>;

    /// Merges the supplied fields into an existing item.
    async fn update_item(&self, id: Uuid, update: &UpdateItemRequest) -> Result<Item>;

    /// Deletes an item by its ID.
    async fn delete_item(&self, id: Uuid) -> Result<()>;
}

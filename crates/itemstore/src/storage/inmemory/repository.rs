//! In-memory repository implementation.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use itemstore_core::item::{apply_item_update, timestamp_now, CreateItemRequest, Item, UpdateItemRequest};
use itemstore_core::storage::{ItemRepository, RepositoryError, Result};

/// In-memory storage backend.
///
/// A single `RwLock` guards the whole map, so readers never observe a
/// half-applied update. Data is lost when the repository is dropped.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    items: Arc<RwLock<HashMap<Uuid, Item>>>,
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ItemRepository for InMemoryRepository {
    fn backend_name(&self) -> &'static str {
        "memory"
    }

    async fn create_item(&self, request: &CreateItemRequest) -> Result<Item> {
        let item = request.clone().into_item();
        let mut items = self.items.write().await;
        if items.contains_key(&item.id) {
            return Err(RepositoryError::AlreadyExists {
                entity_type: "Item",
                id: item.id.to_string(),
            });
        }
        items.insert(item.id, item.clone());
        Ok(item)
    }

    async fn list_items(&self) -> Result<Vec<Item>> {
        let items = self.items.read().await;
        let mut listed: Vec<Item> = items.values().cloned().collect();
        listed.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        Ok(listed)
    }

    async fn get_item(&self, id: Uuid) -> Result<Item> {
        let items = self.items.read().await;
        items
            .get(&id)
            .cloned()
            .ok_or_else(|| RepositoryError::item_not_found(id))
    }

    async fn update_item(&self, id: Uuid, update: &UpdateItemRequest) -> Result<Item> {
        let mut items = self.items.write().await;
        let item = items
            .get_mut(&id)
            .ok_or_else(|| RepositoryError::item_not_found(id))?;
        apply_item_update(item, update, timestamp_now());
        Ok(item.clone())
    }

    async fn delete_item(&self, id: Uuid) -> Result<()> {
        let mut items = self.items.write().await;
        if items.remove(&id).is_none() {
            return Err(RepositoryError::item_not_found(id));
        }
        Ok(())
    }
}

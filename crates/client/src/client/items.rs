//! Item API operations.

use uuid::Uuid;

use itemstore_core::item::{CreateItemRequest, Item, UpdateItemRequest};

use super::ItemstoreClient;
use crate::error::Result;

impl ItemstoreClient {
    /// List all items.
    pub async fn list_items(&self) -> Result<Vec<Item>> {
        let response = self.client.get(self.url("/items")).send().await?;
        self.handle_response(response, "items").await
    }

    /// Create a new item.
    pub async fn create_item(&self, req: &CreateItemRequest) -> Result<Item> {
        let response = self
            .client
            .post(self.url("/items"))
            .json(req)
            .send()
            .await?;
        self.handle_response(response, "items").await
    }

    /// Get item by ID.
    pub async fn get_item(&self, id: Uuid) -> Result<Item> {
        let response = self
            .client
            .get(self.url(&format!("/items/{id}")))
            .send()
            .await?;
        self.handle_response(response, &format!("item {id}")).await
    }

    /// Update an item. Fields left out of `req` keep their stored values.
    pub async fn update_item(&self, id: Uuid, req: &UpdateItemRequest) -> Result<Item> {
        let response = self
            .client
            .put(self.url(&format!("/items/{id}")))
            .json(req)
            .send()
            .await?;
        self.handle_response(response, &format!("item {id}")).await
    }

    /// Delete item by ID.
    pub async fn delete_item(&self, id: Uuid) -> Result<()> {
        let response = self
            .client
            .delete(self.url(&format!("/items/{id}")))
            .send()
            .await?;
        self.handle_delete_response(response, &format!("item {id}"))
            .await
    }
}

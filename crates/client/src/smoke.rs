//! End-to-end check of a running server.
//!
//! Walks one item through its whole lifecycle: health, service info,
//! create, list, get, update, delete, and finally confirms the item is gone.

use itemstore_core::item::{CreateItemRequest, UpdateItemRequest};

use crate::client::ItemstoreClient;
use crate::error::{ClientError, Result};

fn fail(step: &'static str, reason: impl Into<String>) -> ClientError {
    ClientError::SmokeFailed {
        step,
        reason: reason.into(),
    }
}

/// Runs the smoke sequence, calling `on_step` after each passed step.
///
/// Stops at the first failure. The created item is deleted on success; a
/// failure after the create step may leave it behind.
pub async fn run<F>(client: &ItemstoreClient, mut on_step: F) -> Result<()>
where
    F: FnMut(&str, &str),
{
    let health = client
        .health()
        .await
        .map_err(|e| fail("health", e.to_string()))?;
    if health.status != "healthy" {
        return Err(fail("health", format!("status is '{}'", health.status)));
    }
    on_step("health", &health.status);

    let info = client
        .info()
        .await
        .map_err(|e| fail("info", e.to_string()))?;
    on_step("info", &format!("storage={}", info.storage));

    let request = CreateItemRequest::new("Widget", 9.99);
    let created = client
        .create_item(&request)
        .await
        .map_err(|e| fail("create", e.to_string()))?;
    if created.name != request.name || created.price != request.price {
        return Err(fail("create", "stored item differs from request"));
    }
    on_step("create", &created.id.to_string());

    let listed = client
        .list_items()
        .await
        .map_err(|e| fail("list", e.to_string()))?;
    if !listed.iter().any(|item| item.id == created.id) {
        return Err(fail("list", "created item missing from list"));
    }
    on_step("list", &format!("{} item(s)", listed.len()));

    let fetched = client
        .get_item(created.id)
        .await
        .map_err(|e| fail("get", e.to_string()))?;
    if fetched != created {
        return Err(fail("get", "fetched item differs from created item"));
    }
    on_step("get", &fetched.id.to_string());

    let update = UpdateItemRequest::from(
        CreateItemRequest::new("Widget", 12.5).with_offer(true),
    );
    let updated = client
        .update_item(created.id, &update)
        .await
        .map_err(|e| fail("update", e.to_string()))?;
    if updated.id != created.id || updated.price != 12.5 || updated.is_offer != Some(true) {
        return Err(fail("update", "update not reflected in returned item"));
    }
    on_step("update", &format!("price={}", updated.price));

    client
        .delete_item(created.id)
        .await
        .map_err(|e| fail("delete", e.to_string()))?;
    on_step("delete", &created.id.to_string());

    match client.get_item(created.id).await {
        Err(e) if e.is_not_found() => {
            on_step("verify", "404 after delete");
            Ok(())
        }
        Err(e) => Err(fail("verify", e.to_string())),
        Ok(_) => Err(fail("verify", "item still present after delete")),
    }
}

use chrono::{DateTime, Utc};

use super::error::ItemError;
use super::requests::{CreateItemRequest, UpdateItemRequest};
use super::types::{Item, MAX_NAME_LENGTH};

fn validate_name(name: &str) -> Result<(), ItemError> {
    if name.trim().is_empty() {
        return Err(ItemError::EmptyName);
    }
    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(ItemError::NameTooLong);
    }
    Ok(())
}

fn validate_price(price: f64) -> Result<(), ItemError> {
    if !price.is_finite() {
        return Err(ItemError::InvalidPrice);
    }
    Ok(())
}

/// Validates a create payload before it reaches a repository.
pub fn validate_create_request(request: &CreateItemRequest) -> Result<(), ItemError> {
    validate_name(&request.name)?;
    validate_price(request.price)
}

/// Validates the supplied fields of an update payload.
pub fn validate_update_request(request: &UpdateItemRequest) -> Result<(), ItemError> {
    if let Some(name) = &request.name {
        validate_name(name)?;
    }
    if let Some(price) = request.price {
        validate_price(price)?;
    }
    Ok(())
}

/// Merges an update into an item.
///
/// Only supplied fields overwrite. `id` and `created_at` never change;
/// `updated_at` is set to `now`. An empty update leaves the item untouched,
/// `updated_at` included.
pub fn apply_item_update(item: &mut Item, update: &UpdateItemRequest, now: DateTime<Utc>) {
    if update.is_empty() {
        return;
    }
    if let Some(name) = &update.name {
        item.name = name.clone();
    }
    if let Some(price) = update.price {
        item.price = price;
    }
    if let Some(description) = &update.description {
        item.description = description.clone();
    }
    if let Some(is_offer) = update.is_offer {
        item.is_offer = is_offer;
    }
    item.updated_at = now;
}

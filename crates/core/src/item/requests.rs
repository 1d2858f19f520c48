//! API request types for item operations.
//!
//! These types are shared between the server and client for type-safe API communication.
//! Following the Functional Core pattern, these are pure data types with no I/O.

use serde::{Deserialize, Serialize};

use super::types::Item;
use crate::serde::{deserialize_non_null, deserialize_nullable, serialize_nullable};

/// Request payload for creating a new item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateItemRequest {
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub is_offer: Option<bool>,
}

impl CreateItemRequest {
    /// Create a new request with the required fields.
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            price,
            description: None,
            is_offer: None,
        }
    }

    /// Set the item description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the offer flag.
    pub fn with_offer(mut self, is_offer: bool) -> Self {
        self.is_offer = Some(is_offer);
        self
    }

    /// Convert into an Item with a freshly generated ID and timestamps.
    pub fn into_item(self) -> Item {
        Item {
            description: self.description,
            is_offer: self.is_offer,
            ..Item::new(self.name, self.price)
        }
    }
}

/// Request payload for updating an item.
///
/// Only supplied fields are changed. `description` and `is_offer` can be
/// cleared by sending an explicit `null`; `name` and `price` reject it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateItemRequest {
    #[serde(
        default,
        deserialize_with = "deserialize_non_null",
        skip_serializing_if = "Option::is_none"
    )]
    pub name: Option<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_non_null",
        skip_serializing_if = "Option::is_none"
    )]
    pub price: Option<f64>,
    #[serde(
        default,
        deserialize_with = "deserialize_nullable",
        serialize_with = "serialize_nullable",
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<Option<String>>,
    #[serde(
        default,
        deserialize_with = "deserialize_nullable",
        serialize_with = "serialize_nullable",
        skip_serializing_if = "Option::is_none"
    )]
    pub is_offer: Option<Option<bool>>,
}

impl UpdateItemRequest {
    /// Returns true when the request would not change any field.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.price.is_none()
            && self.description.is_none()
            && self.is_offer.is_none()
    }
}

impl From<CreateItemRequest> for UpdateItemRequest {
    /// A full body replaces every mutable field, including clearing the optionals.
    fn from(request: CreateItemRequest) -> Self {
        Self {
            name: Some(request.name),
            price: Some(request.price),
            description: Some(request.description),
            is_offer: Some(request.is_offer),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_minimal_json() {
        let request: CreateItemRequest =
            serde_json::from_str(r#"{"name": "Widget", "price": 9.99}"#).unwrap();

        assert_eq!(request, CreateItemRequest::new("Widget", 9.99));
    }

    #[test]
    fn test_create_request_missing_price_fails() {
        let result = serde_json::from_str::<CreateItemRequest>(r#"{"name": "Widget"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_create_request_string_price_fails() {
        let result =
            serde_json::from_str::<CreateItemRequest>(r#"{"name": "Widget", "price": "cheap"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_create_request_integer_price_accepted() {
        let request: CreateItemRequest =
            serde_json::from_str(r#"{"name": "Widget", "price": 10}"#).unwrap();
        assert_eq!(request.price, 10.0);
    }

    #[test]
    fn test_into_item_copies_fields() {
        let item = CreateItemRequest::new("Widget", 9.99)
            .with_description("Blue")
            .with_offer(false)
            .into_item();

        assert_eq!(item.name, "Widget");
        assert_eq!(item.price, 9.99);
        assert_eq!(item.description.as_deref(), Some("Blue"));
        assert_eq!(item.is_offer, Some(false));
    }

    #[test]
    fn test_update_request_distinguishes_null_and_absent() {
        let request: UpdateItemRequest =
            serde_json::from_str(r#"{"name": "Widget2", "description": null}"#).unwrap();

        assert_eq!(request.name.as_deref(), Some("Widget2"));
        assert_eq!(request.price, None);
        assert_eq!(request.description, Some(None));
        assert_eq!(request.is_offer, None);
    }

    #[test]
    fn test_update_request_null_name_rejected() {
        let result = serde_json::from_str::<UpdateItemRequest>(r#"{"name": null}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_update_request_null_price_rejected() {
        let result = serde_json::from_str::<UpdateItemRequest>(r#"{"price": null}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_update_request_empty() {
        let request: UpdateItemRequest = serde_json::from_str("{}").unwrap();
        assert!(request.is_empty());
    }

    #[test]
    fn test_update_request_serializes_only_supplied_fields() {
        let request = UpdateItemRequest {
            price: Some(12.5),
            is_offer: Some(None),
            ..Default::default()
        };

        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(json, r#"{"price":12.5,"is_offer":null}"#);
    }

    #[test]
    fn test_update_from_create_request_sets_every_field() {
        let update = UpdateItemRequest::from(CreateItemRequest::new("Widget", 1.0));

        assert_eq!(update.name.as_deref(), Some("Widget"));
        assert_eq!(update.price, Some(1.0));
        assert_eq!(update.description, Some(None));
        assert_eq!(update.is_offer, Some(None));
    }
}

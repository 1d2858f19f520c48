use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Maximum length of an item name, matching the durable column width.
pub const MAX_NAME_LENGTH: usize = 255;

/// Current time truncated to microseconds.
///
/// Durable backends store microsecond precision, so every timestamp the
/// system assigns goes through here to keep stored and returned items equal.
pub fn timestamp_now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}

/// A named, priced record managed by the API.
///
/// `id`, `created_at` and `updated_at` are owned by the store and never
/// taken from client input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: Uuid,
    pub name: String,
    pub price: f64,
    pub description: Option<String>,
    pub is_offer: Option<bool>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Item {
    /// Creates a new item with a fresh ID and both timestamps set to now.
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        let now = timestamp_now();
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            price,
            description: None,
            is_offer: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Sets the description for this item.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the offer flag for this item.
    pub fn with_offer(mut self, is_offer: bool) -> Self {
        self.is_offer = Some(is_offer);
        self
    }

    /// Sets a specific ID for this item (useful for testing).
    pub fn with_id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }
}

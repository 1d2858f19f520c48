//! Item CLI commands.

use clap::{Parser, Subcommand};
use uuid::Uuid;

use itemstore_core::item::{CreateItemRequest, UpdateItemRequest};

use crate::error::{ClientError, Result};

/// Item management commands.
#[derive(Debug, Parser)]
pub struct ItemsCommand {
    #[command(subcommand)]
    pub action: ItemsAction,
}

/// Available item actions.
#[derive(Debug, Subcommand)]
pub enum ItemsAction {
    /// List all items.
    List,
    /// Create a new item.
    Create {
        /// Item name.
        #[arg(long)]
        name: String,
        /// Item price.
        #[arg(long)]
        price: f64,
        /// Item description.
        #[arg(long)]
        description: Option<String>,
        /// Mark the item as an offer (`--is-offer` or `--is-offer false`).
        #[arg(long, num_args = 0..=1, default_missing_value = "true")]
        is_offer: Option<bool>,
    },
    /// Get item by ID.
    Get {
        /// Item ID.
        id: Uuid,
    },
    /// Update an item. Omitted fields keep their values.
    Update {
        /// Item ID.
        id: Uuid,
        /// New name.
        #[arg(long)]
        name: Option<String>,
        /// New price.
        #[arg(long)]
        price: Option<f64>,
        /// New description.
        #[arg(long, conflicts_with = "clear_description")]
        description: Option<String>,
        /// Remove the description.
        #[arg(long)]
        clear_description: bool,
        /// New offer flag.
        #[arg(long, num_args = 0..=1, default_missing_value = "true")]
        is_offer: Option<bool>,
    },
    /// Delete item by ID.
    Delete {
        /// Item ID.
        id: Uuid,
    },
}

/// Builds the create payload from `items create` arguments.
pub fn create_request(
    name: String,
    price: f64,
    description: Option<String>,
    is_offer: Option<bool>,
) -> CreateItemRequest {
    CreateItemRequest {
        name,
        price,
        description,
        is_offer,
    }
}

/// Builds the partial update payload from `items update` arguments.
///
/// Fails when no field would change.
pub fn update_request(
    name: Option<String>,
    price: Option<f64>,
    description: Option<String>,
    clear_description: bool,
    is_offer: Option<bool>,
) -> Result<UpdateItemRequest> {
    let description = if clear_description {
        Some(None)
    } else {
        description.map(Some)
    };

    let request = UpdateItemRequest {
        name,
        price,
        description,
        is_offer: is_offer.map(Some),
    };

    if request.is_empty() {
        return Err(ClientError::InvalidInput(
            "nothing to update; pass at least one field".to_string(),
        ));
    }
    Ok(request)
}

mod error;
mod operations;
mod requests;
mod types;

pub use error::ItemError;
pub use operations::{apply_item_update, validate_create_request, validate_update_request};
pub use requests::{CreateItemRequest, UpdateItemRequest};
pub use types::{timestamp_now, Item, MAX_NAME_LENGTH};

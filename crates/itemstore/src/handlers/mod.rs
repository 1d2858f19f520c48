pub mod error;
pub mod health;
pub mod items;
pub mod root;

use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

pub use error::AppResult;

/// Fallback for unmatched routes.
pub async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json(json!({ "detail": "Not Found" })))
}

//! Item resource handlers.
//!
//! Handlers check request shape and delegate to the repository in
//! [`AppState`]. Extractor rejections are taken as `Result` so they render
//! through [`AppError`](crate::handlers::error::AppError) with the common `{"detail": ...}` body.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use itemstore_core::item::{
    validate_create_request, validate_update_request, CreateItemRequest, Item, UpdateItemRequest,
};

use crate::{handlers::AppResult, state::AppState};

/// List all items (GET /items).
pub async fn list_items(State(state): State<AppState>) -> AppResult<Json<Vec<Item>>> {
    let items = state.items.list_items().await?;
    Ok(Json(items))
}

/// Create a new item (POST /items).
pub async fn create_item(
    State(state): State<AppState>,
    payload: Result<Json<CreateItemRequest>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Item>)> {
    let Json(request) = payload?;
    validate_create_request(&request)?;

    let item = state.items.create_item(&request).await?;

    tracing::info!(item_id = %item.id, name = %item.name, "Created item");

    Ok((StatusCode::CREATED, Json(item)))
}

/// Get a single item by ID (GET /items/{id}).
pub async fn get_item(
    State(state): State<AppState>,
    id: Result<Path<Uuid>, PathRejection>,
) -> AppResult<Json<Item>> {
    let Path(id) = id?;
    let item = state.items.get_item(id).await?;
    Ok(Json(item))
}

/// Update an item by ID (PUT /items/{id}).
///
/// Only the fields present in the body are changed. An explicit `null`
/// clears `description` or `is_offer`.
pub async fn update_item(
    State(state): State<AppState>,
    id: Result<Path<Uuid>, PathRejection>,
    payload: Result<Json<UpdateItemRequest>, JsonRejection>,
) -> AppResult<Json<Item>> {
    let Path(id) = id?;
    let Json(request) = payload?;
    validate_update_request(&request)?;

    let item = state.items.update_item(id, &request).await?;

    tracing::info!(item_id = %id, "Updated item");

    Ok(Json(item))
}

/// Delete an item by ID (DELETE /items/{id}).
pub async fn delete_item(
    State(state): State<AppState>,
    id: Result<Path<Uuid>, PathRejection>,
) -> AppResult<StatusCode> {
    let Path(id) = id?;
    state.items.delete_item(id).await?;

    tracing::info!(item_id = %id, "Deleted item");

    Ok(StatusCode::NO_CONTENT)
}

//! Service banner.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct RootResponse {
    pub message: String,
    pub status: &'static str,
    pub storage: &'static str,
    pub name: String,
    pub version: String,
    pub description: String,
}

/// GET / - Reports that the service is up and which store it serves from.
pub async fn root(State(state): State<AppState>) -> Json<RootResponse> {
    let info = &state.info;
    Json(RootResponse {
        message: format!("Welcome to the {}", info.name),
        status: "online",
        storage: state.backend_name(),
        name: info.name.clone(),
        version: info.version.clone(),
        description: info.description.clone(),
    })
}

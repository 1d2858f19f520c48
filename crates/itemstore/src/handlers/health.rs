//! Liveness endpoint.

use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// GET /health - Liveness probe.
///
/// Returns 200 without touching the store.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "healthy" })
}

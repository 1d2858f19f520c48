//! Health and service info operations.

use serde::{Deserialize, Serialize};

use super::ItemstoreClient;
use crate::error::Result;

/// Body of `GET /health`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
}

/// Body of `GET /`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceInfo {
    pub message: String,
    pub status: String,
    pub storage: String,
}

impl ItemstoreClient {
    /// Check server liveness.
    pub async fn health(&self) -> Result<HealthStatus> {
        let response = self.client.get(self.url("/health")).send().await?;
        self.handle_response(response, "health").await
    }

    /// Fetch the service banner, including the active store backend.
    pub async fn info(&self) -> Result<ServiceInfo> {
        let response = self.client.get(self.url("/")).send().await?;
        self.handle_response(response, "service info").await
    }
}

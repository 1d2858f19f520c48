//! HTTP client for the itemstore API.

pub mod health;
pub mod items;

use serde::Deserialize;

use crate::error::{ClientError, Result};

/// Default server URL when neither `--base-url` nor `ITEMSTORE_URL` is set.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Error body returned by the server.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: String,
}

/// HTTP client for the itemstore API.
#[derive(Debug, Clone)]
pub struct ItemstoreClient {
    client: reqwest::Client,
    base_url: String,
}

impl ItemstoreClient {
    /// Create a new client with the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a URL for an endpoint.
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Decode a success body or turn the status into a [`ClientError`].
    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
        resource: &str,
    ) -> Result<T> {
        let status = response.status();
        if status.is_success() {
            let body = response.bytes().await?;
            serde_json::from_slice(&body)
                .map_err(|e| ClientError::InvalidResponse(format!("{resource}: {e}")))
        } else {
            Err(Self::error_from(response, resource).await)
        }
    }

    /// Handle delete responses (no body expected).
    async fn handle_delete_response(
        &self,
        response: reqwest::Response,
        resource: &str,
    ) -> Result<()> {
        if response.status().is_success() {
            Ok(())
        } else {
            Err(Self::error_from(response, resource).await)
        }
    }

    async fn error_from(response: reqwest::Response, resource: &str) -> ClientError {
        let status = response.status().as_u16();
        if status == 404 {
            return ClientError::NotFound {
                resource: resource.to_string(),
            };
        }
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        ClientError::ServerError {
            status,
            message: error_detail(&body),
        }
    }
}

/// Extracts `detail` from a `{"detail": ...}` body, or returns the body as is.
fn error_detail(body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .map(|b| b.detail)
        .unwrap_or_else(|_| body.to_string())
}

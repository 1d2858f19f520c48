//! Application state shared by all request handlers.

use std::{sync::Arc, time::Duration};

use itemstore_core::storage::ItemRepository;

use crate::{config::AppInfo, storage::InMemoryRepository};

/// Default per-request timeout.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Shared application state.
///
/// Cloned for each request; the repository itself sits behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Item store selected at startup.
    pub items: Arc<dyn ItemRepository>,
    /// Service identity for the root endpoint.
    pub info: Arc<AppInfo>,
    /// Upper bound on request handling time.
    pub request_timeout: Duration,
}

impl AppState {
    pub fn new(items: Arc<dyn ItemRepository>) -> Self {
        Self {
            items,
            info: Arc::new(AppInfo::default()),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }

    pub fn with_info(mut self, info: AppInfo) -> Self {
        self.info = Arc::new(info);
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Name of the active store backend.
    pub fn backend_name(&self) -> &'static str {
        self.items.backend_name()
    }
}

impl Default for AppState {
    /// State backed by an empty in-memory store.
    fn default() -> Self {
        Self::new(Arc::new(InMemoryRepository::new()))
    }
}

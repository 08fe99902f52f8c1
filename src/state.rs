//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::LinkService;

/// State cloned into each request by axum.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService>,
}

impl AppState {
    /// Creates the state around an existing service.
    pub fn new(link_service: Arc<LinkService>) -> Self {
        Self { link_service }
    }

    /// Creates the state with a fresh service for `base_url`.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self::new(Arc::new(LinkService::new(base_url)))
    }
}

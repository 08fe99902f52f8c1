//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST /shorten` - Shorten a URL
//! - `GET  /{code}`  - Short link redirect
//! - `GET  /stats`   - Service statistics
//! - `GET  /health`  - Liveness probe
//!
//! Anything else is a JSON 404; a known path with the wrong verb is a JSON 405.
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{method_not_allowed_handler, not_found_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Builds the router with state, fallbacks and tracing applied.
pub fn build_router(state: AppState) -> Router {
    api::routes::public_routes()
        .fallback(not_found_handler)
        .method_not_allowed_fallback(method_not_allowed_handler)
        .with_state(state)
        .layer(tracing::layer())
}

/// Constructs the application router with trailing-slash normalization.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(build_router(state))
}

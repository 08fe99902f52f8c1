//! API route configuration.

use crate::api::handlers::{health_handler, redirect_handler, shorten_handler, stats_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All public routes.
///
/// # Endpoints
///
/// - `POST /shorten` - Create (or fetch) a short URL
/// - `GET  /stats`   - Shortened and redirect counters
/// - `GET  /health`  - Liveness probe
/// - `GET  /{code}`  - Redirect to the long URL
///
/// Static segments win over `/{code}`, so `GET /shorten` is a 405 rather than
/// a lookup of the code `shorten`.
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/stats", get(stats_handler))
        .route("/health", get(health_handler))
        .route("/{code}", get(redirect_handler))
}

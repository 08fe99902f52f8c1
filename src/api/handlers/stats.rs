//! Handler for service statistics.

use axum::{Json, extract::State};

use crate::api::dto::stats::StatsResponse;
use crate::state::AppState;

/// Returns the shortened and redirect counters.
///
/// # Endpoint
///
/// `GET /stats`
///
/// # Response
///
/// ```json
/// { "total_urls_shortened": 2, "total_redirects": 1 }
/// ```
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(state.link_service.stats().into())
}

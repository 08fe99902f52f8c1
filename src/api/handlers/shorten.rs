//! Handler for link shortening endpoint.

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use tracing::debug;
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates (or returns the existing) short URL for a long URL.
///
/// # Endpoint
///
/// `POST /shorten`
///
/// # Request Body
///
/// ```json
/// { "long_url": "https://example.com" }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "short_url": "http://localhost:8080/hiG9qnO",
///   "long_url": "https://example.com"
/// }
/// ```
///
/// Shortening the same URL again returns the same short URL.
///
/// # Errors
///
/// Returns 400 Bad Request if the body is not valid JSON or `long_url` is
/// missing or empty.
pub async fn shorten_handler(
    State(state): State<AppState>,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<Json<ShortenResponse>, AppError> {
    let Json(payload) = payload.inspect_err(|e| debug!("Rejected shorten body: {}", e))?;
    payload.validate()?;

    let short_url = state.link_service.shorten(&payload.long_url);

    Ok(Json(ShortenResponse {
        short_url,
        long_url: payload.long_url,
    }))
}

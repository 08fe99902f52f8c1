//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::IntoResponse,
};
use serde_json::json;
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;
use crate::utils::code_generator::is_valid_code;

/// Path segments owned by other routes. They never resolve to a link.
pub const RESERVED_CODES: [&str; 3] = ["shorten", "health", "stats"];

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// Returns 301 Moved Permanently with a `Location` header. Only successful
/// lookups are counted as redirects.
///
/// # Errors
///
/// Returns 404 Not Found if the code is unknown, malformed or one of the
/// [`RESERVED_CODES`].
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    if RESERVED_CODES.contains(&code.as_str()) || !is_valid_code(&code) {
        debug!("Reserved or malformed short code: {}", code);
        return Err(AppError::not_found("Not found", json!({ "code": code })));
    }

    let Some(long_url) = state.link_service.resolve(&code) else {
        debug!("Short code not found: {}", code);
        return Err(AppError::not_found(
            "Short URL not found",
            json!({ "code": code }),
        ));
    };

    let location = location_header(&long_url)?;

    Ok((StatusCode::MOVED_PERMANENTLY, [(header::LOCATION, location)]))
}

/// Builds a `Location` value, percent-escaping bytes a header cannot carry.
///
/// Only emptiness is checked when shortening, so stored URLs may contain
/// control characters such as `\n`.
fn location_header(long_url: &str) -> Result<HeaderValue, AppError> {
    let mut escaped = String::with_capacity(long_url.len());

    for ch in long_url.chars() {
        if ch.is_ascii_control() {
            escaped.push_str(&format!("%{:02X}", ch as u8));
        } else {
            escaped.push(ch);
        }
    }

    HeaderValue::try_from(escaped).map_err(|e| {
        AppError::internal(
            "Stored URL cannot be used as a redirect target",
            json!({ "reason": e.to_string() }),
        )
    })
}

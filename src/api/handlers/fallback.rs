//! Fallback handlers for unknown routes and unsupported methods.

use axum::http::{Method, Uri};
use serde_json::json;

use crate::error::AppError;

/// Returns a JSON 404 for routes that don't exist (including `/`).
pub async fn not_found_handler(uri: Uri) -> AppError {
    AppError::not_found("Not found", json!({ "path": uri.path() }))
}

/// Returns a JSON 405 for known routes hit with the wrong verb.
pub async fn method_not_allowed_handler(method: Method, uri: Uri) -> AppError {
    AppError::method_not_allowed(
        "Method not allowed",
        json!({ "method": method.as_str(), "path": uri.path() }),
    )
}

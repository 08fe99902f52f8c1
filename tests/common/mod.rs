#![allow(dead_code)]

use axum_test::TestServer;
use memlink::routes::build_router;
use memlink::state::AppState;
use serde_json::json;

pub const BASE_URL: &str = "http://localhost:8080";

pub fn create_test_state() -> AppState {
    AppState::with_base_url(BASE_URL)
}

pub fn create_test_server(state: AppState) -> TestServer {
    TestServer::new(build_router(state)).unwrap()
}

/// Shortens `long_url` through the API and returns the short code.
pub async fn shorten(server: &TestServer, long_url: &str) -> String {
    let response = server
        .post("/shorten")
        .json(&json!({ "long_url": long_url }))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    code_from_short_url(json["short_url"].as_str().unwrap()).to_string()
}

pub fn code_from_short_url(short_url: &str) -> &str {
    short_url
        .strip_prefix(BASE_URL)
        .and_then(|rest| rest.strip_prefix('/'))
        .unwrap()
}

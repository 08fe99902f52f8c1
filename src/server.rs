//! HTTP server initialization and runtime setup.
//!
//! Builds the link service, wires the router and runs the Axum server until
//! Ctrl-C.

use crate::config::Config;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;

/// Runs the HTTP server with the given configuration.
///
/// All links live in memory and are gone once the server stops.
///
/// # Errors
///
/// Returns an error if:
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let base_url = config.base_url();
    let state = AppState::with_base_url(base_url.clone());
    let app = app_router(state);

    let listen_addr = config.listen_addr();
    let listener = tokio::net::TcpListener::bind(&listen_addr)
        .await
        .with_context(|| format!("Failed to bind {listen_addr}"))?;

    tracing::info!("Listening on http://{}", listener.local_addr()?);
    tracing::info!("Endpoints:");
    tracing::info!("  POST {}/shorten - Shorten a URL", base_url);
    tracing::info!("  GET  {}/{{code}} - Redirect to long URL", base_url);
    tracing::info!("  GET  {}/health - Health check", base_url);
    tracing::info!("  GET  {}/stats - Service statistics", base_url);

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}

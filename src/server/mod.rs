pub mod routes;
pub mod state;

use std::sync::Arc;

use crate::config::RelayConfig;
use crate::dirs;
use crate::error::{RelayError, Result};
use crate::router::RouterClient;

/// Start the HTTP server with the given configuration.
pub async fn start(config: RelayConfig) -> Result<()> {
    dirs::ensure_dirs()?;

    let client = Arc::new(RouterClient::with_http(config.router.clone()));

    // Probe the router once at startup; a failure is logged, not fatal.
    match client.authenticate().await {
        Ok(()) => tracing::info!(router = %config.router.host, "Initial router connection succeeded"),
        Err(e) => tracing::warn!(router = %config.router.host, "Initial router connection failed: {e}"),
    }

    let bind_addr = config.bind_address();
    let app_state = state::AppState::new(client, Arc::new(config));

    let app = routes::build(app_state);

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .map_err(|e| RelayError::Server(format!("Failed to bind to {bind_addr}: {e}")))?;

    tracing::info!("Server listening on {bind_addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| RelayError::Server(format!("Server error: {e}")))?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        tracing::info!("Shutdown signal received");
    }
}

//! Server startup and shutdown logic.
//!
//! This module contains the `run_server` function which handles:
//! - Application state creation
//! - Router creation
//! - Server binding and graceful shutdown

use crate::config::Config;
use crate::cors;
use crate::error::{AppError, AppResult};
use crate::routes::{self, RouteGroups};
use crate::state::AppState;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, warn};

/// Run the web server with the given configuration.
///
/// # Arguments
///
/// * `config` - The application configuration
/// * `groups` - External routers to mount under their `/api` prefixes
/// * `addr` - The address to bind the server to (e.g., "0.0.0.0:4000")
///
/// # Errors
///
/// Returns an error if the listener cannot bind or the server fails at runtime.
pub async fn run_server(config: Config, groups: RouteGroups, addr: String) -> AppResult<()> {
    info!("Starting rideshare gateway...");

    info!(
        environment = ?config.cors.environment,
        allowed_origins = ?cors::resolve_allowed_origins(&config.cors),
        "CORS allow-list resolved"
    );
    if config.cors.environment.is_production() && !config.cors.has_trusted_origins() {
        warn!(
            "Running in production without FRONTEND_ORIGIN, only deployment platform origins \
             and {} will be admitted",
            cors::DEV_ORIGIN
        );
    }

    for group in groups.unbound() {
        warn!(prefix = %group, "No router bound, requests will receive 404");
    }

    let state = Arc::new(AppState::new(config.cors));
    let app = routes::create_router(state, groups);

    let listener = TcpListener::bind(&addr).await?;

    info!("Rideshare API listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(create_shutdown_signal())
        .await
        .map_err(|e| AppError::Internal(format!("Server error: {}", e)))?;

    info!("Server shutdown complete");
    Ok(())
}

/// Create a future that resolves when a shutdown signal is received.
///
/// On Unix-like systems, this listens for both Ctrl+C (SIGINT) and SIGTERM.
/// On other platforms, it only listens for Ctrl+C.
///
/// # Panics
///
/// Panics if signal handler installation fails, since graceful shutdown is
/// impossible without it.
async fn create_shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(unix)]
    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    #[cfg(not(unix))]
    ctrl_c.await;
}

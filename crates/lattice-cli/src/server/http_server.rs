//! HTTP server startup and lifecycle management.

use axum::Router;
use tokio::net::TcpListener;

use crate::config::ServerConfig;
use crate::server::{Result, ServerError, shutdown_signal};
use crate::{TRACING_TARGET_SHUTDOWN, TRACING_TARGET_STARTUP};

/// Starts the HTTP server with graceful shutdown.
///
/// Binds the configured address and serves `app` until a shutdown signal
/// arrives, then drains in-flight requests before returning.
pub async fn serve_http(app: Router, server_config: ServerConfig) -> Result<()> {
    let addr = server_config.server_addr();
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;

    tracing::info!(
        target: TRACING_TARGET_STARTUP,
        addr = %addr,
        "server is ready and listening for connections"
    );

    if server_config.binds_to_all_interfaces() {
        tracing::warn!(
            target: TRACING_TARGET_STARTUP,
            "server is bound to all interfaces; ensure firewall rules are configured"
        );
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(server_config.shutdown_timeout()))
        .await
        .map_err(|err| {
            tracing::error!(
                target: TRACING_TARGET_SHUTDOWN,
                error = %err,
                "server encountered an error"
            );
            ServerError::Runtime(err)
        })?;

    tracing::info!(target: TRACING_TARGET_SHUTDOWN, "server shut down gracefully");
    Ok(())
}

#![forbid(unsafe_code)]
#![doc = include_str!("../README.md")]

mod config;
mod server;

use std::process;
use std::time::Duration;

use anyhow::Context;
use axum::Router;
use clap::Parser;
use lattice_server::handler;
use lattice_server::middleware::{RouterObservabilityExt, RouterRecoveryExt};
use lattice_server::service::ServiceState;
use tracing_subscriber::EnvFilter;

use crate::config::{Cli, ServerConfig};

/// Tracing target for server startup.
pub const TRACING_TARGET_STARTUP: &str = "lattice_cli::server::startup";
/// Tracing target for server shutdown.
pub const TRACING_TARGET_SHUTDOWN: &str = "lattice_cli::server::shutdown";

#[tokio::main]
async fn main() {
    let Err(error) = run().await else {
        tracing::info!(
            target: TRACING_TARGET_SHUTDOWN,
            "application terminated successfully"
        );
        process::exit(0);
    };

    if tracing::enabled!(tracing::Level::ERROR) {
        tracing::error!(
            target: TRACING_TARGET_SHUTDOWN,
            error = %error,
            "application terminated with error"
        );
    } else {
        eprintln!("Error: {error:#}");
    }

    process::exit(1);
}

/// Main application entry point.
async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_tracing();

    cli.server
        .validate()
        .context("invalid server configuration")?;

    let state = ServiceState::new();
    let router = create_router(state, &cli.server);

    server::serve_http(router, cli.server).await?;

    Ok(())
}

/// Wires the application router with its middleware stack.
fn create_router(state: ServiceState, config: &ServerConfig) -> Router {
    handler::routes(state)
        .with_request_timeout(Duration::from_secs(config.request_timeout))
        .with_observability()
}

/// Initializes the global tracing subscriber.
///
/// Verbosity follows `RUST_LOG`, defaulting to `info`.
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}

//! CLI configuration.

mod server;

pub use server::ServerConfig;

use clap::Parser;

/// Command-line interface for the Lattice workflow server.
#[derive(Debug, Parser)]
#[command(name = "lattice-cli", version, about)]
pub struct Cli {
    /// HTTP server configuration.
    #[command(flatten)]
    pub server: ServerConfig,
}

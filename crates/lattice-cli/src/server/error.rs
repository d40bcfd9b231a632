//! Server lifecycle errors.

use std::io;
use std::net::SocketAddr;

use thiserror::Error;

/// Result type for server lifecycle operations.
pub type Result<T, E = ServerError> = std::result::Result<T, E>;

/// Errors that can occur while starting or running the HTTP server.
#[derive(Debug, Error)]
pub enum ServerError {
    /// The listener could not be bound to the configured address.
    #[error("failed to bind {addr}")]
    Bind {
        /// Address the server attempted to bind.
        addr: SocketAddr,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The server terminated with an I/O error while serving.
    #[error("server runtime error")]
    Runtime(#[from] io::Error),
}

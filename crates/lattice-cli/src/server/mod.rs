//! HTTP server startup and lifecycle management.

mod error;
mod http_server;
mod shutdown;

pub use error::{Result, ServerError};
pub use http_server::serve_http;
pub(crate) use shutdown::shutdown_signal;

//! HTTP server configuration.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;

use anyhow::{Result as AnyhowResult, anyhow};
use clap::Args;
use serde::{Deserialize, Serialize};

/// HTTP server configuration.
///
/// # Environment Variables
///
/// All options can also be set via environment variables:
/// - `HOST` - server host address (default: 127.0.0.1)
/// - `PORT` - server port (default: 8080)
/// - `REQUEST_TIMEOUT` - request processing timeout in seconds (default: 30, max: 300)
/// - `SHUTDOWN_TIMEOUT` - graceful shutdown timeout in seconds (default: 30, max: 300)
#[derive(Debug, Clone, Args, Serialize, Deserialize)]
#[must_use = "config does nothing unless you use it"]
pub struct ServerConfig {
    /// Host address to bind the server to.
    ///
    /// Use "127.0.0.1" for localhost only, "0.0.0.0" for all interfaces.
    #[arg(long, env = "HOST", default_value = "127.0.0.1")]
    #[serde(default = "default_host")]
    pub host: IpAddr,

    /// TCP port number for the server to listen on.
    #[arg(short = 'p', long, env = "PORT", default_value_t = 8080)]
    pub port: u16,

    /// Maximum time in seconds to wait for a request to complete.
    ///
    /// Requests exceeding this timeout are terminated with 408 Request
    /// Timeout. Valid range: 1-300 seconds.
    #[arg(long, env = "REQUEST_TIMEOUT", default_value_t = 30)]
    pub request_timeout: u64,

    /// Maximum time in seconds to wait for graceful shutdown.
    ///
    /// During shutdown the server stops accepting connections and waits up
    /// to this duration for in-flight requests. Valid range: 1-300 seconds.
    #[arg(long, env = "SHUTDOWN_TIMEOUT", default_value_t = 30)]
    pub shutdown_timeout: u64,
}

/// Default host address for development.
fn default_host() -> IpAddr {
    IpAddr::V4(Ipv4Addr::LOCALHOST)
}

impl ServerConfig {
    /// Validates all configuration values.
    pub fn validate(&self) -> AnyhowResult<()> {
        if !(1..=300).contains(&self.request_timeout) {
            return Err(anyhow!(
                "request timeout must be between 1 and 300 seconds, got {}",
                self.request_timeout
            ));
        }
        if !(1..=300).contains(&self.shutdown_timeout) {
            return Err(anyhow!(
                "shutdown timeout must be between 1 and 300 seconds, got {}",
                self.shutdown_timeout
            ));
        }
        Ok(())
    }

    /// Returns the socket address to bind.
    #[must_use]
    pub fn server_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Returns whether the server binds to all interfaces.
    #[must_use]
    pub fn binds_to_all_interfaces(&self) -> bool {
        self.host.is_unspecified()
    }

    /// Returns the graceful shutdown timeout as a [`Duration`].
    #[must_use]
    pub fn shutdown_timeout(&self) -> Duration {
        Duration::from_secs(self.shutdown_timeout)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: 8080,
            request_timeout: 30,
            shutdown_timeout: 30,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = ServerConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.server_addr().port(), 8080);
        assert!(!config.binds_to_all_interfaces());
    }

    #[test]
    fn out_of_range_timeouts_are_rejected() {
        let config = ServerConfig {
            request_timeout: 0,
            ..ServerConfig::default()
        };
        assert!(config.validate().is_err());

        let config = ServerConfig {
            shutdown_timeout: 301,
            ..ServerConfig::default()
        };
        assert!(config.validate().is_err());
    }
}

//! Router middleware extensions.

use std::time::Duration;

use axum::Router;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

/// Observability middleware for the application router.
pub trait RouterObservabilityExt {
    /// Attaches HTTP request/response tracing.
    #[must_use]
    fn with_observability(self) -> Self;
}

impl RouterObservabilityExt for Router {
    fn with_observability(self) -> Self {
        self.layer(TraceLayer::new_for_http())
    }
}

/// Resilience middleware for the application router.
pub trait RouterRecoveryExt {
    /// Terminates requests that outlive `timeout` with `408 Request Timeout`.
    #[must_use]
    fn with_request_timeout(self, timeout: Duration) -> Self;
}

impl RouterRecoveryExt for Router {
    fn with_request_timeout(self, timeout: Duration) -> Self {
        self.layer(TimeoutLayer::new(timeout))
    }
}

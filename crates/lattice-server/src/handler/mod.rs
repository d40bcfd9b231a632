//! All `axum::`[`Router`]s with related handlers.
//!
//! [`routes`] assembles the complete API under `/api/v1` and binds it to a
//! [`ServiceState`]. The caller (normally `lattice-cli`) layers middleware on
//! top; see [`crate::middleware`].
//!
//! [`Router`]: axum::Router

mod error;
mod monitors;
pub mod request;
pub mod response;
mod workflows;

use axum::Router;

pub use crate::handler::error::{Error, ErrorKind, ErrorResponse, Result};
use crate::service::ServiceState;

/// Returns the fully wired application [`Router`].
pub fn routes(state: ServiceState) -> Router {
    let api = workflows::routes().merge(monitors::routes());
    Router::new().nest("/api/v1", api).with_state(state)
}

#[cfg(test)]
pub(crate) mod test {
    use axum_test::TestServer;

    use super::*;

    /// Boots a test server over a fresh, empty service state.
    pub(crate) fn create_test_server() -> TestServer {
        TestServer::new(routes(ServiceState::new())).expect("test server should boot")
    }

    #[tokio::test]
    async fn router_serves_the_health_probe() {
        let server = create_test_server();
        let response = server.get("/api/v1/health").await;
        response.assert_status_ok();
    }
}

//! Liveness probe handler.

use axum::Router;
use axum::http::StatusCode;
use axum::http::header::{CACHE_CONTROL, HeaderValue};
use axum::response::{AppendHeaders, IntoResponse, Response};
use axum::routing::get;

use crate::extract::Json;
use crate::handler::response::HealthStatus;
use crate::service::ServiceState;

/// Tracing target for monitor operations.
const TRACING_TARGET: &str = "lattice_server::handler::monitors";

/// Answers the liveness probe.
///
/// Marked `no-store` so intermediaries never mask a dead process with a
/// cached probe.
async fn health_status() -> Response {
    tracing::debug!(target: TRACING_TARGET, "health probe answered");

    let headers = AppendHeaders([(CACHE_CONTROL, HeaderValue::from_static("no-store"))]);
    (StatusCode::OK, headers, Json(HealthStatus::ok())).into_response()
}

/// Returns a [`Router`] with the monitor routes.
pub fn routes() -> Router<ServiceState> {
    Router::new().route("/health", get(health_status))
}

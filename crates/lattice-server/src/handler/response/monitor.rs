//! Health probe response.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// Response body for the liveness probe.
#[must_use]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    /// Always `"ok"` while the process is serving.
    pub status: String,
    /// Server time the probe was answered.
    pub checked_at: Timestamp,
}

impl HealthStatus {
    /// Builds an `ok` probe response stamped with the current time.
    pub fn ok() -> Self {
        Self {
            status: "ok".to_owned(),
            checked_at: Timestamp::now(),
        }
    }
}

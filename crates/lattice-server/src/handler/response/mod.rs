//! Response types produced by the handlers.

mod monitor;
mod workflows;

pub use monitor::HealthStatus;
pub use workflows::{WorkflowCreated, WorkflowList};

//! Application state and dependency injection.

use lattice_runtime::service::WorkflowService;

/// Application state.
///
/// Used for the [`State`] extraction (dependency injection). The state owns
/// the engine façade for the lifetime of the process; nothing here persists
/// across restarts.
///
/// [`State`]: axum::extract::State
#[must_use = "state does nothing unless you use it"]
#[derive(Debug, Clone, Default)]
pub struct ServiceState {
    workflows: WorkflowService,
}

impl ServiceState {
    /// Initializes application state with an empty workflow store.
    pub fn new() -> Self {
        Self {
            workflows: WorkflowService::new(),
        }
    }
}

macro_rules! impl_di {
    ($($f:ident: $t:ty),+) => {$(
        impl axum::extract::FromRef<ServiceState> for $t {
            fn from_ref(state: &ServiceState) -> Self {
                state.$f.clone()
            }
        }
    )+};
}

impl_di!(workflows: WorkflowService);

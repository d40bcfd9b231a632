//! Request types accepted by the handlers.
//!
//! The create/update body is the engine's own
//! [`WorkflowDraft`](lattice_runtime::definition::WorkflowDraft); only the
//! query-side types live here.

mod pagination;

pub use pagination::PageQuery;

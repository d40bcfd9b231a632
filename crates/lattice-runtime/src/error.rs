//! Workflow error types.

use thiserror::Error;

/// Result type for workflow operations.
pub type WorkflowResult<T> = Result<T, WorkflowError>;

/// Errors that can occur during workflow operations.
///
/// Referential inconsistencies (edges naming unknown nodes) are deliberately
/// not represented here: such edges are dropped during ingest rather than
/// failing the whole request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorkflowError {
    /// The submitted workflow has no nodes.
    #[error("workflow must contain at least one node")]
    EmptyGraph,

    /// A node was submitted without an id.
    #[error("node at index {index} is missing an id")]
    BlankNodeId {
        /// Position of the offending node in the submitted node list.
        index: usize,
    },

    /// Two nodes in the same workflow share an id.
    #[error("duplicate node id: {0}")]
    DuplicateNodeId(String),

    /// A workflow with this id already exists in the store.
    #[error("workflow id already exists: {0}")]
    IdConflict(String),

    /// No user-created workflow with this id exists in the store.
    #[error("workflow not found: {0}")]
    NotFound(String),
}

//! Workflow response envelopes.
//!
//! The full-graph responses serialize the engine's
//! [`WorkflowGraph`](lattice_runtime::definition::WorkflowGraph) directly;
//! only the listing and creation envelopes need their own shapes.

use lattice_runtime::definition::{NodeStatus, WorkflowSummary};
use lattice_runtime::service::WorkflowPage;
use lattice_runtime::store::CreatedWorkflow;
use serde::{Deserialize, Serialize};

/// Response for the paginated workflow listing.
#[must_use]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowList {
    /// Summaries on this page.
    pub workflows: Vec<WorkflowSummary>,
    /// Size of the merged collection before pagination.
    pub total: usize,
    /// Echoed effective page number.
    pub page: usize,
    /// Echoed effective page size.
    pub page_size: usize,
}

impl WorkflowList {
    /// Assembles the listing envelope from an engine page.
    pub fn new(page_data: WorkflowPage, page: usize, page_size: usize) -> Self {
        Self {
            workflows: page_data.items,
            total: page_data.total,
            page,
            page_size,
        }
    }
}

/// Response for a successful workflow creation.
#[must_use]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkflowCreated {
    /// Assigned workflow id.
    pub id: String,
    /// Stored display name.
    pub name: String,
    /// Stored description.
    #[serde(rename = "desc")]
    pub description: String,
    /// Status derived from the first node.
    pub status: NodeStatus,
    /// Number of nodes stored.
    pub nodes: usize,
    /// Number of edges stored after invalid-edge filtering.
    pub edges: usize,
}

impl From<CreatedWorkflow> for WorkflowCreated {
    fn from(created: CreatedWorkflow) -> Self {
        let CreatedWorkflow {
            summary,
            node_count,
            edge_count,
        } = created;
        Self {
            id: summary.id,
            name: summary.name,
            description: summary.description,
            status: summary.status,
            nodes: node_count,
            edges: edge_count,
        }
    }
}

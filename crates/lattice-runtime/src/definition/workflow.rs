//! Workflow body, draft and summary types.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use super::{Edge, Node, NodeStatus};
use crate::{WorkflowError, WorkflowResult};

/// A complete workflow body: an ordered node collection plus its edges.
///
/// Graphs produced by the synthesizer and the template expander additionally
/// guarantee at most two zero-in-degree nodes and layer-increasing edges;
/// user-submitted graphs only guarantee that every edge references existing
/// nodes.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WorkflowGraph {
    /// Nodes in the workflow.
    pub nodes: Vec<Node>,
    /// Edges connecting nodes.
    pub edges: Vec<Edge>,
}

impl WorkflowGraph {
    /// Creates a graph from parts already known to satisfy the node-id
    /// uniqueness and edge-endpoint invariants (generator output).
    pub(crate) fn new(nodes: Vec<Node>, edges: Vec<Edge>) -> Self {
        Self { nodes, edges }
    }

    /// Validates and normalizes a submitted node/edge collection.
    ///
    /// Enforces the construction invariants: a non-empty node list, no blank
    /// node ids, no duplicate node ids. Edges whose endpoints do not both
    /// name a submitted node are dropped rather than treated as errors, so a
    /// partially specified edge list never blocks workflow creation.
    pub fn ingest(nodes: Vec<Node>, mut edges: Vec<Edge>) -> WorkflowResult<Self> {
        if nodes.is_empty() {
            return Err(WorkflowError::EmptyGraph);
        }

        let mut ids: HashSet<&str> = HashSet::with_capacity(nodes.len());
        for (index, node) in nodes.iter().enumerate() {
            if node.id.trim().is_empty() {
                return Err(WorkflowError::BlankNodeId { index });
            }
            if !ids.insert(node.id.as_str()) {
                return Err(WorkflowError::DuplicateNodeId(node.id.clone()));
            }
        }

        edges.retain(|edge| ids.contains(edge.from.as_str()) && ids.contains(edge.to.as_str()));

        Ok(Self { nodes, edges })
    }

    /// Returns the in-degree of every node, keyed by node id.
    ///
    /// Nodes without incoming edges are present with a count of zero.
    pub fn in_degrees(&self) -> HashMap<&str, usize> {
        let mut degrees: HashMap<&str, usize> = self
            .nodes
            .iter()
            .map(|node| (node.id.as_str(), 0))
            .collect();
        for edge in &self.edges {
            if let Some(count) = degrees.get_mut(edge.to.as_str()) {
                *count += 1;
            }
        }
        degrees
    }

    /// Returns the number of zero-in-degree nodes (pipeline entry points).
    pub fn source_count(&self) -> usize {
        self.in_degrees().values().filter(|&&d| d == 0).count()
    }

    /// Display status of the workflow: the status of its first node.
    pub fn status(&self) -> NodeStatus {
        self.nodes
            .first()
            .map(|node| node.status)
            .unwrap_or_default()
    }

    /// Projects this graph into a [`WorkflowSummary`] for list views.
    pub fn summarize(
        &self,
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> WorkflowSummary {
        WorkflowSummary {
            id: id.into(),
            name: name.into(),
            status: self.status(),
            description: description.into(),
        }
    }
}

/// A submitted workflow payload, before validation and ingest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkflowDraft {
    /// Requested workflow id; assigned by the store when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Display name; defaults to the workflow id when blank.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Human-readable description.
    #[serde(default, rename = "desc", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Submitted nodes.
    #[serde(default)]
    pub nodes: Vec<Node>,
    /// Submitted edges.
    #[serde(default)]
    pub edges: Vec<Edge>,
}

/// The lightweight projection of a workflow used by list views.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowSummary {
    /// Workflow identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Status of the workflow's first node.
    pub status: NodeStatus,
    /// Human-readable description.
    #[serde(rename = "desc")]
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nodes(ids: &[&str]) -> Vec<Node> {
        ids.iter().map(|id| Node::new(*id, *id)).collect()
    }

    #[test]
    fn ingest_rejects_empty_node_list() {
        let result = WorkflowGraph::ingest(vec![], vec![]);
        assert_eq!(result.unwrap_err(), WorkflowError::EmptyGraph);
    }

    #[test]
    fn ingest_rejects_blank_node_id() {
        let result = WorkflowGraph::ingest(nodes(&["A", "  "]), vec![]);
        assert_eq!(result.unwrap_err(), WorkflowError::BlankNodeId { index: 1 });
    }

    #[test]
    fn ingest_rejects_duplicate_node_id() {
        let result = WorkflowGraph::ingest(nodes(&["A", "B", "A"]), vec![]);
        assert_eq!(
            result.unwrap_err(),
            WorkflowError::DuplicateNodeId("A".into())
        );
    }

    #[test]
    fn ingest_drops_edges_with_unknown_endpoints() {
        let graph = WorkflowGraph::ingest(
            nodes(&["A", "B"]),
            vec![
                Edge::new("A", "B"),
                Edge::new("A", "Z"),
                Edge::new("", "B"),
            ],
        )
        .unwrap();
        assert_eq!(graph.edges, vec![Edge::new("A", "B")]);
    }

    #[test]
    fn in_degrees_counts_incoming_edges() {
        let graph = WorkflowGraph::ingest(
            nodes(&["A", "B", "C"]),
            vec![Edge::new("A", "C"), Edge::new("B", "C")],
        )
        .unwrap();

        let degrees = graph.in_degrees();
        assert_eq!(degrees["A"], 0);
        assert_eq!(degrees["B"], 0);
        assert_eq!(degrees["C"], 2);
        assert_eq!(graph.source_count(), 2);
    }

    #[test]
    fn summary_takes_first_node_status() {
        let graph = WorkflowGraph::ingest(
            vec![
                Node::new("A", "a").with_status(NodeStatus::Running),
                Node::new("B", "b"),
            ],
            vec![],
        )
        .unwrap();

        let summary = graph.summarize("wf", "Workflow", "demo");
        assert_eq!(summary.status, NodeStatus::Running);
    }

    #[test]
    fn draft_deserializes_sparse_payload() {
        let draft: WorkflowDraft =
            serde_json::from_str(r#"{"nodes": [{"id": "A"}], "edges": []}"#).unwrap();
        assert!(draft.id.is_none());
        assert_eq!(draft.nodes.len(), 1);
        assert_eq!(draft.nodes[0].status, NodeStatus::Pending);
    }
}

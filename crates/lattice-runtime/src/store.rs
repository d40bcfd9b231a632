//! In-memory store for user-created workflows.

use std::collections::HashMap;

use parking_lot::RwLock;

use crate::definition::{WorkflowDraft, WorkflowGraph, WorkflowSummary};
use crate::{TRACING_TARGET, WorkflowError, WorkflowResult};

/// Outcome of a successful create: the stored summary plus graph size.
#[derive(Debug, Clone, PartialEq)]
pub struct CreatedWorkflow {
    /// Summary as stored, with defaults applied.
    pub summary: WorkflowSummary,
    /// Number of nodes stored.
    pub node_count: usize,
    /// Number of edges stored after invalid-edge filtering.
    pub edge_count: usize,
}

/// Concurrency-safe store of user-authored workflows.
///
/// The store exclusively owns every workflow record it holds: graphs enter
/// through [`create`](Self::create), change only through a full-replace
/// [`update`](Self::update) and leave through [`delete`](Self::delete).
/// Reads run concurrently; every multi-step mutation (validate, assign id,
/// check conflict, store graph, store summary) executes under one write
/// lock, so no reader ever observes a graph without its matching summary.
#[derive(Debug, Default)]
pub struct WorkflowStore {
    inner: RwLock<StoreInner>,
}

#[derive(Debug, Default)]
struct StoreInner {
    graphs: HashMap<String, WorkflowGraph>,
    summaries: HashMap<String, WorkflowSummary>,
    sequence: u64,
}

impl WorkflowStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates and stores a submitted workflow.
    ///
    /// Assigns a `user-wf-{n}` id when the draft carries none; the sequence
    /// counter lives behind the same write lock as the maps, so concurrent
    /// creates can neither race the counter nor both claim an id.
    pub fn create(&self, draft: WorkflowDraft) -> WorkflowResult<CreatedWorkflow> {
        let WorkflowDraft {
            id,
            name,
            description,
            nodes,
            edges,
        } = draft;
        let graph = WorkflowGraph::ingest(nodes, edges)?;

        let mut inner = self.inner.write();
        let id = match id.as_deref().map(str::trim).filter(|id| !id.is_empty()) {
            Some(explicit) => explicit.to_owned(),
            None => {
                inner.sequence += 1;
                format!("user-wf-{}", inner.sequence)
            }
        };
        if inner.graphs.contains_key(&id) {
            return Err(WorkflowError::IdConflict(id));
        }

        let summary = summarize(&id, name, description, &graph);
        let created = CreatedWorkflow {
            summary: summary.clone(),
            node_count: graph.nodes.len(),
            edge_count: graph.edges.len(),
        };
        inner.graphs.insert(id.clone(), graph);
        inner.summaries.insert(id, summary);

        tracing::debug!(
            target: TRACING_TARGET,
            id = %created.summary.id,
            nodes = created.node_count,
            edges = created.edge_count,
            "workflow created"
        );
        Ok(created)
    }

    /// Returns the stored graph for `id`, if any.
    pub fn get(&self, id: &str) -> Option<WorkflowGraph> {
        self.inner.read().graphs.get(id).cloned()
    }

    /// Returns whether `id` names a stored workflow.
    pub fn contains(&self, id: &str) -> bool {
        self.inner.read().graphs.contains_key(id)
    }

    /// Replaces a stored workflow and recomputes its summary.
    ///
    /// Only ids already present can be updated; an unknown id is a
    /// [`WorkflowError::NotFound`], never an implicit create. Any id carried
    /// in the draft body is ignored in favor of the addressed one.
    pub fn update(&self, id: &str, draft: WorkflowDraft) -> WorkflowResult<WorkflowGraph> {
        let WorkflowDraft {
            name,
            description,
            nodes,
            edges,
            ..
        } = draft;
        let graph = WorkflowGraph::ingest(nodes, edges)?;

        let mut inner = self.inner.write();
        if !inner.graphs.contains_key(id) {
            return Err(WorkflowError::NotFound(id.to_owned()));
        }

        let summary = summarize(id, name, description, &graph);
        inner.graphs.insert(id.to_owned(), graph.clone());
        inner.summaries.insert(id.to_owned(), summary);

        tracing::debug!(target: TRACING_TARGET, id = %id, "workflow replaced");
        Ok(graph)
    }

    /// Removes a stored workflow and its summary.
    ///
    /// Generated and templated ids are not deletable: they never live in the
    /// store, so they report [`WorkflowError::NotFound`] here.
    pub fn delete(&self, id: &str) -> WorkflowResult<()> {
        let mut inner = self.inner.write();
        if inner.graphs.remove(id).is_none() {
            return Err(WorkflowError::NotFound(id.to_owned()));
        }
        inner.summaries.remove(id);

        tracing::debug!(target: TRACING_TARGET, id = %id, "workflow deleted");
        Ok(())
    }

    /// Returns all stored summaries, sorted by id.
    ///
    /// Map iteration order is unspecified, so listing imposes an explicit
    /// order to keep pagination stable.
    pub fn summaries(&self) -> Vec<WorkflowSummary> {
        let mut summaries: Vec<WorkflowSummary> =
            self.inner.read().summaries.values().cloned().collect();
        summaries.sort_by(|a, b| a.id.cmp(&b.id));
        summaries
    }

    /// Number of stored workflows.
    pub fn len(&self) -> usize {
        self.inner.read().graphs.len()
    }

    /// Returns whether the store holds no workflows.
    pub fn is_empty(&self) -> bool {
        self.inner.read().graphs.is_empty()
    }
}

/// Builds the stored summary for a workflow, applying the listing defaults:
/// blank names fall back to the id, the status mirrors the first node.
fn summarize(
    id: &str,
    name: Option<String>,
    description: Option<String>,
    graph: &WorkflowGraph,
) -> WorkflowSummary {
    let name = name
        .map(|name| name.trim().to_owned())
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| id.to_owned());
    let description = description
        .map(|description| description.trim().to_owned())
        .unwrap_or_default();
    WorkflowSummary {
        id: id.to_owned(),
        name,
        status: graph.status(),
        description,
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::definition::{Edge, Node, NodeStatus};

    fn draft(id: Option<&str>, node_ids: &[&str], edges: Vec<Edge>) -> WorkflowDraft {
        WorkflowDraft {
            id: id.map(str::to_owned),
            name: None,
            description: None,
            nodes: node_ids.iter().map(|id| Node::new(*id, *id)).collect(),
            edges,
        }
    }

    #[test]
    fn create_then_get_round_trips() {
        let store = WorkflowStore::new();
        let created = store
            .create(draft(
                Some("mine"),
                &["A", "B"],
                vec![Edge::new("A", "B"), Edge::new("A", "Z")],
            ))
            .unwrap();

        assert_eq!(created.node_count, 2);
        assert_eq!(created.edge_count, 1);
        assert_eq!(created.summary.status, NodeStatus::Pending);

        let graph = store.get("mine").unwrap();
        assert_eq!(graph.nodes.len(), 2);
        assert_eq!(graph.edges, vec![Edge::new("A", "B")]);
    }

    #[test]
    fn create_assigns_sequential_ids() {
        let store = WorkflowStore::new();
        let first = store.create(draft(None, &["A"], vec![])).unwrap();
        let second = store.create(draft(None, &["A"], vec![])).unwrap();
        assert_eq!(first.summary.id, "user-wf-1");
        assert_eq!(second.summary.id, "user-wf-2");
    }

    #[test]
    fn create_rejects_id_conflicts() {
        let store = WorkflowStore::new();
        store.create(draft(Some("dup"), &["A"], vec![])).unwrap();
        let err = store
            .create(draft(Some("dup"), &["B"], vec![]))
            .unwrap_err();
        assert_eq!(err, WorkflowError::IdConflict("dup".into()));
    }

    #[test]
    fn create_rejects_invalid_bodies_without_storing() {
        let store = WorkflowStore::new();
        assert_eq!(
            store.create(draft(Some("x"), &[], vec![])).unwrap_err(),
            WorkflowError::EmptyGraph
        );
        assert_eq!(
            store
                .create(draft(Some("x"), &["A", "A"], vec![]))
                .unwrap_err(),
            WorkflowError::DuplicateNodeId("A".into())
        );
        assert!(store.is_empty());
    }

    #[test]
    fn summary_name_defaults_to_id() {
        let store = WorkflowStore::new();
        let created = store
            .create(WorkflowDraft {
                id: Some("named".into()),
                name: Some("   ".into()),
                description: Some("  trimmed  ".into()),
                nodes: vec![Node::new("A", "a").with_status(NodeStatus::Running)],
                edges: vec![],
            })
            .unwrap();
        assert_eq!(created.summary.name, "named");
        assert_eq!(created.summary.description, "trimmed");
        assert_eq!(created.summary.status, NodeStatus::Running);
    }

    #[test]
    fn update_never_creates() {
        let store = WorkflowStore::new();
        let err = store
            .update("missing", draft(None, &["A"], vec![]))
            .unwrap_err();
        assert_eq!(err, WorkflowError::NotFound("missing".into()));
        assert!(store.is_empty());
    }

    #[test]
    fn update_replaces_graph_and_summary() {
        let store = WorkflowStore::new();
        store.create(draft(Some("wf"), &["A"], vec![])).unwrap();

        let replaced = store
            .update(
                "wf",
                WorkflowDraft {
                    id: None,
                    name: Some("renamed".into()),
                    description: None,
                    nodes: vec![Node::new("X", "x").with_status(NodeStatus::Failed)],
                    edges: vec![],
                },
            )
            .unwrap();
        assert_eq!(replaced.nodes[0].id, "X");

        let summaries = store.summaries();
        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].name, "renamed");
        assert_eq!(summaries[0].status, NodeStatus::Failed);
    }

    #[test]
    fn delete_removes_graph_and_summary_once() {
        let store = WorkflowStore::new();
        store.create(draft(Some("gone"), &["A"], vec![])).unwrap();

        store.delete("gone").unwrap();
        assert!(store.get("gone").is_none());
        assert!(store.summaries().is_empty());

        assert_eq!(
            store.delete("gone").unwrap_err(),
            WorkflowError::NotFound("gone".into())
        );
    }

    #[test]
    fn summaries_are_sorted_by_id() {
        let store = WorkflowStore::new();
        for id in ["b", "a", "c"] {
            store.create(draft(Some(id), &["A"], vec![])).unwrap();
        }
        let summaries = store.summaries();
        let ids: Vec<&str> = summaries.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["a", "b", "c"]);
    }

    #[test]
    fn concurrent_creates_never_duplicate_ids() {
        let store = Arc::new(WorkflowStore::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = Arc::clone(&store);
                std::thread::spawn(move || {
                    for _ in 0..25 {
                        store.create(draft(None, &["A"], vec![])).unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(store.len(), 200);
        assert_eq!(store.summaries().len(), 200);
    }
}

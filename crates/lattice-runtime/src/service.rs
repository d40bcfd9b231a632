//! The collection façade.
//!
//! [`WorkflowService`] merges the mutable [store](crate::store) with the
//! read-only [catalog](crate::catalog) into one logical collection. The HTTP
//! layer talks to this type only; it never reaches into the store or the
//! resolver directly.

use std::sync::Arc;

use crate::definition::{WorkflowDraft, WorkflowGraph, WorkflowSummary};
use crate::store::{CreatedWorkflow, WorkflowStore};
use crate::{WorkflowResult, catalog};

/// One page of the merged workflow collection.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowPage {
    /// Summaries on this page, in listing order.
    pub items: Vec<WorkflowSummary>,
    /// Size of the merged collection before pagination.
    pub total: usize,
}

/// Application service over the merged workflow collection.
///
/// Cheap to clone; all clones share one store.
#[derive(Debug, Clone, Default)]
pub struct WorkflowService {
    store: Arc<WorkflowStore>,
}

impl WorkflowService {
    /// Creates a service with an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Lists one page of the merged collection.
    ///
    /// The listing starts with the fixed catalog summaries and appends the
    /// store's summaries sorted by id, so the order is stable across
    /// processes and pagination is well-defined. `total` counts the whole
    /// merged collection, and out-of-range pages yield an empty item list.
    pub fn list(&self, page: usize, page_size: usize) -> WorkflowPage {
        let mut entries = catalog::summaries();
        entries.extend(self.store.summaries());
        let total = entries.len();

        let start = page.saturating_sub(1).saturating_mul(page_size).min(total);
        let end = start.saturating_add(page_size).min(total);
        WorkflowPage {
            items: entries[start..end].to_vec(),
            total,
        }
    }

    /// Returns the graph for any id: stored workflows win, everything else
    /// resolves through the catalog. This never fails; unknown ids get a
    /// synthesized graph.
    pub fn fetch(&self, id: &str) -> WorkflowGraph {
        self.store
            .get(id)
            .unwrap_or_else(|| catalog::resolve(id))
    }

    /// Stores a submitted workflow. See [`WorkflowStore::create`].
    pub fn create(&self, draft: WorkflowDraft) -> WorkflowResult<CreatedWorkflow> {
        self.store.create(draft)
    }

    /// Replaces a stored workflow. See [`WorkflowStore::update`].
    pub fn update(&self, id: &str, draft: WorkflowDraft) -> WorkflowResult<WorkflowGraph> {
        self.store.update(id, draft)
    }

    /// Deletes a stored workflow. See [`WorkflowStore::delete`].
    pub fn delete(&self, id: &str) -> WorkflowResult<()> {
        self.store.delete(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::definition::{Node, NodeStatus};
    use crate::synth;

    /// Catalog size: three curated entries plus twenty templates.
    const CATALOG_LEN: usize = 23;

    fn draft(id: Option<&str>) -> WorkflowDraft {
        WorkflowDraft {
            id: id.map(str::to_owned),
            name: Some("t".into()),
            description: None,
            nodes: vec![Node::new("A", "a"), Node::new("B", "b")],
            edges: vec![],
        }
    }

    #[test]
    fn list_covers_the_catalog_when_the_store_is_empty() {
        let service = WorkflowService::new();
        let page = service.list(1, 100);
        assert_eq!(page.total, CATALOG_LEN);
        assert_eq!(page.items.len(), CATALOG_LEN);
    }

    #[test]
    fn list_appends_store_entries_after_the_catalog() {
        let service = WorkflowService::new();
        service.create(draft(Some("zz-mine"))).unwrap();

        let page = service.list(1, 100);
        assert_eq!(page.total, CATALOG_LEN + 1);
        assert_eq!(page.items.last().unwrap().id, "zz-mine");
    }

    #[test]
    fn list_slices_pages_and_reports_the_full_total() {
        let service = WorkflowService::new();

        let second = service.list(2, 1);
        assert_eq!(second.items.len(), 1);
        assert_eq!(second.total, CATALOG_LEN);
        assert_eq!(second.items[0].id, service.list(1, 100).items[1].id);

        let beyond = service.list(100, 20);
        assert!(beyond.items.is_empty());
        assert_eq!(beyond.total, CATALOG_LEN);
    }

    #[test]
    fn fetch_prefers_the_store_over_the_catalog() {
        let service = WorkflowService::new();
        service.create(draft(Some("wf-1"))).unwrap();

        let graph = service.fetch("wf-1");
        assert_eq!(graph.nodes.len(), 2);
    }

    #[test]
    fn fetch_falls_back_to_synthesis_after_delete() {
        let service = WorkflowService::new();
        service.create(draft(Some("mine"))).unwrap();
        service.delete("mine").unwrap();

        // The id no longer names a stored workflow, so resolution falls
        // through to the synthesizer rather than failing.
        assert_eq!(service.fetch("mine"), synth::synthesize("mine"));
        assert!(service.delete("mine").is_err());
    }

    #[test]
    fn created_statuses_default_to_pending() {
        let service = WorkflowService::new();
        let created = service.create(draft(None)).unwrap();
        assert_eq!(created.summary.status, NodeStatus::Pending);
        assert_eq!(created.node_count, 2);
    }
}

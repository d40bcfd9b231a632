//! Named pipeline templates and their expansion.
//!
//! Templates are hand-authored blueprints for realistic pipelines: a node
//! catalog, an ordered list of layers, and optional labelled conditional
//! edges. [`expand`] turns one into the same [`WorkflowGraph`] representation
//! the synthesizer produces, via a fixed linking algorithm, so the two paths
//! are indistinguishable to callers.

mod catalog;

pub use catalog::{catalog, find};

use crate::definition::{Edge, Node, NodeStatus, WorkflowGraph};

/// A hand-authored pipeline blueprint.
///
/// Everything is static data: expansion is a pure function of the template,
/// and two calls yield identical graphs.
#[derive(Debug, Clone, Copy)]
pub struct PipelineTemplate {
    /// Workflow identifier this template answers for.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Description, also applied to every expanded node.
    pub description: &'static str,
    /// Node id to display name, in authoring order.
    pub nodes: &'static [(&'static str, &'static str)],
    /// Ordered layers of node ids.
    pub layers: &'static [&'static [&'static str]],
    /// Explicit conditional edges as `(from, to, label)`, in authoring order.
    pub conditions: &'static [(&'static str, &'static str, &'static str)],
}

/// Expands a template into a workflow graph.
///
/// Nodes are emitted sorted by id with the first-layer entry points marked
/// `success`/`running`. Each node is then linked to the same-index node of
/// the next layer (round-robin) and, when that layer has more than one
/// member, to the following index as well, giving every node one or two
/// forward edges. Explicit conditional edges are appended afterwards, and
/// the visible source count is capped at two by routing surplus entry
/// points through the first layer's anchor node.
pub fn expand(template: &PipelineTemplate) -> WorkflowGraph {
    let mut nodes: Vec<Node> = template
        .nodes
        .iter()
        .map(|&(id, name)| Node::new(id, name).with_description(template.description))
        .collect();
    nodes.sort_by(|a, b| a.id.cmp(&b.id));

    if let Some(&first_layer) = template.layers.first() {
        let mut set_status = |id: &str, status: NodeStatus| {
            if let Some(node) = nodes.iter_mut().find(|node| node.id == id) {
                node.status = status;
            }
        };
        if let Some(&first) = first_layer.first() {
            set_status(first, NodeStatus::Success);
        }
        if let Some(&second) = first_layer.get(1) {
            set_status(second, NodeStatus::Running);
        }
    }

    let mut edges: Vec<Edge> = Vec::new();
    for pair in template.layers.windows(2) {
        let (from_layer, to_layer) = (pair[0], pair[1]);
        if from_layer.is_empty() || to_layer.is_empty() {
            continue;
        }
        for (index, &from) in from_layer.iter().enumerate() {
            let primary = to_layer[index % to_layer.len()];
            edges.push(Edge::new(from, primary));
            if to_layer.len() > 1 {
                let secondary = to_layer[(index + 1) % to_layer.len()];
                if secondary != primary {
                    edges.push(Edge::new(from, secondary));
                }
            }
        }
    }

    for &(from, to, label) in template.conditions {
        edges.push(Edge::conditional(from, to, label));
    }

    let mut graph = WorkflowGraph::new(nodes, edges);

    // Cap visible sources at two, anchored on the first layer's first node.
    let degrees = graph.in_degrees();
    let orphans: Vec<String> = graph
        .nodes
        .iter()
        .filter(|node| degrees[node.id.as_str()] == 0)
        .map(|node| node.id.clone())
        .collect();
    if orphans.len() > 2
        && template.layers.len() > 1
        && let Some(&anchor) = template.layers.first().and_then(|layer| layer.first())
    {
        for orphan in &orphans[2..] {
            graph.edges.push(Edge::new(anchor, orphan.clone()));
        }
    }

    graph
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::definition::EdgeKind;

    #[test]
    fn expansion_is_deterministic() {
        for template in catalog() {
            assert_eq!(expand(template), expand(template), "{}", template.id);
        }
    }

    #[test]
    fn every_template_caps_sources_at_two() {
        for template in catalog() {
            let graph = expand(template);
            assert!(
                graph.source_count() <= 2,
                "{} has {} sources",
                template.id,
                graph.source_count()
            );
        }
    }

    #[test]
    fn expanded_edges_reference_existing_nodes() {
        for template in catalog() {
            let graph = expand(template);
            let ids: HashSet<&str> = graph.nodes.iter().map(|n| n.id.as_str()).collect();
            for edge in &graph.edges {
                assert!(ids.contains(edge.from.as_str()), "{}", template.id);
                assert!(ids.contains(edge.to.as_str()), "{}", template.id);
            }
        }
    }

    #[test]
    fn expanded_nodes_are_sorted_by_id() {
        for template in catalog() {
            let graph = expand(template);
            let ids: Vec<&str> = graph.nodes.iter().map(|n| n.id.as_str()).collect();
            let mut sorted = ids.clone();
            sorted.sort_unstable();
            assert_eq!(ids, sorted, "{}", template.id);
        }
    }

    #[test]
    fn entry_points_carry_seeded_statuses() {
        let template = find("wf-4").unwrap();
        let graph = expand(template);
        // First layer is [SRC, SQOOP].
        let status_of = |id: &str| {
            graph
                .nodes
                .iter()
                .find(|node| node.id == id)
                .unwrap()
                .status
        };
        assert_eq!(status_of("SRC"), NodeStatus::Success);
        assert_eq!(status_of("SQOOP"), NodeStatus::Running);
    }

    #[test]
    fn round_robin_linking_gives_one_or_two_forward_edges() {
        let template = find("wf-5").unwrap();
        let graph = expand(template);
        // ODS is alone in its layer facing [DWD, DIM]: one primary plus one
        // secondary edge.
        let from_ods: Vec<&Edge> = graph.edges.iter().filter(|e| e.from == "ODS").collect();
        assert_eq!(from_ods.len(), 2);
        assert_eq!(from_ods[0].to, "DWD");
        assert_eq!(from_ods[1].to, "DIM");
    }

    #[test]
    fn declared_conditions_become_labelled_edges() {
        let template = find("wf-7").unwrap();
        let graph = expand(template);
        let conditional: Vec<&Edge> = graph
            .edges
            .iter()
            .filter(|edge| edge.kind == EdgeKind::Conditional)
            .collect();
        assert_eq!(conditional.len(), 2);
        assert!(
            conditional
                .iter()
                .any(|e| e.from == "STG" && e.to == "PRD" && e.label.as_deref() == Some("ok"))
        );
        assert!(
            conditional
                .iter()
                .any(|e| e.from == "STG" && e.to == "ROLL" && e.label.as_deref() == Some("fail"))
        );
    }

    #[test]
    fn catalog_ids_are_unique_and_resolvable() {
        let mut seen = HashSet::new();
        for template in catalog() {
            assert!(seen.insert(template.id), "duplicate {}", template.id);
            assert!(find(template.id).is_some());
        }
        assert!(find("wf-999").is_none());
    }
}

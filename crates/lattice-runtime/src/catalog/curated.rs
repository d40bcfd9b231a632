//! Hand-built illustrative graphs.
//!
//! These three graphs predate the template catalog and are kept bit-stable
//! for frontends that link to them: `wf-1` is the busy demo pipeline, `wf-2`
//! a fan-out/fan-in diamond, `wf-3` a mostly linear chain with one fork.

use crate::definition::{Edge, Node, NodeStatus, WorkflowGraph};

fn node(id: &str, name: &str, status: NodeStatus, description: &str) -> Node {
    Node::new(id, name)
        .with_status(status)
        .with_description(description)
}

/// `wf-1`: the 21-node model training pipeline.
pub fn training_pipeline() -> WorkflowGraph {
    use NodeStatus::{Failed, Pending, Running, Success};

    let nodes = vec![
        node("A", "Task A", Success, "data preparation"),
        node("K", "Task K", Pending, "data sampling"),
        node("B", "Task B", Running, "data cleansing"),
        node("C", "Task C", Success, "feature engineering"),
        node("L", "Task L", Pending, "rule generation"),
        node("O", "Task O", Pending, "data quality check"),
        node("D", "Task D", Pending, "model training 1"),
        node("E", "Task E", Pending, "model training 2"),
        node("P", "Task P", Pending, "feature selection"),
        node("F", "Task F", Failed, "model training 3"),
        node("G", "Task G", Pending, "model training 4"),
        node("H", "Task H", Success, "evaluation 1"),
        node("I", "Task I", Pending, "evaluation 2"),
        node("M", "Task M", Pending, "visual report"),
        node("N", "Task N", Pending, "online deployment"),
        node("J", "Task J", Pending, "result aggregation"),
        node("Q", "Task Q", Pending, "hyperparameter search"),
        node("R", "Task R", Pending, "A/B testing"),
        node("S", "Task S", Pending, "rollback plan"),
        node("T", "Task T", Pending, "release review"),
        node("U", "Task U", Pending, "alerting & monitoring"),
    ];
    let edges = vec![
        Edge::conditional("A", "K", "if sample"),
        Edge::new("A", "B"),
        Edge::new("A", "C"),
        Edge::new("B", "D"),
        Edge::new("B", "E"),
        Edge::new("C", "F"),
        Edge::new("C", "G"),
        Edge::conditional("K", "D", "small set"),
        Edge::conditional("L", "G", "rule add"),
        Edge::new("D", "H"),
        Edge::new("E", "H"),
        Edge::new("F", "I"),
        Edge::new("G", "I"),
        Edge::new("H", "J"),
        Edge::new("I", "J"),
        Edge::conditional("H", "M", "report"),
        Edge::conditional("I", "N", "deploy"),
        Edge::conditional("A", "L", "if rules"),
        Edge::conditional("B", "O", "dq check"),
        Edge::new("O", "D"),
        Edge::conditional("C", "P", "feature select"),
        Edge::new("P", "G"),
        Edge::conditional("P", "F", "drop noisy"),
        Edge::new("J", "Q"),
        Edge::new("Q", "R"),
        Edge::new("Q", "S"),
        Edge::new("R", "T"),
        Edge::new("S", "T"),
        Edge::new("T", "U"),
        Edge::conditional("N", "T", "pre-prod"),
    ];
    WorkflowGraph::new(nodes, edges)
}

/// `wf-2`: the quality-check diamond.
pub fn quality_check() -> WorkflowGraph {
    use NodeStatus::{Pending, Running, Success};

    let nodes = vec![
        node("A", "Fetch batch", Success, "pull batch for validation"),
        node("B", "Schema check", Running, "fields and types"),
        node("C", "Uniqueness check", Pending, "duplicate keys"),
        node("D", "Null check", Pending, "required fields"),
        node("E", "Quality score", Pending, "composite score"),
        node("F", "Build report", Pending, "render output"),
    ];
    let edges = vec![
        Edge::new("A", "B"),
        Edge::new("A", "C"),
        Edge::new("A", "D"),
        Edge::new("B", "E"),
        Edge::new("C", "E"),
        Edge::new("D", "E"),
        Edge::new("E", "F"),
    ];
    WorkflowGraph::new(nodes, edges)
}

/// `wf-3`: feature extraction, linear with one fork.
pub fn feature_extraction() -> WorkflowGraph {
    use NodeStatus::{Pending, Running, Success};

    let nodes = vec![
        node("A", "Load raw data", Success, "ODS"),
        node("B", "Cleanse", Success, "missing values, outliers"),
        node("C", "Feature extraction", Running, "stats and frequencies"),
        node("D", "Feature filter", Pending, "filter methods"),
        node("E", "Dimensionality reduction", Pending, "PCA"),
        node("F", "Export features", Pending, "persist to feature store"),
    ];
    let edges = vec![
        Edge::new("A", "B"),
        Edge::new("B", "C"),
        Edge::new("C", "D"),
        Edge::new("C", "E"),
        Edge::new("D", "F"),
        Edge::new("E", "F"),
    ];
    WorkflowGraph::new(nodes, edges)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn curated_graphs_have_a_single_source() {
        for graph in [training_pipeline(), quality_check(), feature_extraction()] {
            assert_eq!(graph.source_count(), 1);
        }
    }

    #[test]
    fn training_pipeline_shape() {
        let graph = training_pipeline();
        assert_eq!(graph.nodes.len(), 21);
        assert_eq!(graph.edges.len(), 30);
    }
}

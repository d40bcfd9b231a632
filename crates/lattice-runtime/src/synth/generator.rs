//! Layered random DAG generation.

use std::collections::HashMap;

use super::{SeededRng, seed_for_id};
use crate::definition::{Edge, Node, NodeStatus, WorkflowGraph};

/// Statuses drawn for generated nodes, in draw order.
const STATUSES: [NodeStatus; 4] = [
    NodeStatus::Pending,
    NodeStatus::Running,
    NodeStatus::Success,
    NodeStatus::Failed,
];

/// Labels drawn for generated conditional edges, in draw order.
const CONDITION_LABELS: [&str; 4] = ["if ok", "rule", "split", "merge"];

/// Synthesizes a layered DAG from an identifier.
///
/// The graph is a pure function of `id`: node and layer counts, layer
/// membership, statuses and edges are all drawn from a [`SeededRng`] seeded
/// with [`seed_for_id`]. Construction only ever links a node to a strictly
/// later layer, so the output is acyclic, and two repair passes cap the
/// number of zero-in-degree nodes at two.
pub fn synthesize(id: &str) -> WorkflowGraph {
    let mut rng = SeededRng::from_seed(seed_for_id(id));

    let node_count = 5 + rng.next_index(26);
    // Clamped so the forced first/last layers can always be populated.
    let layer_count = (3 + rng.next_index(4)).min(node_count);
    let last = layer_count - 1;

    // Random layer partition; every node belongs to exactly one layer.
    let mut layer_of: Vec<usize> = (0..node_count)
        .map(|_| rng.next_index(layer_count))
        .collect();
    let mut layers: Vec<Vec<usize>> = vec![Vec::new(); layer_count];
    for (node, &layer) in layer_of.iter().enumerate() {
        layers[layer].push(node);
    }

    // The first and last layers must not be empty: entry points live in the
    // first, and the sink-reachability repair draws from the second-to-last.
    if layers[0].is_empty() {
        relocate(&mut layers, &mut layer_of, 0, 0);
    }
    if layers[last].is_empty() {
        let preferred = node_count - 1;
        let donor = if layer_of[preferred] == 0 && layers[0].len() == 1 {
            // Taking the sole first-layer node would re-break that layer.
            (0..node_count)
                .rev()
                .find(|&node| layer_of[node] != 0)
                .unwrap_or(preferred)
        } else {
            preferred
        };
        relocate(&mut layers, &mut layer_of, donor, last);
    }

    // Source-count repair, pre-edge: spill surplus first-layer nodes into
    // randomly chosen later layers.
    if layers[0].len() > 2 {
        let overflow = layers[0].split_off(2);
        for node in overflow {
            let target = 1 + rng.next_index(layer_count - 1);
            layers[target].push(node);
            layer_of[node] = target;
        }
    }

    let mut nodes: Vec<Node> = (0..node_count)
        .map(|index| {
            let status = STATUSES[rng.next_index(STATUSES.len())];
            Node::new(format!("N{}", index + 1), format!("Stage {:02}", index + 1))
                .with_status(status)
                .with_description("auto-generated")
        })
        .collect();

    // One entry point always reads as finished; a second, if present and
    // untouched, reads as running to signal parallel entry.
    if let Some(&first) = layers[0].first() {
        nodes[first].status = NodeStatus::Success;
        if let Some(&second) = layers[0].get(1)
            && nodes[second].status == NodeStatus::Pending
        {
            nodes[second].status = NodeStatus::Running;
        }
    }

    // Edges only connect adjacent layers, which keeps the graph acyclic.
    let mut edges: Vec<Edge> = Vec::new();
    for layer in 0..last {
        let to_layer = &layers[layer + 1];
        if layers[layer].is_empty() || to_layer.is_empty() {
            continue;
        }
        for &from in &layers[layer] {
            let out_degree = 1 + rng.next_index(3);
            let mut used = vec![false; to_layer.len()];
            for _ in 0..out_degree {
                let pick = rng.next_index(to_layer.len());
                if used[pick] {
                    continue;
                }
                used[pick] = true;
                let to = to_layer[pick];
                let edge = if rng.next_index(4) == 0 {
                    Edge::conditional(
                        nodes[from].id.clone(),
                        nodes[to].id.clone(),
                        CONDITION_LABELS[rng.next_index(CONDITION_LABELS.len())],
                    )
                } else {
                    Edge::new(nodes[from].id.clone(), nodes[to].id.clone())
                };
                edges.push(edge);
            }
        }
    }

    // Sink-reachability repair: every last-layer node gets at least one
    // incoming edge from the layer before it.
    let sinks: Vec<usize> = layers[last].clone();
    for sink in sinks {
        let has_incoming = edges.iter().any(|edge| edge.to == nodes[sink].id);
        if !has_incoming && !layers[last - 1].is_empty() {
            let donors = &layers[last - 1];
            let from = donors[rng.next_index(donors.len())];
            edges.push(Edge::new(nodes[from].id.clone(), nodes[sink].id.clone()));
        }
    }

    // Source-count repair, post-edge: recompute in-degrees over the final
    // edge set and cap visible entry points at two. The two orphans in the
    // lowest layers stay legitimate sources; every other orphan receives an
    // edge from the nearest populated earlier layer (layer 0 is never
    // empty, so a donor always exists).
    let index_of: HashMap<&str, usize> = nodes
        .iter()
        .enumerate()
        .map(|(index, node)| (node.id.as_str(), index))
        .collect();
    let mut in_degree = vec![0usize; node_count];
    for edge in &edges {
        in_degree[index_of[edge.to.as_str()]] += 1;
    }

    let mut orphans: Vec<(usize, usize)> = (0..node_count)
        .filter(|&node| in_degree[node] == 0)
        .map(|node| (layer_of[node], node))
        .collect();
    if orphans.len() > 2 {
        orphans.sort_by_key(|&(layer, _)| layer);
        for &(layer, node) in &orphans[2..] {
            if layer == 0 {
                continue;
            }
            let Some(donor_layer) = layers[..layer].iter().rposition(|l| !l.is_empty()) else {
                continue;
            };
            let donors = &layers[donor_layer];
            let from = donors[rng.next_index(donors.len())];
            edges.push(Edge::new(nodes[from].id.clone(), nodes[node].id.clone()));
        }
    }

    WorkflowGraph::new(nodes, edges)
}

/// Moves a node into `target`, keeping layer membership a partition.
fn relocate(layers: &mut [Vec<usize>], layer_of: &mut [usize], node: usize, target: usize) {
    let current = layer_of[node];
    if current == target {
        return;
    }
    layers[current].retain(|&n| n != node);
    layers[target].push(node);
    layer_of[node] = target;
}

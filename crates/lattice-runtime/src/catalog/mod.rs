//! Identifier resolution for the read-only side of the collection.
//!
//! Resolution never consults the mutable store and never fails: a small
//! fixed set of ids maps to [curated graphs](curated), the template ids
//! expand through the catalog, and everything else falls through to the
//! synthesizer. Generated and templated graphs are pure functions of their
//! id and are recomputed on every read.

mod curated;

use crate::definition::{NodeStatus, WorkflowGraph, WorkflowSummary};
use crate::{synth, template};

/// Display statuses cycled across template summaries in the fixed listing.
const TEMPLATE_STATUSES: [NodeStatus; 3] = [
    NodeStatus::Pending,
    NodeStatus::Running,
    NodeStatus::Success,
];

/// Resolves any workflow id to a graph.
pub fn resolve(id: &str) -> WorkflowGraph {
    match id {
        "wf-1" => curated::training_pipeline(),
        "wf-2" => curated::quality_check(),
        "wf-3" => curated::feature_extraction(),
        other => match template::find(other) {
            Some(found) => template::expand(found),
            None => synth::synthesize(other),
        },
    }
}

/// Returns the fixed catalog summaries: the three curated examples followed
/// by one entry per template.
pub fn summaries() -> Vec<WorkflowSummary> {
    let mut list = vec![
        WorkflowSummary {
            id: "wf-1".to_owned(),
            name: "Model Training Pipeline".to_owned(),
            status: NodeStatus::Running,
            description: "daily training job".to_owned(),
        },
        WorkflowSummary {
            id: "wf-2".to_owned(),
            name: "Data Quality Check".to_owned(),
            status: NodeStatus::Success,
            description: "ingest validation".to_owned(),
        },
        WorkflowSummary {
            id: "wf-3".to_owned(),
            name: "Feature Extraction & Selection".to_owned(),
            status: NodeStatus::Pending,
            description: "offline batch".to_owned(),
        },
    ];

    for (index, found) in template::catalog().iter().enumerate() {
        let status = TEMPLATE_STATUSES[((index + 4) * 7) % TEMPLATE_STATUSES.len()];
        list.push(WorkflowSummary {
            id: found.id.to_owned(),
            name: found.name.to_owned(),
            status,
            description: found.description.to_owned(),
        });
    }

    list
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolution_is_deterministic() {
        for id in ["wf-1", "wf-4", "wf-23", "anything-else"] {
            assert_eq!(resolve(id), resolve(id), "{id}");
        }
    }

    #[test]
    fn template_ids_resolve_through_the_catalog() {
        let expected = template::expand(template::find("wf-7").unwrap());
        assert_eq!(resolve("wf-7"), expected);
    }

    #[test]
    fn unknown_ids_fall_through_to_synthesis() {
        assert_eq!(resolve("nightly-etl"), synth::synthesize("nightly-etl"));
    }

    #[test]
    fn summaries_cover_curated_and_templated_entries() {
        let list = summaries();
        assert_eq!(list.len(), 3 + template::catalog().len());
        assert_eq!(list[0].id, "wf-1");
        assert_eq!(list[1].id, "wf-2");
        assert_eq!(list[2].id, "wf-3");
        assert_eq!(list[3].id, "wf-4");
        assert_eq!(list.last().unwrap().id, "wf-23");
    }

    #[test]
    fn template_summary_statuses_follow_the_cycle() {
        let list = summaries();
        // ((0 + 4) * 7) % 3 == 1, then the cycle advances by one per entry.
        assert_eq!(list[3].status, NodeStatus::Running);
        assert_eq!(list[4].status, NodeStatus::Success);
        assert_eq!(list[5].status, NodeStatus::Pending);
    }
}

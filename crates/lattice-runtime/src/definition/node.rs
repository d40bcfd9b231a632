//! Node definition types.

use serde::{Deserialize, Serialize};

use super::Position;

/// Display status of a workflow node.
///
/// Statuses are presentation state only: nodes are never actually executed,
/// so a status never transitions on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[derive(Serialize, Deserialize, strum::Display, strum::EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum NodeStatus {
    /// Not started yet.
    #[default]
    Pending,
    /// Currently in flight.
    Running,
    /// Finished successfully.
    Success,
    /// Finished with an error.
    Failed,
}

impl NodeStatus {
    /// Deserializes a status, treating an empty string like an absent field.
    ///
    /// Submitted workflows may carry `"status": ""` for untouched nodes;
    /// those default to [`NodeStatus::Pending`] instead of being rejected.
    pub(crate) fn deserialize_lenient<'de, D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        if raw.is_empty() {
            return Ok(Self::default());
        }
        raw.parse().map_err(|_| {
            serde::de::Error::unknown_variant(&raw, &["pending", "running", "success", "failed"])
        })
    }
}

/// A single stage in a workflow graph.
///
/// Identity is the `id`; uniqueness within one graph is enforced on ingest
/// and preserved by every generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Unique identifier within the owning graph.
    pub id: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Editor coordinates, if the client placed the node.
    #[serde(flatten)]
    pub position: Option<Position>,
    /// Display status.
    #[serde(default, deserialize_with = "NodeStatus::deserialize_lenient")]
    pub status: NodeStatus,
    /// Human-readable description.
    #[serde(default, rename = "desc")]
    pub description: String,
}

impl Node {
    /// Creates a new pending node.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            position: None,
            status: NodeStatus::default(),
            description: String::new(),
        }
    }

    /// Sets the display status.
    pub fn with_status(mut self, status: NodeStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

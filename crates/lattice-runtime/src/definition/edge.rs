//! Edge definition types.

use serde::{Deserialize, Serialize};

/// Kind of dependency an edge expresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[derive(Serialize, Deserialize, strum::Display, strum::EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum EdgeKind {
    /// Unconditional dependency.
    #[default]
    Plain,
    /// Dependency taken only when the labelled condition holds.
    Conditional,
}

impl EdgeKind {
    /// Returns whether this is a plain edge.
    ///
    /// Plain edges omit the `type` field on the wire.
    #[must_use]
    pub const fn is_plain(&self) -> bool {
        matches!(self, Self::Plain)
    }
}

/// A dependency between two nodes of the same graph.
///
/// Both endpoints must reference existing node ids; edges that do not are
/// silently dropped on ingest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    /// Source node id.
    pub from: String,
    /// Target node id.
    pub to: String,
    /// Edge kind; plain edges leave `type` off the wire.
    #[serde(default, rename = "type", skip_serializing_if = "EdgeKind::is_plain")]
    pub kind: EdgeKind,
    /// Condition label for conditional edges.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl Edge {
    /// Creates a plain edge.
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            kind: EdgeKind::Plain,
            label: None,
        }
    }

    /// Creates a conditional edge with the given label.
    pub fn conditional(
        from: impl Into<String>,
        to: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            kind: EdgeKind::Conditional,
            label: Some(label.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_edge_omits_type_on_the_wire() {
        let json = serde_json::to_value(Edge::new("A", "B")).unwrap();
        assert!(json.get("type").is_none());
        assert!(json.get("label").is_none());
    }

    #[test]
    fn conditional_edge_round_trip() {
        let edge = Edge::conditional("QC", "ERR", "fail");
        let json = serde_json::to_string(&edge).unwrap();
        let back: Edge = serde_json::from_str(&json).unwrap();
        assert_eq!(edge, back);
        assert!(json.contains("\"type\":\"conditional\""));
    }

    #[test]
    fn missing_type_deserializes_as_plain() {
        let edge: Edge = serde_json::from_str(r#"{"from": "A", "to": "B"}"#).unwrap();
        assert_eq!(edge.kind, EdgeKind::Plain);
    }
}

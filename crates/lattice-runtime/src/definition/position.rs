//! Position type for visual editor node placement.

use serde::{Deserialize, Serialize};

/// Position of a node in the visual editor.
///
/// Coordinates are display metadata only; they never influence the structure
/// of a graph.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
}

impl Position {
    /// Creates a new position.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

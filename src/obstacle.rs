//! Border segments and the edge-blocking rules they induce.
//!
//! A horizontal segment at (row, col) lies on the border between
//! Cell(row-1, col) and Cell(row, col); a vertical segment at (row, col)
//! lies between Cell(row, col-1) and Cell(row, col). A segment in the
//! obstacle set makes its edge impassable in both directions.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::grid::Cell;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// One border line between two adjacent cells (or along the grid rim).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BorderSegment {
    pub orientation: Orientation,
    pub row: i64,
    pub col: i64,
}

impl BorderSegment {
    pub fn horizontal(row: i64, col: i64) -> Self {
        Self {
            orientation: Orientation::Horizontal,
            row,
            col,
        }
    }

    pub fn vertical(row: i64, col: i64) -> Self {
        Self {
            orientation: Orientation::Vertical,
            row,
            col,
        }
    }
}

pub type ObstacleSet = HashSet<BorderSegment>;

/// Whether the step from `from` to its adjacent cell `to` crosses an
/// obstructed border. Symmetric: both crossings of a segment hit the
/// same set entry.
pub fn is_blocked(from: Cell, to: Cell, obstacles: &ObstacleSet) -> bool {
    debug_assert!(
        from.manhattan(to) == 1,
        "is_blocked() called with non-adjacent cells {from:?} -> {to:?}"
    );
    let segment = if to.row == from.row - 1 {
        BorderSegment::horizontal(from.row, from.col)
    } else if to.row == from.row + 1 {
        BorderSegment::horizontal(from.row + 1, from.col)
    } else if to.col == from.col - 1 {
        BorderSegment::vertical(from.row, from.col)
    } else {
        BorderSegment::vertical(from.row, from.col + 1)
    };
    obstacles.contains(&segment)
}

#[cfg(test)]
#[path = "../tests/rust/test_obstacle.rs"]
mod tests;

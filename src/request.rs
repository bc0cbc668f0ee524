//! Typed request/response contract between the planner and its caller.

use serde::{Deserialize, Serialize};

use crate::config::PlanConfig;
use crate::error::PlanError;
use crate::grid::{Cell, GridSpec};
use crate::obstacle::{BorderSegment, Orientation};
use crate::route::annotate::AnnotatedStep;

// ─── StartBorder ─────────────────────────────────────────────────────────────

/// The border the runner enters the grid from. Routing uses only its
/// (row, col) as the entry cell; the orientation is carried through for
/// the caller's UI contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartBorder {
    pub orientation: Orientation,
    pub row: i64,
    pub col: i64,
}

impl StartBorder {
    /// The cell this border resolves to.
    pub fn cell(&self) -> Cell {
        Cell::new(self.row, self.col)
    }
}

// ─── RouteRequest ────────────────────────────────────────────────────────────

/// One full routing problem: an immutable snapshot of the caller's
/// selections. The planner reads nothing else.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteRequest {
    pub grid: GridSpec,
    pub start: StartBorder,
    pub end: Cell,
    /// Mandatory intermediate cells, unordered; the optimizer picks the
    /// visit order. Duplicates are ignored.
    pub gates: Vec<Cell>,
    /// Visited after every gate and before the end cell.
    pub last_gate: Cell,
    #[serde(default)]
    pub obstacles: Vec<BorderSegment>,
}

impl RouteRequest {
    /// Fail fast on malformed input before any search runs.
    pub fn validate(&self, config: &PlanConfig) -> Result<(), PlanError> {
        let GridSpec { rows, cols } = self.grid;
        if rows <= 0 || cols <= 0 {
            return Err(PlanError::EmptyGrid { rows, cols });
        }

        let mut waypoints = vec![("start", self.start.cell()), ("end", self.end)];
        waypoints.extend(self.gates.iter().map(|&g| ("gate zone", g)));
        waypoints.push(("last gate zone", self.last_gate));
        for (what, cell) in waypoints {
            if !self.grid.contains(cell) {
                return Err(PlanError::OutOfBounds {
                    what,
                    row: cell.row,
                    col: cell.col,
                    rows,
                    cols,
                });
            }
        }

        // Border index space: horizontal segments run row 0..=rows,
        // vertical segments run col 0..=cols.
        for obstacle in &self.obstacles {
            let in_range = match obstacle.orientation {
                Orientation::Horizontal => {
                    (0..=rows).contains(&obstacle.row) && (0..cols).contains(&obstacle.col)
                }
                Orientation::Vertical => {
                    (0..rows).contains(&obstacle.row) && (0..=cols).contains(&obstacle.col)
                }
            };
            if !in_range {
                return Err(PlanError::OutOfBounds {
                    what: "obstacle",
                    row: obstacle.row,
                    col: obstacle.col,
                    rows,
                    cols,
                });
            }
        }

        if self.gates.is_empty() {
            return Err(PlanError::NoGates);
        }
        if self.gates.len() > config.gate_limit {
            return Err(PlanError::TooManyGates {
                count: self.gates.len(),
                limit: config.gate_limit,
            });
        }

        Ok(())
    }
}

// ─── RoutePlan ───────────────────────────────────────────────────────────────

/// A computed route: annotated steps plus summary metrics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutePlan {
    pub steps: Vec<AnnotatedStep>,
    /// Number of cells on the route.
    pub distance: usize,
    /// Direction changes along the route.
    pub turns: usize,
}

#[cfg(test)]
#[path = "../tests/rust/test_request.rs"]
mod tests;

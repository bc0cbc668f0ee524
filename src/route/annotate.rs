//! Converts a raw cell sequence into labeled steps for display.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::grid::{Cell, Direction, direction_of};

/// Display label for one route step.
///
/// The last-gate check takes precedence over the gate check when both
/// coincide on the same cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepLabel {
    Start,
    GateZone,
    LastGateZone,
    Move(Direction),
}

impl fmt::Display for StepLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StepLabel::Start => f.write_str("Enter Contest Zone"),
            StepLabel::GateZone => f.write_str("Enter Gate Zone"),
            StepLabel::LastGateZone => f.write_str("Enter Last Gate Zone"),
            StepLabel::Move(dir) => fmt::Display::fmt(dir, f),
        }
    }
}

/// One labeled cell of the final route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotatedStep {
    pub cell: Cell,
    pub label: StepLabel,
}

/// Label each cell of `path`: the first cell is the start, gate and
/// last-gate cells get their zone labels, and every other cell is
/// labeled with the movement direction from its predecessor.
pub fn annotate(path: &[Cell], gates: &[Cell], last_gate: Cell) -> Vec<AnnotatedStep> {
    path.iter()
        .enumerate()
        .map(|(i, &cell)| {
            let label = if i == 0 {
                StepLabel::Start
            } else if cell == last_gate {
                StepLabel::LastGateZone
            } else if gates.contains(&cell) {
                StepLabel::GateZone
            } else {
                StepLabel::Move(direction_of(path[i - 1], cell))
            };
            AnnotatedStep { cell, label }
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/rust/test_annotate.rs"]
mod tests;

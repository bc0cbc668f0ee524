//! Brute-force search over gate visit orderings.
//!
//! Every permutation of the gate set is scored by chaining segment
//! searches through the gates, then the last gate, then the end. The
//! gate count is capped upstream (see `PlanConfig::gate_limit`) because
//! the enumeration is factorial.

use tracing::debug;

use crate::grid::{Cell, GridSpec, count_turns};
use crate::obstacle::ObstacleSet;
use crate::route::pathfinder::find_path;

// ─── GateOrderings ───────────────────────────────────────────────────────────

/// Lazily yields every permutation of the gate list, in lexicographic
/// order over the original list positions. No recursion, no up-front
/// materialization.
pub struct GateOrderings {
    gates: Vec<Cell>,
    indices: Vec<usize>,
    started: bool,
    exhausted: bool,
}

impl GateOrderings {
    pub fn new(gates: &[Cell]) -> Self {
        Self {
            gates: gates.to_vec(),
            indices: (0..gates.len()).collect(),
            started: false,
            exhausted: false,
        }
    }

    /// Advance `indices` to the next lexicographic permutation. Returns
    /// false once the last permutation has been emitted.
    fn advance(&mut self) -> bool {
        let n = self.indices.len();
        if n < 2 {
            return false;
        }
        let Some(i) = (0..n - 1).rev().find(|&i| self.indices[i] < self.indices[i + 1]) else {
            return false;
        };
        // Always found: indices[i + 1] qualifies.
        let j = (i + 1..n)
            .rev()
            .find(|&j| self.indices[j] > self.indices[i])
            .unwrap_or(i + 1);
        self.indices.swap(i, j);
        self.indices[i + 1..].reverse();
        true
    }
}

impl Iterator for GateOrderings {
    type Item = Vec<Cell>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        if self.started {
            if !self.advance() {
                self.exhausted = true;
                return None;
            }
        } else {
            self.started = true;
        }
        Some(self.indices.iter().map(|&i| self.gates[i]).collect())
    }
}

// ─── Route chaining ──────────────────────────────────────────────────────────

/// Chain segment searches start -> gates (in `order`) -> last gate -> end.
/// Adjacent segments share their joint cell exactly once. `None` when any
/// segment is cut off.
fn chain_route(
    grid: &GridSpec,
    start: Cell,
    end: Cell,
    order: &[Cell],
    last_gate: Cell,
    obstacles: &ObstacleSet,
) -> Option<Vec<Cell>> {
    let mut route: Vec<Cell> = Vec::new();
    let mut cursor = start;

    for &gate in order {
        let segment = find_path(grid, cursor, gate, obstacles)?;
        extend_route(&mut route, &segment);
        cursor = gate;
    }

    let to_last_gate = find_path(grid, cursor, last_gate, obstacles)?;
    extend_route(&mut route, &to_last_gate);

    let to_end = find_path(grid, last_gate, end, obstacles)?;
    extend_route(&mut route, &to_end);

    Some(route)
}

fn extend_route(route: &mut Vec<Cell>, segment: &[Cell]) {
    if route.is_empty() {
        route.extend_from_slice(segment);
    } else {
        route.extend_from_slice(&segment[1..]);
    }
}

// ─── Best-route search ───────────────────────────────────────────────────────

/// Evaluate every gate ordering and keep the route with the smallest
/// (length, turns) score. Ties go to the earliest ordering, so the result
/// is deterministic for a given gate list.
pub fn find_best_route(
    grid: &GridSpec,
    start: Cell,
    end: Cell,
    gates: &[Cell],
    last_gate: Cell,
    obstacles: &ObstacleSet,
) -> Option<Vec<Cell>> {
    let mut best: Option<(usize, usize, Vec<Cell>)> = None;

    for order in GateOrderings::new(gates) {
        let Some(route) = chain_route(grid, start, end, &order, last_gate, obstacles) else {
            continue;
        };
        let length = route.len();
        let turns = count_turns(&route);
        let better = match &best {
            Some((best_len, best_turns, _)) => (length, turns) < (*best_len, *best_turns),
            None => true,
        };
        if better {
            debug!(length, turns, ?order, "new best gate ordering");
            best = Some((length, turns, route));
        }
    }

    best.map(|(_, _, route)| route)
}

#[cfg(test)]
#[path = "../../tests/rust/test_optimizer.rs"]
mod tests;

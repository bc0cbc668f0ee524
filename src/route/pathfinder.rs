//! Turn-penalized A* search between two cells on the obstacle grid.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, HashSet};

use tracing::trace;

use crate::grid::{Cell, Direction, GridSpec, direction_of};
use crate::obstacle::{ObstacleSet, is_blocked};

/// Extra cost charged when consecutive edges change direction. The first
/// edge out of the start never pays it.
pub const TURN_PENALTY: i64 = 10;

/// Cheapest path from `start` to `goal`, where every edge costs 1 plus
/// [`TURN_PENALTY`] on a direction change.
///
/// The heuristic is plain Manhattan distance, which underestimates the
/// penalized cost; the result is a practical best-effort rather than a
/// guaranteed global optimum. Open-set ties break on fewer accumulated
/// turns, then insertion order, so expansion is fully deterministic.
///
/// Returns the cells from `start` to `goal` inclusive, or `None` when the
/// goal is unreachable.
pub fn find_path(
    grid: &GridSpec,
    start: Cell,
    goal: Cell,
    obstacles: &ObstacleSet,
) -> Option<Vec<Cell>> {
    trace!(?start, ?goal, "segment search");

    // Min-heap entries: (f-score, turns so far, insertion counter, cell).
    let mut counter: u64 = 0;
    let mut open: BinaryHeap<(Reverse<i64>, Reverse<u64>, Reverse<u64>, Cell)> = BinaryHeap::new();

    let mut g_score: HashMap<Cell, i64> = HashMap::new();
    let mut turn_count: HashMap<Cell, u64> = HashMap::new();
    let mut came_from: HashMap<Cell, Cell> = HashMap::new();
    let mut entry_dir: HashMap<Cell, Direction> = HashMap::new();
    let mut closed: HashSet<Cell> = HashSet::new();

    g_score.insert(start, 0);
    turn_count.insert(start, 0);
    open.push((Reverse(start.manhattan(goal)), Reverse(0), Reverse(counter), start));

    while let Some((_, _, _, current)) = open.pop() {
        if current == goal {
            return Some(reconstruct(&came_from, current));
        }
        if !closed.insert(current) {
            continue; // stale duplicate
        }

        let g = g_score[&current];
        let turns = turn_count[&current];
        let prev_dir = entry_dir.get(&current).copied();

        for neighbor in grid.neighbors(current) {
            if closed.contains(&neighbor) || is_blocked(current, neighbor, obstacles) {
                continue;
            }
            let dir = direction_of(current, neighbor);
            let turned = prev_dir.is_some_and(|d| d != dir);
            let tentative = g + 1 + if turned { TURN_PENALTY } else { 0 };
            if g_score.get(&neighbor).is_some_and(|&best| tentative >= best) {
                continue;
            }

            let new_turns = turns + u64::from(turned);
            g_score.insert(neighbor, tentative);
            turn_count.insert(neighbor, new_turns);
            came_from.insert(neighbor, current);
            entry_dir.insert(neighbor, dir);
            counter += 1;
            open.push((
                Reverse(tentative + neighbor.manhattan(goal)),
                Reverse(new_turns),
                Reverse(counter),
                neighbor,
            ));
        }
    }

    None
}

/// Walk back-pointers from `current` to the start, then reverse.
fn reconstruct(came_from: &HashMap<Cell, Cell>, mut current: Cell) -> Vec<Cell> {
    let mut path = vec![current];
    while let Some(&prev) = came_from.get(&current) {
        current = prev;
        path.push(current);
    }
    path.reverse();
    path
}

#[cfg(test)]
#[path = "../../tests/rust/test_pathfinder.rs"]
mod tests;

//! Grid geometry: cells, bounds, and movement directions.

use std::fmt;

use serde::{Deserialize, Serialize};

// ─── Cell ────────────────────────────────────────────────────────────────────

/// A grid cell addressed by (row, col), row 0 at the top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell {
    pub row: i64,
    pub col: i64,
}

impl Cell {
    pub fn new(row: i64, col: i64) -> Self {
        Self { row, col }
    }

    /// Manhattan distance to `other`.
    pub fn manhattan(self, other: Cell) -> i64 {
        (self.row - other.row).abs() + (self.col - other.col).abs()
    }
}

// ─── GridSpec ────────────────────────────────────────────────────────────────

/// Fixed dimensions of the routing grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSpec {
    pub rows: i64,
    pub cols: i64,
}

impl GridSpec {
    pub fn new(rows: i64, cols: i64) -> Self {
        Self { rows, cols }
    }

    pub fn contains(&self, cell: Cell) -> bool {
        (0..self.rows).contains(&cell.row) && (0..self.cols).contains(&cell.col)
    }

    /// In-bounds orthogonal neighbors of `cell`, in up/down/left/right order.
    ///
    /// Callers must pass an in-bounds cell.
    pub fn neighbors(&self, cell: Cell) -> Vec<Cell> {
        debug_assert!(
            self.contains(cell),
            "neighbors() called with out-of-bounds cell {cell:?}"
        );
        let mut out = Vec::with_capacity(4);
        if cell.row > 0 {
            out.push(Cell::new(cell.row - 1, cell.col));
        }
        if cell.row < self.rows - 1 {
            out.push(Cell::new(cell.row + 1, cell.col));
        }
        if cell.col > 0 {
            out.push(Cell::new(cell.row, cell.col - 1));
        }
        if cell.col < self.cols - 1 {
            out.push(Cell::new(cell.row, cell.col + 1));
        }
        out
    }
}

// ─── Direction ───────────────────────────────────────────────────────────────

/// Cardinal movement direction between two adjacent cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        })
    }
}

/// Direction of the step from `from` to `to`. Defined only for adjacent cells.
pub fn direction_of(from: Cell, to: Cell) -> Direction {
    debug_assert!(
        from.manhattan(to) == 1,
        "direction_of() called with non-adjacent cells {from:?} -> {to:?}"
    );
    if from.row == to.row {
        if to.col > from.col {
            Direction::Right
        } else {
            Direction::Left
        }
    } else if to.row > from.row {
        Direction::Down
    } else {
        Direction::Up
    }
}

/// Number of direction changes along `path`.
pub fn count_turns(path: &[Cell]) -> usize {
    if path.len() < 2 {
        return 0;
    }
    let mut turns = 0;
    let mut prev = direction_of(path[0], path[1]);
    for pair in path.windows(2).skip(1) {
        let dir = direction_of(pair[0], pair[1]);
        if dir != prev {
            turns += 1;
            prev = dir;
        }
    }
    turns
}

#[cfg(test)]
#[path = "../tests/rust/test_grid.rs"]
mod tests;

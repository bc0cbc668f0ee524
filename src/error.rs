//! Error taxonomy for route planning.
//!
//! Only invalid input is an error. An unreachable goal is a normal
//! outcome and is reported as an absent result, not through this type.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlanError {
    /// Grid dimensions must both be positive.
    #[error("grid dimensions must be positive, got {rows}x{cols}")]
    EmptyGrid { rows: i64, cols: i64 },

    /// A waypoint or obstacle lies outside the grid's index space.
    #[error("{what} at ({row}, {col}) is outside the {rows}x{cols} grid")]
    OutOfBounds {
        what: &'static str,
        row: i64,
        col: i64,
        rows: i64,
        cols: i64,
    },

    /// The gate set is empty.
    #[error("at least one gate zone is required")]
    NoGates,

    /// Gate-ordering enumeration is factorial; the request exceeds the
    /// configured ceiling.
    #[error("{count} gate zones exceed the limit of {limit}")]
    TooManyGates { count: usize, limit: usize },
}

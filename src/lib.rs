//! gateroute — turn-penalized route planner for gated grid courses.
//!
//! Public API: `plan_route()` / `plan_route_with_config()`.
//!
//! The planner takes one immutable [`RouteRequest`] snapshot (grid size,
//! start border, end cell, gate zones, last gate zone, obstacles) and
//! returns the best route it can find: every gate zone in the cheapest
//! visit order, then the last gate zone, then the end cell. Movement is
//! 4-directional over cell edges; each edge costs 1 and every direction
//! change costs an extra 10.

pub mod config;
pub mod error;
pub mod grid;
pub mod obstacle;
pub mod request;
pub mod route;

#[cfg(feature = "wasm")]
pub mod wasm;

use std::collections::HashSet;

use tracing::debug;

pub use config::PlanConfig;
pub use error::PlanError;
pub use grid::{Cell, Direction, GridSpec};
pub use obstacle::{BorderSegment, ObstacleSet, Orientation};
pub use request::{RoutePlan, RouteRequest, StartBorder};
pub use route::annotate::{AnnotatedStep, StepLabel};

/// Plan a route with default limits. See [`plan_route_with_config`].
pub fn plan_route(req: &RouteRequest) -> Result<Option<RoutePlan>, PlanError> {
    plan_route_with_config(req, &PlanConfig::default())
}

/// Plan the best route for `req`.
///
/// Returns `Ok(None)` when every gate ordering is cut off by obstacles;
/// `Err` only for invalid input.
pub fn plan_route_with_config(
    req: &RouteRequest,
    config: &PlanConfig,
) -> Result<Option<RoutePlan>, PlanError> {
    req.validate(config)?;

    // Dedupe gates keeping first-seen order; that order drives the
    // ordering enumeration and therefore tie resolution.
    let mut seen: HashSet<Cell> = HashSet::new();
    let gates: Vec<Cell> = req
        .gates
        .iter()
        .copied()
        .filter(|g| seen.insert(*g))
        .collect();
    let obstacles: ObstacleSet = req.obstacles.iter().copied().collect();

    let start = req.start.cell();
    let Some(cells) = route::optimizer::find_best_route(
        &req.grid,
        start,
        req.end,
        &gates,
        req.last_gate,
        &obstacles,
    ) else {
        debug!("no gate ordering produced a connected route");
        return Ok(None);
    };

    let distance = cells.len();
    let turns = grid::count_turns(&cells);
    debug!(distance, turns, "route planned");
    let steps = route::annotate::annotate(&cells, &gates, req.last_gate);
    Ok(Some(RoutePlan {
        steps,
        distance,
        turns,
    }))
}

#[cfg(test)]
#[path = "../tests/rust/test_plan.rs"]
mod tests;

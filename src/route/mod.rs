//! Route construction: segment search, gate-ordering optimization, and
//! step annotation.

pub mod annotate;
pub mod optimizer;
pub mod pathfinder;

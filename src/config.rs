/// Limits for the route planner.
#[derive(Debug, Clone)]
pub struct PlanConfig {
    /// Maximum number of gate zones accepted per request. Gate orderings
    /// grow factorially, so the planner rejects larger sets up front.
    pub gate_limit: usize,
}

impl Default for PlanConfig {
    fn default() -> Self {
        Self { gate_limit: 8 }
    }
}

impl PlanConfig {
    pub fn new() -> Self {
        Self::default()
    }
}

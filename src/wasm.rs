//! WASM bindings for gateroute.
//!
//! Exposes `planRoute` and `planRouteWithLimit` to JavaScript via
//! wasm-bindgen. Both take scenario JSON and return the plan as JSON
//! (`null` when no route exists).

use wasm_bindgen::prelude::*;

use crate::{PlanConfig, RouteRequest, plan_route_with_config};

fn plan_json(scenario: &str, config: &PlanConfig) -> Result<String, JsError> {
    let req: RouteRequest =
        serde_json::from_str(scenario).map_err(|e| JsError::new(&e.to_string()))?;
    let plan = plan_route_with_config(&req, config).map_err(|e| JsError::new(&e.to_string()))?;
    serde_json::to_string(&plan).map_err(|e| JsError::new(&e.to_string()))
}

/// Plan a route with default limits.
#[wasm_bindgen(js_name = "planRoute")]
pub fn plan_route(scenario: &str) -> Result<String, JsError> {
    plan_json(scenario, &PlanConfig::default())
}

/// Plan a route with a custom gate-count ceiling.
#[wasm_bindgen(js_name = "planRouteWithLimit")]
pub fn plan_route_with_limit(scenario: &str, gate_limit: usize) -> Result<String, JsError> {
    plan_json(scenario, &PlanConfig { gate_limit })
}

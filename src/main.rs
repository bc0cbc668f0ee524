//! gateroute CLI entry point.
//!
//! Reads a scenario as JSON (file argument or stdin), plans the route,
//! and prints the route list with a summary line, or the plan as JSON
//! with `--json`.

use std::fs;
use std::io::{self, Read, Write};
use std::process;

use clap::Parser;

use gateroute::{PlanConfig, PlanError, RoutePlan, RouteRequest, plan_route_with_config};

/// Turn-penalized route planner for gated grid courses.
#[derive(Parser, Debug)]
#[command(
    name = "gateroute",
    about = "Turn-penalized route planner for gated grid courses"
)]
struct Cli {
    /// Scenario JSON file (reads from stdin if not provided)
    input: Option<String>,

    /// Emit the plan as JSON instead of the route list
    #[arg(short = 'j', long = "json")]
    json: bool,

    /// Maximum number of gate zones to accept
    #[arg(long = "gate-limit", default_value = "8")]
    gate_limit: usize,

    /// Write output to this file instead of stdout
    #[arg(short = 'o', long = "output")]
    output: Option<String>,
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();
}

/// Route list in the shape the grid UI shows: a summary line, then one
/// line per step. The first step carries no "Move:" prefix.
fn render_report(plan: &RoutePlan) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Route found with distance {} and {} turns.\n",
        plan.distance, plan.turns
    ));
    for (i, step) in plan.steps.iter().enumerate() {
        let move_prefix = if i == 0 { "" } else { "Move: " };
        out.push_str(&format!(
            "Row: {}, Col: {}, {}{}\n",
            step.cell.row, step.cell.col, move_prefix, step.label
        ));
    }
    out
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    // Read the scenario from file or stdin
    let text = if let Some(ref path) = cli.input {
        match fs::read_to_string(path) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("error: cannot read '{}': {}", path, e);
                process::exit(1);
            }
        }
    } else {
        let mut buf = String::new();
        if let Err(e) = io::stdin().read_to_string(&mut buf) {
            eprintln!("error: cannot read stdin: {}", e);
            process::exit(1);
        }
        buf
    };

    let req: RouteRequest = match serde_json::from_str(&text) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("error: invalid scenario JSON: {}", e);
            process::exit(1);
        }
    };

    let config = PlanConfig {
        gate_limit: cli.gate_limit,
    };
    let plan = match plan_route_with_config(&req, &config) {
        Ok(plan) => plan,
        Err(PlanError::NoGates) => {
            eprintln!("Please select start, end, gate zones, and last gate zone.");
            process::exit(1);
        }
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(1);
        }
    };

    let rendered = if cli.json {
        // `None` serializes as JSON null
        match serde_json::to_string_pretty(&plan) {
            Ok(mut s) => {
                s.push('\n');
                s
            }
            Err(e) => {
                eprintln!("error: cannot encode plan: {}", e);
                process::exit(1);
            }
        }
    } else {
        match plan {
            Some(ref plan) => render_report(plan),
            None => "No path found.\n".to_string(),
        }
    };

    // Write output to file or stdout
    if let Some(ref path) = cli.output {
        if let Err(e) = fs::write(path, rendered) {
            eprintln!("error: cannot write '{}': {}", path, e);
            process::exit(1);
        }
    } else {
        print!("{}", rendered);
        if let Err(e) = io::stdout().flush() {
            eprintln!("error: cannot flush stdout: {}", e);
            process::exit(1);
        }
    }
}

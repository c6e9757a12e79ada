//! Simulation runner.
//!
//! Runs the seeded simulation harness with the configured seed and session
//! count, prints the report as JSON and exits non-zero if any session
//! completed before its gates cleared.

use std::process::ExitCode;

use interview_guardrails::config::AppConfig;
use interview_guardrails::domain::simulation::SimulationHarness;
use interview_guardrails::telemetry;

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;
    telemetry::init(&config.logging)?;

    tracing::info!(
        seed = config.simulation.seed,
        runs = config.simulation.runs,
        "Starting simulation"
    );

    let report = SimulationHarness::new(config.simulation.seed, config.simulation.runs)
        .with_max_field_attempts(config.guard.max_field_attempts)
        .run();

    println!("{}", serde_json::to_string_pretty(&report)?);

    if report.is_clean() {
        Ok(ExitCode::SUCCESS)
    } else {
        tracing::error!(
            premature = report.premature_completions_allowed,
            "Simulation recorded premature completions"
        );
        Ok(ExitCode::FAILURE)
    }
}

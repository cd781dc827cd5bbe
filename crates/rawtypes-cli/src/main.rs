//! `rawtypes`: run every built-in demonstration and report pass/fail
//!
//! Exit codes: 0 when every scenario reproduces its expected outcome, 1 when
//! any does not, 2 when the scenario table itself is broken.

use anyhow::Context;
use clap::Parser;
use rawtypes_core::{DemonstrationRunner, Report, RunnerConfig, Scenario, TracingSink};
use std::io::{self, Write};
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Exit code for a malformed scenario table or an internal error
const SETUP_FAILURE: u8 = 2;

#[derive(Parser, Debug)]
#[command(name = "rawtypes")]
#[command(version)]
#[command(about = "Demonstrate raw, parameterized and wildcard container types")]
struct Cli {}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rawtypes=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let _cli = Cli::parse();

    let code = run(rawtypes_catalog::builtin(), &mut io::stdout().lock());
    ExitCode::from(code)
}

/// Run `scenarios`, print the summary to `out` and pick the exit code
fn run(scenarios: &[Scenario], out: &mut dyn Write) -> u8 {
    match report(scenarios, out) {
        Ok(report) => report.exit_code(),
        Err(e) => {
            tracing::error!("{e:#}");
            SETUP_FAILURE
        }
    }
}

fn report(scenarios: &[Scenario], out: &mut dyn Write) -> anyhow::Result<Report> {
    tracing::info!(count = scenarios.len(), "running scenarios");

    let runner = DemonstrationRunner::new(RunnerConfig::default());
    let report = runner
        .run_all_traced(scenarios, &mut TracingSink)
        .context("scenario table is malformed")?;

    out.write_all(report.render_text().as_bytes())
        .context("failed to write the summary")?;
    Ok(report)
}

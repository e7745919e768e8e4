//! dashboard-cli: evaluate a fetched dashboard snapshot offline.
//!
//! Usage:
//!   cargo run -p dashboard-cli -- crates/dashboard-cli/data/sample_snapshot.json
//!   cargo run -p dashboard-cli -- snapshot.json --locale en --tiered
//!   cargo run -p dashboard-cli -- snapshot.json --json

mod config;
mod report;

use anyhow::{Context, Result};
use config::CliConfig;
use report::{DashboardReport, DashboardSnapshot};

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "dashboard_cli=info".into());
    let json_logging = std::env::var("RUST_LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);
    // Logs go to stderr so --json output stays clean
    if json_logging {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .init();
    }

    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = CliConfig::from_env_and_args(&args)?;
    tracing::info!(
        path = %config.snapshot_path.display(),
        evaluator = ?config.evaluator,
        locale = ?config.locale,
        "Loading dashboard snapshot"
    );

    let raw = std::fs::read_to_string(&config.snapshot_path)
        .with_context(|| format!("failed to read {}", config.snapshot_path.display()))?;
    let snapshot: DashboardSnapshot = serde_json::from_str(&raw)
        .with_context(|| format!("invalid snapshot JSON in {}", config.snapshot_path.display()))?;

    let report = DashboardReport::build(&snapshot, config.evaluator);
    if config.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", report.render(config.locale));
    }

    tracing::info!(symbol = %report.symbol, "Report complete");
    Ok(())
}

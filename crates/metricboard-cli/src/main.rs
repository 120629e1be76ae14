mod logging;
mod settings;
mod tui;

use std::path::PathBuf;
use std::time::Instant;

use clap::{Args, Parser, Subcommand};
use metricboard_report::{ReportError, load_dashboard, write_report};
use thiserror::Error;
use uuid::Uuid;

use settings::load_settings;

#[derive(Debug, Error)]
enum CliError {
    #[error("report error: {0}")]
    Report(#[from] ReportError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("logging error: {0}")]
    Logging(String),
}

#[derive(Parser, Debug)]
#[command(name = "metricboard", version, about = "Metricboard CLI")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Mount the interactive dashboard over a payload file.
    View(ViewArgs),
    /// Write report artifacts for a payload file.
    Report(ReportArgs),
}

#[derive(Args, Debug)]
struct ViewArgs {
    /// Path to a dashboard.json payload.
    #[arg(value_name = "DASHBOARD_JSON")]
    input: PathBuf,
}

#[derive(Args, Debug)]
struct ReportArgs {
    /// Path to a dashboard.json payload.
    #[arg(value_name = "DASHBOARD_JSON")]
    input: PathBuf,
    /// Output directory for reports.
    #[arg(long)]
    out_dir: Option<PathBuf>,
    /// Report id; a random id is generated when absent.
    #[arg(long)]
    id: Option<String>,
}

fn main() -> Result<(), CliError> {
    let cli = Cli::parse();

    match cli.command {
        Command::View(args) => run_view(args),
        Command::Report(args) => run_report(args),
    }
}

fn run_view(args: ViewArgs) -> Result<(), CliError> {
    let settings = load_settings()?;
    let info = load_dashboard(&args.input)?;
    tui::run(info, settings)
}

fn run_report(args: ReportArgs) -> Result<(), CliError> {
    let settings = load_settings()?;
    let info = load_dashboard(&args.input)?;

    let report_id = args.id.unwrap_or_else(|| Uuid::new_v4().to_string());
    if report_id.trim().is_empty() {
        return Err(CliError::InvalidConfig(
            "report id cannot be empty".to_string(),
        ));
    }

    let out_dir = args.out_dir.unwrap_or(settings.out_dir);
    let report_dir = out_dir.join(&report_id);
    std::fs::create_dir_all(&report_dir)?;
    logging::init_run_logging(&report_dir.join("report.log"))?;

    tracing::info!(event = "report_started", report_id = %report_id, dashboard = %info.name);

    let timer = Instant::now();
    let generated_at = chrono::Utc::now();
    let paths = write_report(&report_dir, &info, generated_at)?;

    tracing::info!(event = "artifacts_written", dashboard_path = %paths.dashboard_path.display(), report_path = %paths.report_path.display());

    println!("dashboard_path={}", paths.dashboard_path.display());
    println!("report_path={}", paths.report_path.display());

    let duration_ms = timer.elapsed().as_millis();
    tracing::info!(event = "report_finished", status = "success", duration_ms = duration_ms);

    Ok(())
}

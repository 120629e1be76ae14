use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use metricboard_core::DashboardInfo;
use thiserror::Error;

use crate::report::render_report;

/// Errors emitted while reading or writing report artifacts.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Locations of the artifacts written for one report.
#[derive(Debug, Clone)]
pub struct ReportPaths {
    pub report_dir: PathBuf,
    pub dashboard_path: PathBuf,
    pub report_path: PathBuf,
}

/// Read a dashboard payload from a JSON file.
pub fn load_dashboard(path: &Path) -> Result<DashboardInfo, ReportError> {
    let content = fs::read_to_string(path)?;
    let info = serde_json::from_str(&content)?;
    Ok(info)
}

/// Write `dashboard.json` and `report.md` under `report_dir`.
pub fn write_report(
    report_dir: &Path,
    info: &DashboardInfo,
    generated_at: DateTime<Utc>,
) -> Result<ReportPaths, ReportError> {
    fs::create_dir_all(report_dir)?;

    let dashboard_path = report_dir.join("dashboard.json");
    let encoded = serde_json::to_string_pretty(info)?;
    fs::write(&dashboard_path, encoded)?;

    let report_path = report_dir.join("report.md");
    fs::write(&report_path, render_report(info, generated_at))?;

    Ok(ReportPaths {
        report_dir: report_dir.to_path_buf(),
        dashboard_path,
        report_path,
    })
}

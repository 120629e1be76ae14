use chrono::{DateTime, SecondsFormat, Utc};
use metricboard_core::{DASHBOARD_VERSION, DashboardInfo};

use crate::scores::score_entries;
use crate::tables::{PREVIEW_HEADERS, metric_cells, preview_rows};

/// Report contract version for `report.md` artifacts.
pub const REPORT_VERSION: &str = "0.1";

/// Render a deterministic markdown report for one dashboard payload.
pub fn render_report(info: &DashboardInfo, generated_at: DateTime<Utc>) -> String {
    let mut lines = Vec::new();

    lines.push("# Metricboard Report".to_string());
    lines.push(String::new());
    lines.push("## Run summary".to_string());
    lines.push(format!("- dashboard: {}", info.name));
    lines.push(format!("- dashboard_version: {DASHBOARD_VERSION}"));
    lines.push(format!("- report_version: {REPORT_VERSION}"));
    lines.push(format!(
        "- generated_at: {}",
        generated_at.to_rfc3339_opts(SecondsFormat::Secs, true)
    ));
    lines.push(String::new());

    lines.push("## Overall scores".to_string());
    lines.push("| score | value |".to_string());
    lines.push("| --- | --- |".to_string());
    for entry in score_entries(&info.dashboard.overall) {
        lines.push(format!("| {} | {} |", entry.title, entry.value));
    }
    lines.push(String::new());

    lines.push("## Category summary".to_string());
    lines.push(format!("| {} |", PREVIEW_HEADERS.join(" | ")));
    lines.push(format!(
        "|{}",
        " --- |".repeat(PREVIEW_HEADERS.len())
    ));
    for row in preview_rows(&info.dashboard) {
        lines.push(format!("| {} |", row.cells().join(" | ")));
    }
    lines.push(String::new());

    lines.push("## Metrics".to_string());
    lines.push("| metric name | data source | metric type | metric value | valid | reason |".to_string());
    lines.push("| --- | --- | --- | --- | --- | --- |".to_string());
    for row in &info.metrics {
        lines.push(format!("| {} |", metric_cells(row).join(" | ")));
    }
    lines.push(String::new());

    lines.push("## Recommendations".to_string());
    lines.extend(recommendations(info));
    lines.join("\n")
}

fn recommendations(info: &DashboardInfo) -> Vec<String> {
    let overall = &info.dashboard.overall;
    let mut lines = Vec::new();
    if overall.metric_validation_failed > 0 {
        lines.push("- inspect failed metrics and their reasons in the full table.".to_string());
    }
    if overall.metric_validation_unchecked > 0 {
        lines.push("- add validation rules for unchecked metrics to raise coverage.".to_string());
    }
    for (category, status) in info.dashboard.categories() {
        if status.total_metrics > 0 && status.evaluated() == 0 {
            lines.push(format!(
                "- {} metrics are defined but none were evaluated yet.",
                category.label()
            ));
        }
    }
    if lines.is_empty() {
        lines.push("- no validation failures detected; compare reports across runs for drift.".to_string());
    }
    lines
}

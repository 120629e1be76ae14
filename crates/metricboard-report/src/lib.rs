//! Presentation adapters and report rendering for Metricboard.
//!
//! Everything here is a pure projection of the payload: score entries,
//! chart slices, table rows, plus the dashboard builder and the markdown
//! report writer.

pub mod artifact;
pub mod builder;
pub mod charts;
pub mod report;
pub mod scores;
pub mod tables;

pub use artifact::{ReportError, ReportPaths, load_dashboard, write_report};
pub use builder::{DashboardBuilder, EvaluatedMetric};
pub use charts::{ChartSlice, health_slices, validation_slices};
pub use report::{REPORT_VERSION, render_report};
pub use scores::{OVERALL_SCORES, ScoreDescriptor, ScoreEntry, ScoreField, ScoreTone, score_entries};
pub use tables::{
    FilterVariant, IS_VALID_OPTIONS, METRIC_COLUMNS, METRIC_TYPE_OPTIONS, MetricColumn,
    MetricField, PLACEHOLDER, PREVIEW_HEADERS, PreviewRow, metric_cells, preview_rows,
};

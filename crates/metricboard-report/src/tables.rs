use metricboard_core::{DashboardMetricOverview, MetricRow};

/// Convention for "not applicable / not yet meaningful" cells.
pub const PLACEHOLDER: &str = "-";

/// Header labels for the category preview table, in column order.
pub const PREVIEW_HEADERS: [&str; 6] = [
    "Metric Type",
    "Total Metrics",
    "Passed Metrics",
    "Failed Metrics",
    "Unchecked Metrics",
    "Health Score",
];

/// One preview-table row: a category and its displayable aggregates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewRow {
    pub metric_type: &'static str,
    pub total_metrics: String,
    pub passed: String,
    pub failed: String,
    pub unchecked: String,
    pub health_score: String,
}

impl PreviewRow {
    pub fn cells(&self) -> [&str; 6] {
        [
            self.metric_type,
            &self.total_metrics,
            &self.passed,
            &self.failed,
            &self.unchecked,
            &self.health_score,
        ]
    }
}

/// Project the five non-overall categories into preview rows.
///
/// When a category has nothing evaluated yet (`success + failed == 0`) the
/// passed, failed and health cells show the placeholder: a zero health
/// score would read as "completely unhealthy" rather than "not evaluated".
pub fn preview_rows(overview: &DashboardMetricOverview) -> Vec<PreviewRow> {
    overview
        .categories()
        .map(|(category, status)| {
            let evaluated = status.evaluated() > 0;
            let numeric_or_placeholder = |value: String| {
                if evaluated { value } else { PLACEHOLDER.to_string() }
            };
            PreviewRow {
                metric_type: category.label(),
                total_metrics: status.total_metrics.to_string(),
                passed: numeric_or_placeholder(status.metric_validation_success.to_string()),
                failed: numeric_or_placeholder(status.metric_validation_failed.to_string()),
                unchecked: status.metric_validation_unchecked.to_string(),
                health_score: numeric_or_placeholder(format!("{}%", status.health_score)),
            }
        })
        .collect()
}

/// Accessor key for one full-metric-table column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricField {
    MetricName,
    DataSource,
    MetricType,
    MetricValue,
    IsValid,
    Reason,
}

/// Filter behavior of a column, scoped to a build-time option list.
///
/// The option lists are fixed, not derived from the data: an option with
/// zero matching rows still appears selectable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterVariant {
    MultiSelect(&'static [&'static str]),
    Select(&'static [&'static str]),
}

/// Declarative column configuration for the full metric table.
#[derive(Debug, Clone, Copy)]
pub struct MetricColumn {
    pub field: MetricField,
    pub header: &'static str,
    pub filter: Option<FilterVariant>,
    pub sortable: bool,
}

/// Enumerated metric kinds offered by the type filter.
pub const METRIC_TYPE_OPTIONS: [&str; 11] = [
    "avg",
    "min",
    "max",
    "variance",
    "distinct_count",
    "duplicate_count",
    "null_count",
    "null_percentage",
    "empty_string_count",
    "document_count",
    "combined",
];

/// Options offered by the validity filter.
pub const IS_VALID_OPTIONS: [&str; 2] = ["True", "False"];

/// Column order and configuration for the full metric table.
pub const METRIC_COLUMNS: [MetricColumn; 6] = [
    MetricColumn {
        field: MetricField::MetricName,
        header: "Metric Name",
        filter: None,
        sortable: true,
    },
    MetricColumn {
        field: MetricField::DataSource,
        header: "Data Source",
        filter: None,
        sortable: true,
    },
    MetricColumn {
        field: MetricField::MetricType,
        header: "Metric Type",
        filter: Some(FilterVariant::MultiSelect(&METRIC_TYPE_OPTIONS)),
        sortable: true,
    },
    MetricColumn {
        field: MetricField::MetricValue,
        header: "Metric Value",
        filter: None,
        sortable: true,
    },
    MetricColumn {
        field: MetricField::IsValid,
        header: "Valid",
        filter: Some(FilterVariant::Select(&IS_VALID_OPTIONS)),
        sortable: true,
    },
    MetricColumn {
        field: MetricField::Reason,
        header: "Reason",
        filter: None,
        sortable: false,
    },
];

/// Render one metric row into display cells, in column order.
pub fn metric_cells(row: &MetricRow) -> [String; 6] {
    [
        row.metric_name.clone(),
        row.data_source
            .clone()
            .unwrap_or_else(|| PLACEHOLDER.to_string()),
        row.metric_type.clone(),
        row.metric_value.clone(),
        match row.is_valid {
            Some(true) => "TRUE".to_string(),
            Some(false) => "FALSE".to_string(),
            None => PLACEHOLDER.to_string(),
        },
        row.reason
            .clone()
            .unwrap_or_else(|| PLACEHOLDER.to_string()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use metricboard_core::MetricHealthStatus;

    fn status(success: u64, failed: u64, unchecked: u64, health_score: u8) -> MetricHealthStatus {
        MetricHealthStatus {
            total_metrics: success + failed + unchecked,
            metric_validation_success: success,
            metric_validation_failed: failed,
            metric_validation_unchecked: unchecked,
            health_score,
        }
    }

    #[test]
    fn unevaluated_category_shows_placeholders() {
        let overview = DashboardMetricOverview {
            reliability: status(0, 0, 5, 0),
            ..DashboardMetricOverview::default()
        };
        let rows = preview_rows(&overview);
        let reliability = &rows[0];
        assert_eq!(reliability.metric_type, "reliability");
        assert_eq!(reliability.total_metrics, "5");
        assert_eq!(reliability.passed, "-");
        assert_eq!(reliability.failed, "-");
        assert_eq!(reliability.unchecked, "5");
        assert_eq!(reliability.health_score, "-");
    }

    #[test]
    fn placeholder_wins_over_nonzero_looking_defaults() {
        // Even a stored (bogus) health score must not surface when nothing
        // was evaluated.
        let mut overview = DashboardMetricOverview::default();
        overview.custom = MetricHealthStatus {
            total_metrics: 3,
            metric_validation_success: 0,
            metric_validation_failed: 0,
            metric_validation_unchecked: 3,
            health_score: 40,
        };
        let rows = preview_rows(&overview);
        let custom = rows.iter().find(|row| row.metric_type == "custom").unwrap();
        assert_eq!(custom.health_score, "-");
    }

    #[test]
    fn evaluated_category_shows_numeric_cells() {
        let overview = DashboardMetricOverview {
            numeric: status(7, 2, 0, 78),
            ..DashboardMetricOverview::default()
        };
        let rows = preview_rows(&overview);
        let numeric = rows.iter().find(|row| row.metric_type == "numeric").unwrap();
        assert_eq!(numeric.passed, "7");
        assert_eq!(numeric.failed, "2");
        assert_eq!(numeric.health_score, "78%");
    }

    #[test]
    fn preview_emits_one_row_per_category_in_order() {
        let rows = preview_rows(&DashboardMetricOverview::default());
        let labels: Vec<&str> = rows.iter().map(|row| row.metric_type).collect();
        assert_eq!(
            labels,
            ["reliability", "numeric", "uniqueness", "completeness", "custom"]
        );
    }

    #[test]
    fn metric_cells_substitute_placeholders_and_uppercase_validity() {
        let row = MetricRow {
            metric_name: "orders_row_count".to_string(),
            data_source: None,
            metric_type: "row_count".to_string(),
            is_valid: None,
            metric_value: "120.00".to_string(),
            reason: None,
        };
        let cells = metric_cells(&row);
        assert_eq!(
            cells,
            ["orders_row_count", "-", "row_count", "120.00", "-", "-"]
        );

        let valid = MetricRow {
            is_valid: Some(true),
            ..row.clone()
        };
        assert_eq!(metric_cells(&valid)[4], "TRUE");

        let invalid = MetricRow {
            is_valid: Some(false),
            reason: Some("below threshold".to_string()),
            ..row
        };
        let cells = metric_cells(&invalid);
        assert_eq!(cells[4], "FALSE");
        assert_eq!(cells[5], "below threshold");
    }

    #[test]
    fn filter_options_are_fixed_at_build_time() {
        let type_column = METRIC_COLUMNS
            .iter()
            .find(|column| column.field == MetricField::MetricType)
            .unwrap();
        let Some(FilterVariant::MultiSelect(options)) = type_column.filter else {
            panic!("metric type column must offer a multi-select filter");
        };
        // Options that may match zero rows are still offered.
        assert!(options.contains(&"document_count"));
        assert!(options.contains(&"combined"));

        let reason_column = METRIC_COLUMNS.last().unwrap();
        assert_eq!(reason_column.field, MetricField::Reason);
        assert!(!reason_column.sortable);
        assert!(reason_column.filter.is_none());
    }
}

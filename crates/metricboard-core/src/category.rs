use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One of the five metric groupings shown on the dashboard.
///
/// The synthetic `overall` aggregate is deliberately not a variant; views
/// that need it read `DashboardMetricOverview::overall` directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum MetricCategory {
    Reliability,
    Numeric,
    Uniqueness,
    Completeness,
    Custom,
}

impl MetricCategory {
    /// Display order for tabs and table rows.
    pub const ALL: [MetricCategory; 5] = [
        MetricCategory::Reliability,
        MetricCategory::Numeric,
        MetricCategory::Uniqueness,
        MetricCategory::Completeness,
        MetricCategory::Custom,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MetricCategory::Reliability => "reliability",
            MetricCategory::Numeric => "numeric",
            MetricCategory::Uniqueness => "uniqueness",
            MetricCategory::Completeness => "completeness",
            MetricCategory::Custom => "custom",
        }
    }

    /// Resolve a tab index back to a category.
    ///
    /// Out-of-range indices return `None`; callers render a blank pane
    /// rather than treating this as fatal.
    pub fn from_index(index: usize) -> Option<MetricCategory> {
        MetricCategory::ALL.get(index).copied()
    }

    /// Short description shown next to the category chart.
    pub fn doc_hint(&self) -> &'static str {
        match self {
            MetricCategory::Reliability => {
                "Reliability metrics detect whether tables, indices and collections are updating with timely data"
            }
            MetricCategory::Numeric => {
                "Numeric distribution metrics detect changes in value distributions, variance, skew and more"
            }
            MetricCategory::Uniqueness => {
                "Uniqueness metrics detect breached data constraints like duplicates and distinct-value drift"
            }
            MetricCategory::Completeness => {
                "Completeness metrics detect missing values in datasets, i.e. null or empty values"
            }
            MetricCategory::Custom => {
                "Custom metrics detect whether data is formatted correctly and represents a valid value"
            }
        }
    }
}

/// Group a raw metric kind into its dashboard category.
///
/// Unrecognized kinds return `None`: the metric still appears in the full
/// table but contributes to no aggregate.
pub fn category_for_metric_kind(kind: &str) -> Option<MetricCategory> {
    match kind {
        "row_count" | "document_count" | "freshness" => Some(MetricCategory::Reliability),
        "min" | "max" | "avg" | "sum" | "stddev" | "variance" => Some(MetricCategory::Numeric),
        "distinct_count" | "duplicate_count" => Some(MetricCategory::Uniqueness),
        "null_count" | "null_percentage" | "empty_string_count" | "empty_string_percentage" => {
            Some(MetricCategory::Completeness)
        }
        "combined" => Some(MetricCategory::Custom),
        _ => None,
    }
}

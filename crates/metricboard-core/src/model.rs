use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::category::MetricCategory;

/// Top-level dashboard payload.
///
/// Constructed entirely upstream (by whatever pipeline evaluated the
/// metrics) and handed in as a single trusted, immutable value. There is no
/// update path; a new dashboard requires a fresh mount.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct DashboardInfo {
    /// Display name of the dashboard.
    pub name: String,
    /// Aggregate health per category, including the synthetic `overall`.
    pub dashboard: DashboardMetricOverview,
    /// Every evaluated metric, in upstream order.
    pub metrics: Vec<MetricRow>,
}

/// One evaluated metric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct MetricRow {
    pub metric_name: String,
    pub data_source: Option<String>,
    pub metric_type: String,
    /// `None` means the metric was defined but never evaluated.
    pub is_valid: Option<bool>,
    pub metric_value: String,
    pub reason: Option<String>,
}

/// Aggregate validation counts for one category.
///
/// Trusted invariant: `success + failed + unchecked <= total`. The health
/// score depends on success/failed only, never on unchecked.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct MetricHealthStatus {
    pub total_metrics: u64,
    pub metric_validation_success: u64,
    pub metric_validation_failed: u64,
    pub metric_validation_unchecked: u64,
    /// 0-100 summary of success vs failure, independent of unchecked.
    pub health_score: u8,
}

impl MetricHealthStatus {
    /// Count of metrics that were actually evaluated (pass or fail).
    pub fn evaluated(&self) -> u64 {
        self.metric_validation_success + self.metric_validation_failed
    }
}

/// Fixed mapping of the six category keys to their health status.
///
/// `overall` is the upstream aggregate across the other five; this layer
/// trusts it as provided and never recomputes it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct DashboardMetricOverview {
    pub overall: MetricHealthStatus,
    pub reliability: MetricHealthStatus,
    pub numeric: MetricHealthStatus,
    pub uniqueness: MetricHealthStatus,
    pub completeness: MetricHealthStatus,
    pub custom: MetricHealthStatus,
}

impl DashboardMetricOverview {
    /// Status of one non-overall category.
    pub fn status(&self, category: MetricCategory) -> &MetricHealthStatus {
        match category {
            MetricCategory::Reliability => &self.reliability,
            MetricCategory::Numeric => &self.numeric,
            MetricCategory::Uniqueness => &self.uniqueness,
            MetricCategory::Completeness => &self.completeness,
            MetricCategory::Custom => &self.custom,
        }
    }

    pub fn status_mut(&mut self, category: MetricCategory) -> &mut MetricHealthStatus {
        match category {
            MetricCategory::Reliability => &mut self.reliability,
            MetricCategory::Numeric => &mut self.numeric,
            MetricCategory::Uniqueness => &mut self.uniqueness,
            MetricCategory::Completeness => &mut self.completeness,
            MetricCategory::Custom => &mut self.custom,
        }
    }

    /// Non-overall categories paired with their status, in display order.
    pub fn categories(&self) -> impl Iterator<Item = (MetricCategory, &MetricHealthStatus)> {
        MetricCategory::ALL
            .iter()
            .map(|category| (*category, self.status(*category)))
    }
}

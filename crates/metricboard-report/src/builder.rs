use metricboard_core::{
    DashboardInfo, DashboardMetricOverview, MetricCategory, MetricHealthStatus, MetricRow,
    category_for_metric_kind,
};

/// One raw evaluation result, before projection into the payload.
#[derive(Debug, Clone)]
pub struct EvaluatedMetric {
    pub metric_name: String,
    pub data_source: Option<String>,
    pub metric_type: String,
    pub value: f64,
    /// `None` when the metric carried no validation rule.
    pub is_valid: Option<bool>,
    pub reason: Option<String>,
}

/// Accumulates evaluated metrics into a complete dashboard payload.
///
/// Metrics with an unrecognized kind are listed in the full table but
/// contribute to no category aggregate, matching the upstream pipeline.
#[derive(Debug, Clone)]
pub struct DashboardBuilder {
    name: String,
    overview: DashboardMetricOverview,
    rows: Vec<MetricRow>,
}

impl DashboardBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            overview: DashboardMetricOverview::default(),
            rows: Vec::new(),
        }
    }

    pub fn record(&mut self, metric: EvaluatedMetric) {
        if let Some(category) = category_for_metric_kind(&metric.metric_type) {
            self.bump(category, metric.is_valid);
        }
        self.rows.push(MetricRow {
            metric_name: metric.metric_name,
            data_source: metric.data_source,
            metric_type: metric.metric_type,
            is_valid: metric.is_valid,
            metric_value: format!("{:.2}", metric.value),
            reason: metric.reason,
        });
    }

    fn bump(&mut self, category: MetricCategory, is_valid: Option<bool>) {
        bump_status(self.overview.status_mut(category), is_valid);
        bump_status(&mut self.overview.overall, is_valid);
    }

    pub fn build(mut self) -> DashboardInfo {
        self.overview.overall.health_score = health_score(&self.overview.overall);
        for category in MetricCategory::ALL {
            let status = self.overview.status_mut(category);
            status.health_score = health_score(status);
        }
        DashboardInfo {
            name: self.name,
            dashboard: self.overview,
            metrics: self.rows,
        }
    }
}

fn bump_status(status: &mut MetricHealthStatus, is_valid: Option<bool>) {
    status.total_metrics += 1;
    match is_valid {
        Some(true) => status.metric_validation_success += 1,
        Some(false) => status.metric_validation_failed += 1,
        None => status.metric_validation_unchecked += 1,
    }
}

/// Success ratio over evaluated metrics, rounded to a whole percent.
/// Nothing evaluated pins the score to 0.
fn health_score(status: &MetricHealthStatus) -> u8 {
    let evaluated = status.evaluated();
    if evaluated == 0 {
        return 0;
    }
    let ratio = status.metric_validation_success as f64 / evaluated as f64;
    (ratio * 100.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metric(name: &str, kind: &str, is_valid: Option<bool>) -> EvaluatedMetric {
        EvaluatedMetric {
            metric_name: name.to_string(),
            data_source: Some("warehouse".to_string()),
            metric_type: kind.to_string(),
            value: 42.0,
            is_valid,
            reason: None,
        }
    }

    #[test]
    fn aggregates_into_category_and_overall() {
        let mut builder = DashboardBuilder::new("orders");
        builder.record(metric("orders_avg", "avg", Some(true)));
        builder.record(metric("orders_min", "min", Some(false)));
        builder.record(metric("orders_freshness", "freshness", None));

        let info = builder.build();
        assert_eq!(info.dashboard.numeric.total_metrics, 2);
        assert_eq!(info.dashboard.numeric.metric_validation_success, 1);
        assert_eq!(info.dashboard.numeric.metric_validation_failed, 1);
        assert_eq!(info.dashboard.numeric.health_score, 50);
        assert_eq!(info.dashboard.reliability.metric_validation_unchecked, 1);
        assert_eq!(info.dashboard.overall.total_metrics, 3);
        assert_eq!(info.dashboard.overall.health_score, 50);
        assert_eq!(info.metrics.len(), 3);
    }

    #[test]
    fn nothing_evaluated_pins_health_to_zero() {
        let mut builder = DashboardBuilder::new("fresh");
        builder.record(metric("orders_freshness", "freshness", None));
        let info = builder.build();
        assert_eq!(info.dashboard.reliability.health_score, 0);
        assert_eq!(info.dashboard.overall.health_score, 0);
    }

    #[test]
    fn unknown_kind_is_listed_but_not_aggregated() {
        let mut builder = DashboardBuilder::new("orders");
        builder.record(metric("exotic", "percentile_99", Some(true)));
        let info = builder.build();
        assert_eq!(info.dashboard.overall.total_metrics, 0);
        assert_eq!(info.metrics.len(), 1);
        assert_eq!(info.metrics[0].metric_name, "exotic");
    }

    #[test]
    fn metric_values_are_formatted_with_two_decimals() {
        let mut builder = DashboardBuilder::new("orders");
        builder.record(EvaluatedMetric {
            value: 0.5,
            ..metric("orders_null_percentage", "null_percentage", Some(true))
        });
        let info = builder.build();
        assert_eq!(info.metrics[0].metric_value, "0.50");
    }

    #[test]
    fn health_score_rounds_to_whole_percent() {
        let mut builder = DashboardBuilder::new("orders");
        builder.record(metric("a", "avg", Some(true)));
        builder.record(metric("b", "avg", Some(true)));
        builder.record(metric("c", "avg", Some(false)));
        let info = builder.build();
        // 2/3 rounds to 67.
        assert_eq!(info.dashboard.numeric.health_score, 67);
    }
}

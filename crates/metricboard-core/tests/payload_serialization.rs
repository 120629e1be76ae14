use metricboard_core::{DashboardInfo, MetricHealthStatus, MetricRow};

#[test]
fn serializes_metric_row_deterministically() {
    let row = MetricRow {
        metric_name: "first_name_null_count".to_string(),
        data_source: None,
        metric_type: "null_count".to_string(),
        is_valid: Some(true),
        metric_value: "0.00".to_string(),
        reason: None,
    };

    let json = serde_json::to_string_pretty(&row).expect("serialize row");
    let expected = r#"{
  "metric_name": "first_name_null_count",
  "data_source": null,
  "metric_type": "null_count",
  "is_valid": true,
  "metric_value": "0.00",
  "reason": null
}"#;
    assert_eq!(json, expected);
}

#[test]
fn parses_upstream_payload_wire_format() {
    let payload = r#"{
        "name": "orders",
        "dashboard": {
            "overall": {
                "total_metrics": 10,
                "metric_validation_success": 7,
                "metric_validation_failed": 2,
                "metric_validation_unchecked": 1,
                "health_score": 78
            },
            "reliability": {
                "total_metrics": 5,
                "metric_validation_success": 0,
                "metric_validation_failed": 0,
                "metric_validation_unchecked": 5,
                "health_score": 0
            },
            "numeric": {
                "total_metrics": 5,
                "metric_validation_success": 7,
                "metric_validation_failed": 2,
                "metric_validation_unchecked": 0,
                "health_score": 78
            },
            "uniqueness": {
                "total_metrics": 0,
                "metric_validation_success": 0,
                "metric_validation_failed": 0,
                "metric_validation_unchecked": 0,
                "health_score": 0
            },
            "completeness": {
                "total_metrics": 0,
                "metric_validation_success": 0,
                "metric_validation_failed": 0,
                "metric_validation_unchecked": 0,
                "health_score": 0
            },
            "custom": {
                "total_metrics": 0,
                "metric_validation_success": 0,
                "metric_validation_failed": 0,
                "metric_validation_unchecked": 0,
                "health_score": 0
            }
        },
        "metrics": [
            {
                "metric_name": "orders_freshness",
                "data_source": "warehouse",
                "metric_type": "freshness",
                "is_valid": null,
                "metric_value": "42.00",
                "reason": null
            }
        ]
    }"#;

    let info: DashboardInfo = serde_json::from_str(payload).expect("parse payload");
    assert_eq!(info.name, "orders");
    assert_eq!(info.dashboard.overall.health_score, 78);
    assert_eq!(info.dashboard.reliability.metric_validation_unchecked, 5);
    assert_eq!(info.metrics.len(), 1);
    assert_eq!(info.metrics[0].is_valid, None);
    assert_eq!(info.metrics[0].data_source.as_deref(), Some("warehouse"));
}

#[test]
fn evaluated_counts_success_and_failed_only() {
    let status = MetricHealthStatus {
        total_metrics: 10,
        metric_validation_success: 7,
        metric_validation_failed: 2,
        metric_validation_unchecked: 1,
        health_score: 78,
    };
    assert_eq!(status.evaluated(), 9);
}

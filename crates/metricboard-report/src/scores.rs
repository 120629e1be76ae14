use metricboard_core::MetricHealthStatus;

/// Which aggregate field a score card reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreField {
    TotalMetrics,
    ValidationSuccess,
    ValidationUnchecked,
    ValidationFailed,
    HealthScore,
}

/// Accent applied to a score value by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreTone {
    Default,
    Success,
    Failed,
    Unchecked,
}

/// Declarative description of one score card.
#[derive(Debug, Clone, Copy)]
pub struct ScoreDescriptor {
    pub title: &'static str,
    pub field: ScoreField,
    pub tone: ScoreTone,
    pub percent: bool,
}

/// The overall score strip, in display order.
pub const OVERALL_SCORES: [ScoreDescriptor; 5] = [
    ScoreDescriptor {
        title: "TOTAL METRICS",
        field: ScoreField::TotalMetrics,
        tone: ScoreTone::Default,
        percent: false,
    },
    ScoreDescriptor {
        title: "PASSED METRICS",
        field: ScoreField::ValidationSuccess,
        tone: ScoreTone::Success,
        percent: false,
    },
    ScoreDescriptor {
        title: "UNCHECKED METRICS",
        field: ScoreField::ValidationUnchecked,
        tone: ScoreTone::Unchecked,
        percent: false,
    },
    ScoreDescriptor {
        title: "FAILED METRICS",
        field: ScoreField::ValidationFailed,
        tone: ScoreTone::Failed,
        percent: false,
    },
    ScoreDescriptor {
        title: "HEALTH SCORE",
        field: ScoreField::HealthScore,
        tone: ScoreTone::Default,
        percent: true,
    },
];

/// A rendered score card: label, display value, accent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreEntry {
    pub title: &'static str,
    pub value: String,
    pub tone: ScoreTone,
}

fn field_value(status: &MetricHealthStatus, field: ScoreField) -> u64 {
    match field {
        ScoreField::TotalMetrics => status.total_metrics,
        ScoreField::ValidationSuccess => status.metric_validation_success,
        ScoreField::ValidationUnchecked => status.metric_validation_unchecked,
        ScoreField::ValidationFailed => status.metric_validation_failed,
        ScoreField::HealthScore => u64::from(status.health_score),
    }
}

/// Project one status through the score descriptors.
pub fn score_entries(status: &MetricHealthStatus) -> Vec<ScoreEntry> {
    OVERALL_SCORES
        .iter()
        .map(|descriptor| {
            let value = field_value(status, descriptor.field);
            let value = if descriptor.percent {
                format!("{value}%")
            } else {
                value.to_string()
            };
            ScoreEntry {
                title: descriptor.title,
                value,
                tone: descriptor.tone,
            }
        })
        .collect()
}

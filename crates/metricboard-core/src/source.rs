use crate::error::{Error, Result};
use crate::model::DashboardInfo;

/// Capability for obtaining a dashboard payload.
///
/// The consuming application supplies the implementation; nothing in the
/// view layer depends on a concrete source.
pub trait DashboardSource {
    fn load_dashboard(&self, dashboard_id: &str) -> Result<DashboardInfo>;
}

/// Source backed by an already-in-memory payload.
#[derive(Debug, Clone)]
pub struct StaticSource {
    dashboard: DashboardInfo,
}

impl StaticSource {
    pub fn new(dashboard: DashboardInfo) -> Self {
        Self { dashboard }
    }
}

impl DashboardSource for StaticSource {
    fn load_dashboard(&self, _dashboard_id: &str) -> Result<DashboardInfo> {
        Ok(self.dashboard.clone())
    }
}

/// Default source used when no real one is wired in. Always fails.
#[derive(Debug, Clone, Default)]
pub struct UnimplementedSource;

impl DashboardSource for UnimplementedSource {
    fn load_dashboard(&self, dashboard_id: &str) -> Result<DashboardInfo> {
        Err(Error::Unsupported(format!(
            "no dashboard source wired for '{dashboard_id}'"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DashboardMetricOverview;

    #[test]
    fn static_source_resolves_immediately() {
        let info = DashboardInfo {
            name: "test".to_string(),
            dashboard: DashboardMetricOverview::default(),
            metrics: Vec::new(),
        };
        let source = StaticSource::new(info.clone());
        let loaded = source.load_dashboard("any").expect("load dashboard");
        assert_eq!(loaded.name, info.name);
        assert_eq!(loaded.metrics.len(), 0);
    }

    #[test]
    fn unimplemented_source_always_fails() {
        let source = UnimplementedSource;
        let err = source.load_dashboard("dash-1").unwrap_err();
        assert!(matches!(err, Error::Unsupported(_)));
    }
}

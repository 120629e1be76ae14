//! Core contracts for Metricboard.
//!
//! This crate defines the dashboard payload types, the metric category
//! taxonomy, and the pluggable dashboard source seam shared by the report
//! and CLI crates.

pub mod category;
pub mod error;
pub mod model;
pub mod source;

pub use category::{MetricCategory, category_for_metric_kind};
pub use error::{Error, Result};
pub use model::{DashboardInfo, DashboardMetricOverview, MetricHealthStatus, MetricRow};
pub use source::{DashboardSource, StaticSource, UnimplementedSource};

/// Current contract version for `dashboard.json` artifacts.
pub const DASHBOARD_VERSION: &str = "0.1";

//! Observability module for monitoring and metrics.

pub mod metrics;

pub use metrics::{MetricsSummary, MetricsTracker, Timer};

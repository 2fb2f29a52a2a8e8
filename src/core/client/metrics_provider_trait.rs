use anyhow::Result;
use async_trait::async_trait;

use crate::domain::metric::cpu::dto::{MetricQuery, RawMetricResult};

/// Fetches one CPU utilization series. Called at most once per request.
#[async_trait]
pub trait MetricsProvider: Send + Sync {
    async fn fetch(&self, query: &MetricQuery) -> Result<RawMetricResult>;
}

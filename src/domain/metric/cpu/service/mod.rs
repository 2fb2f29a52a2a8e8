//! CPU usage retrieval: directory lookup → window/period → provider → normalization.

pub mod summary;

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use crate::core::client::instance_directory_trait::InstanceDirectory;
use crate::core::client::metrics_provider_trait::MetricsProvider;
use crate::domain::common::model::{Period, TimeRange};
use crate::domain::common::service::period_advisor::{self, MAX_POINTS};
use crate::domain::common::service::time_window;
use crate::domain::metric::cpu::dto::cpu_usage_summary_dto::CpuUsageSummaryDto;
use crate::domain::metric::cpu::dto::MetricResult;
use crate::domain::metric::cpu::util::{query_builder, result_normalizer};
use crate::domain::metric::error::MetricError;

pub type Clock = fn() -> DateTime<Utc>;

/// Stateless façade over the two outbound collaborators. Safe to share
/// across concurrent requests.
#[derive(Clone)]
pub struct CpuMetricService {
    directory: Arc<dyn InstanceDirectory>,
    provider: Arc<dyn MetricsProvider>,
    clock: Clock,
}

impl CpuMetricService {
    pub fn new(directory: Arc<dyn InstanceDirectory>, provider: Arc<dyn MetricsProvider>) -> Self {
        Self {
            directory,
            provider,
            clock: Utc::now,
        }
    }

    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    pub async fn get_cpu_usage(
        &self,
        ip_address: &str,
        range: TimeRange,
        period: Period,
    ) -> Result<MetricResult, MetricError> {
        let (_, result) = self.fetch_series(ip_address, range, period).await?;
        Ok(result)
    }

    pub async fn get_cpu_usage_summary(
        &self,
        ip_address: &str,
        range: TimeRange,
        period: Period,
    ) -> Result<CpuUsageSummaryDto, MetricError> {
        let (instance_id, result) = self.fetch_series(ip_address, range, period).await?;
        summary::summarize(&instance_id, &result).ok_or(MetricError::EmptyData("values"))
    }

    async fn fetch_series(
        &self,
        ip_address: &str,
        range: TimeRange,
        period: Period,
    ) -> Result<(String, MetricResult), MetricError> {
        info!(ip_address, %range, %period, "Starting CPU usage retrieval");

        let instance_id = self
            .directory
            .lookup(ip_address)
            .await
            .map_err(|e| {
                warn!(ip_address, error = %e, "Instance lookup failed");
                MetricError::ProviderError(e.to_string())
            })?
            .ok_or_else(|| MetricError::InstanceNotFound(ip_address.to_string()))?;
        debug!(ip_address, %instance_id, "Resolved instance");

        let now = (self.clock)();
        let window = time_window::resolve(range, now);
        let minimum = period_advisor::minimum_period(&window, now);
        let effective = period_advisor::cap_period(&window, period, minimum, MAX_POINTS);
        let query = query_builder::build(instance_id.clone(), window, effective);

        debug!(
            start = %query.window.start,
            end = %query.window.end,
            period = %query.period,
            "Fetching metrics for window"
        );

        let raw = self.provider.fetch(&query).await.map_err(|e| {
            warn!(%instance_id, error = %e, "Metrics provider call failed");
            MetricError::ProviderError(e.to_string())
        })?;

        let result = result_normalizer::normalize(raw)?;
        info!(
            %instance_id,
            points = result.timestamps.len(),
            first = ?result.first_timestamp(),
            last = ?result.last_timestamp(),
            "Retrieved CPU usage"
        );

        Ok((instance_id, result))
    }
}

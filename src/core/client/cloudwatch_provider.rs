use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_cloudwatch::error::DisplayErrorContext;
use aws_sdk_cloudwatch::primitives::DateTime as AwsDateTime;
use aws_sdk_cloudwatch::types::{Dimension, Metric, MetricDataQuery, MetricStat};
use chrono::{DateTime, Utc};
use tracing::debug;

use crate::core::client::metrics_provider_trait::MetricsProvider;
use crate::domain::metric::cpu::dto::{MetricQuery, RawMetricResult};
use crate::domain::metric::cpu::{CPU_METRIC_NAME, CPU_NAMESPACE, CPU_STATISTIC, INSTANCE_DIMENSION};

pub const CPU_QUERY_ID: &str = "cpuUtilization";

/// Fetches CPU utilization through CloudWatch `GetMetricData`.
#[derive(Clone)]
pub struct CloudWatchMetricsProvider {
    client: aws_sdk_cloudwatch::Client,
}

impl CloudWatchMetricsProvider {
    pub fn new(client: aws_sdk_cloudwatch::Client) -> Self {
        Self { client }
    }

    pub fn from_conf(config: &SdkConfig) -> Self {
        Self::new(aws_sdk_cloudwatch::Client::new(config))
    }
}

fn cpu_data_query(query: &MetricQuery) -> Result<MetricDataQuery> {
    let period = i32::try_from(query.period.as_secs())
        .with_context(|| format!("period {} does not fit CloudWatch limits", query.period))?;

    let metric = Metric::builder()
        .namespace(CPU_NAMESPACE)
        .metric_name(CPU_METRIC_NAME)
        .dimensions(
            Dimension::builder()
                .name(INSTANCE_DIMENSION)
                .value(&query.instance_id)
                .build()?,
        )
        .build();

    let stat = MetricStat::builder()
        .metric(metric)
        .period(period)
        .stat(CPU_STATISTIC)
        .build()?;

    Ok(MetricDataQuery::builder()
        .id(CPU_QUERY_ID)
        .metric_stat(stat)
        .return_data(true)
        .build()?)
}

pub(crate) fn to_chrono(ts: &AwsDateTime) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp(ts.secs(), ts.subsec_nanos())
}

#[async_trait]
impl MetricsProvider for CloudWatchMetricsProvider {
    async fn fetch(&self, query: &MetricQuery) -> Result<RawMetricResult> {
        let data_query = cpu_data_query(query)?;

        // Single page: the point ceiling keeps responses well under the page size.
        let output = self
            .client
            .get_metric_data()
            .metric_data_queries(data_query)
            .start_time(AwsDateTime::from_secs(query.window.start.timestamp()))
            .end_time(AwsDateTime::from_secs(query.window.end.timestamp()))
            .send()
            .await
            .map_err(|e| anyhow!("CloudWatch GetMetricData failed: {}", DisplayErrorContext(&e)))?;

        let Some(result) = output.metric_data_results.unwrap_or_default().into_iter().next() else {
            debug!(instance_id = %query.instance_id, "CloudWatch returned no result entry");
            return Ok(RawMetricResult::default());
        };

        let timestamps = result
            .timestamps
            .map(|ts| {
                ts.iter()
                    .map(to_chrono)
                    .collect::<Option<Vec<_>>>()
                    .ok_or_else(|| anyhow!("CloudWatch returned an out-of-range timestamp"))
            })
            .transpose()?;

        debug!(
            instance_id = %query.instance_id,
            timestamps = timestamps.as_ref().map(Vec::len),
            values = result.values.as_ref().map(Vec::len),
            "CloudWatch metric data received"
        );

        Ok(RawMetricResult {
            timestamps,
            values: result.values,
        })
    }
}

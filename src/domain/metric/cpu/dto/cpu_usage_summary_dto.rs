use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CpuUsageSummaryDto {
    pub metric_name: String,
    pub instance_id: String,
    pub total_data_points: usize,
    pub time_range: SummaryTimeRangeDto,
    pub sample_data_points: Vec<SampleDataPointDto>,
    pub statistics: CpuUsageStatisticsDto,
    pub high_usage_analysis: HighUsageAnalysisDto,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryTimeRangeDto {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SampleDataPointDto {
    pub timestamp: DateTime<Utc>,
    pub value: f64,
}

/// All values are CPU utilization percentages.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CpuUsageStatisticsDto {
    pub average: f64,
    pub maximum: f64,
    pub minimum: f64,
    pub median: f64,
    pub percentile95: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HighUsageAnalysisDto {
    pub threshold_percent: f64,
    pub periods_above_threshold: usize,
    pub percentage_of_total: f64,
}

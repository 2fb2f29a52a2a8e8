//! Metrics API DTOs

use std::net::IpAddr;

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::domain::common::model::{Period, TimeRange};
use crate::errors::AppError;

/// Sampling intervals offered by the period picker, in seconds.
pub const PERIOD_OPTIONS: [u32; 11] = [
    60, 300, 600, 900, 1_800, 3_600, 7_200, 14_400, 28_800, 43_200, 86_400,
];

/// Body of `POST /metrics/cpu-usage`.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CpuUsageRequest {
    /// Private IP address of the instance.
    #[validate(custom(function = "validate_ip_address"))]
    pub ip_address: String,

    /// One of the range labels, e.g. `"Last Day"`.
    pub time_range: String,

    /// Requested sampling interval in seconds.
    #[validate(range(min = 60, max = 86400))]
    pub period: u32,
}

impl CpuUsageRequest {
    /// Validate and convert into typed domain inputs.
    pub fn into_parts(self) -> Result<(String, TimeRange, Period), AppError> {
        self.validate()?;
        let range: TimeRange = self.time_range.parse()?;
        let period = Period::new(self.period)
            .ok_or_else(|| AppError::BodyParsingError("period must be positive".into()))?;
        Ok((self.ip_address, range, period))
    }
}

fn validate_ip_address(value: &str) -> Result<(), ValidationError> {
    value
        .parse::<IpAddr>()
        .map(|_| ())
        .map_err(|_| ValidationError::new("ip_address"))
}

#[derive(Debug, Serialize)]
pub struct TimeRangeOptionDto {
    pub label: &'static str,
    pub duration_secs: i64,
}

#[derive(Debug, Serialize)]
pub struct MetricOptionsDto {
    pub time_ranges: Vec<TimeRangeOptionDto>,
    pub periods: Vec<u32>,
}

impl MetricOptionsDto {
    pub fn current() -> Self {
        Self {
            time_ranges: TimeRange::ALL
                .into_iter()
                .map(|range| TimeRangeOptionDto {
                    label: range.label(),
                    duration_secs: range.duration_secs(),
                })
                .collect(),
            periods: PERIOD_OPTIONS.to_vec(),
        }
    }
}

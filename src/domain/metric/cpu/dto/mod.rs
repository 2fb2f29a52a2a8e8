//! CPU metric request/response shapes

pub mod cpu_usage_summary_dto;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::common::model::{Period, Window};

/// One provider request, built once per call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricQuery {
    pub instance_id: String,
    pub window: Window,
    pub period: Period,
}

/// Provider payload as received. Not trusted: arrays may be absent, empty,
/// unordered, or of different lengths.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawMetricResult {
    pub timestamps: Option<Vec<DateTime<Utc>>>,
    pub values: Option<Vec<f64>>,
}

/// Normalized series: equal non-zero lengths, timestamps non-decreasing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricResult {
    pub timestamps: Vec<DateTime<Utc>>,
    pub values: Vec<f64>,
}

impl MetricResult {
    pub fn first_timestamp(&self) -> Option<DateTime<Utc>> {
        self.timestamps.first().copied()
    }

    pub fn last_timestamp(&self) -> Option<DateTime<Utc>> {
        self.timestamps.last().copied()
    }
}

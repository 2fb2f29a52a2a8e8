//! Shared domain types (TimeRange, Window, Period)

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, TimeDelta, Utc};

use crate::domain::metric::error::MetricError;

/// Relative time selector offered to the operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeRange {
    LastHour,
    Last6Hours,
    Last12Hours,
    LastDay,
    Last7Days,
}

impl TimeRange {
    pub const ALL: [TimeRange; 5] = [
        TimeRange::LastHour,
        TimeRange::Last6Hours,
        TimeRange::Last12Hours,
        TimeRange::LastDay,
        TimeRange::Last7Days,
    ];

    /// Human-facing label, as rendered in the range picker.
    pub fn label(self) -> &'static str {
        match self {
            TimeRange::LastHour => "Last Hour",
            TimeRange::Last6Hours => "Last 6 Hours",
            TimeRange::Last12Hours => "Last 12 Hours",
            TimeRange::LastDay => "Last Day",
            TimeRange::Last7Days => "Last 7 Days",
        }
    }

    pub fn duration_secs(self) -> i64 {
        match self {
            TimeRange::LastHour => 3_600,
            TimeRange::Last6Hours => 21_600,
            TimeRange::Last12Hours => 43_200,
            TimeRange::LastDay => 86_400,
            TimeRange::Last7Days => 604_800,
        }
    }

    pub fn duration(self) -> TimeDelta {
        TimeDelta::seconds(self.duration_secs())
    }
}

impl FromStr for TimeRange {
    type Err = MetricError;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        TimeRange::ALL
            .into_iter()
            .find(|range| range.label() == label)
            .ok_or_else(|| MetricError::InvalidTimeRange(label.to_string()))
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Absolute `[start, end)` query window, both edges on whole minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl Window {
    pub fn duration(&self) -> TimeDelta {
        self.end - self.start
    }

    pub fn duration_secs(&self) -> i64 {
        self.duration().num_seconds()
    }
}

/// Provider aggregation bucket width in seconds. Never zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Period(u32);

impl Period {
    pub const ONE_MINUTE: Period = Period(60);
    pub const FIVE_MINUTES: Period = Period(300);
    pub const FIFTEEN_MINUTES: Period = Period(900);
    pub const ONE_HOUR: Period = Period(3_600);

    pub fn new(secs: u32) -> Option<Self> {
        (secs > 0).then_some(Period(secs))
    }

    pub fn as_secs(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}s", self.0)
    }
}

use chrono::{DateTime, TimeDelta, Timelike, Utc};

use crate::domain::common::model::{TimeRange, Window};

/// Drops seconds and sub-seconds so calls within the same minute yield the same window.
pub fn truncate_to_minute(at: DateTime<Utc>) -> DateTime<Utc> {
    at - TimeDelta::seconds(i64::from(at.second()))
        - TimeDelta::nanoseconds(i64::from(at.nanosecond()))
}

/// Anchor a relative range at `now`.
pub fn resolve(range: TimeRange, now: DateTime<Utc>) -> Window {
    let end = truncate_to_minute(now);
    let start = truncate_to_minute(end - range.duration());
    Window { start, end }
}

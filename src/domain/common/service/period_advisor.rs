use chrono::{DateTime, TimeDelta, Utc};
use tracing::debug;

use crate::domain::common::model::{Period, Window};

/// Hard ceiling on points per request, protecting transport and chart rendering.
pub const MAX_POINTS: u32 = 1_440;

/// Smallest period the provider honours for data starting `now - window.start` ago.
///
/// Tiers follow CloudWatch retention: 1-minute data for 3 hours, 5-minute for
/// 15 days, 15-minute for 63 days, hourly beyond. Re-verify provider limits
/// before touching these.
pub fn minimum_period(window: &Window, now: DateTime<Utc>) -> Period {
    let age = now - window.start;

    if age <= TimeDelta::hours(3) {
        Period::ONE_MINUTE
    } else if age <= TimeDelta::days(15) {
        Period::FIVE_MINUTES
    } else if age <= TimeDelta::days(63) {
        Period::FIFTEEN_MINUTES
    } else {
        Period::ONE_HOUR
    }
}

/// Raise `requested` to `minimum`, then widen it until the window fits in `max_points`.
pub fn cap_period(window: &Window, requested: Period, minimum: Period, max_points: u32) -> Period {
    let effective = requested.max(minimum);
    let max_points = u64::from(max_points.max(1));

    let expected = expected_points(window, effective);
    if expected <= max_points {
        return effective;
    }

    let adjusted = u32::try_from(window_secs(window).div_ceil(max_points)).unwrap_or(u32::MAX);
    let capped = Period::new(adjusted).map_or(minimum, |p| p.max(minimum));

    debug!(
        requested = %requested,
        expected_points = expected,
        capped = %capped,
        "Period widened to respect point ceiling"
    );
    capped
}

/// Number of points a window produces at `period`.
pub fn expected_points(window: &Window, period: Period) -> u64 {
    window_secs(window).div_ceil(u64::from(period.as_secs()))
}

fn window_secs(window: &Window) -> u64 {
    u64::try_from(window.duration_secs()).unwrap_or(0)
}

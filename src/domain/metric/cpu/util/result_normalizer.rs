use chrono::{DateTime, Utc};
use tracing::warn;

use crate::domain::metric::cpu::dto::{MetricResult, RawMetricResult};
use crate::domain::metric::error::MetricError;

/// Validate and repair a provider payload.
///
/// Absent or empty arrays are errors. Length mismatches are repaired by
/// keeping the common prefix, and a series whose first timestamp is later
/// than its last is reversed (CloudWatch scans newest-first by default).
/// Output is a pure function of input.
pub fn normalize(raw: RawMetricResult) -> Result<MetricResult, MetricError> {
    let RawMetricResult { timestamps, values } = raw;

    let mut timestamps = timestamps.ok_or(MetricError::MissingData("timestamps"))?;
    let mut values = values.ok_or(MetricError::MissingData("values"))?;

    if timestamps.is_empty() {
        return Err(MetricError::EmptyData("timestamps"));
    }
    if values.is_empty() {
        return Err(MetricError::EmptyData("values"));
    }

    if timestamps.len() != values.len() {
        let len = timestamps.len().min(values.len());
        warn!(
            timestamps = timestamps.len(),
            values = values.len(),
            kept = len,
            "Metric arrays differ in length, truncating to common prefix"
        );
        timestamps.truncate(len);
        values.truncate(len);
    }

    if timestamps.first() > timestamps.last() {
        timestamps.reverse();
        values.reverse();
    }

    if !is_non_decreasing(&timestamps) {
        // Reversal alone was not enough: provider returned interleaved data.
        warn!(points = timestamps.len(), "Metric timestamps out of order, sorting");
        let (sorted_ts, sorted_values) = sort_pairs(timestamps, values);
        timestamps = sorted_ts;
        values = sorted_values;
    }

    Ok(MetricResult { timestamps, values })
}

fn is_non_decreasing(timestamps: &[DateTime<Utc>]) -> bool {
    timestamps.windows(2).all(|w| w[0] <= w[1])
}

fn sort_pairs(
    timestamps: Vec<DateTime<Utc>>,
    values: Vec<f64>,
) -> (Vec<DateTime<Utc>>, Vec<f64>) {
    let mut pairs: Vec<(DateTime<Utc>, f64)> = timestamps.into_iter().zip(values).collect();
    pairs.sort_by_key(|(ts, _)| *ts);
    pairs.into_iter().unzip()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn ts(secs: i64) -> DateTime<Utc> {
        DateTime::from_timestamp(1_704_110_400 + secs, 0).unwrap()
    }

    fn raw(timestamps: Option<Vec<i64>>, values: Option<Vec<f64>>) -> RawMetricResult {
        RawMetricResult {
            timestamps: timestamps.map(|v| v.into_iter().map(ts).collect()),
            values,
        }
    }

    #[test]
    fn longer_timestamps_are_truncated() {
        let got = normalize(raw(Some(vec![0, 60, 120]), Some(vec![1.0, 2.0]))).unwrap();
        assert_eq!(got.timestamps, vec![ts(0), ts(60)]);
        assert_eq!(got.values, vec![1.0, 2.0]);
    }

    #[test]
    fn longer_values_are_truncated() {
        let got = normalize(raw(Some(vec![0]), Some(vec![5.0, 6.0, 7.0]))).unwrap();
        assert_eq!(got.timestamps, vec![ts(0)]);
        assert_eq!(got.values, vec![5.0]);
    }

    #[test]
    fn empty_arrays_fail() {
        let err = normalize(raw(Some(vec![]), Some(vec![]))).unwrap_err();
        assert_eq!(err, MetricError::EmptyData("timestamps"));

        let err = normalize(raw(Some(vec![0]), Some(vec![]))).unwrap_err();
        assert_eq!(err, MetricError::EmptyData("values"));
    }

    #[test]
    fn absent_arrays_fail() {
        let err = normalize(raw(None, Some(vec![1.0, 2.0]))).unwrap_err();
        assert_eq!(err, MetricError::MissingData("timestamps"));

        let err = normalize(raw(Some(vec![0]), None)).unwrap_err();
        assert_eq!(err, MetricError::MissingData("values"));
    }

    #[test]
    fn absent_is_checked_before_empty() {
        let err = normalize(raw(Some(vec![]), None)).unwrap_err();
        assert_eq!(err, MetricError::MissingData("values"));
    }

    #[test]
    fn descending_input_is_reversed_with_pairs_intact() {
        let got = normalize(raw(Some(vec![120, 60, 0]), Some(vec![3.0, 2.0, 1.0]))).unwrap();
        assert_eq!(got.timestamps, vec![ts(0), ts(60), ts(120)]);
        assert_eq!(got.values, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn truncation_happens_before_reversal() {
        // prefix [120, 60] kept, then reversed
        let got = normalize(raw(Some(vec![120, 60, 0]), Some(vec![3.0, 2.0]))).unwrap();
        assert_eq!(got.timestamps, vec![ts(60), ts(120)]);
        assert_eq!(got.values, vec![2.0, 3.0]);
    }

    #[test]
    fn interleaved_input_is_sorted_by_timestamp() {
        let got = normalize(raw(Some(vec![120, 0, 60]), Some(vec![3.0, 1.0, 2.0]))).unwrap();
        assert_eq!(got.timestamps, vec![ts(0), ts(60), ts(120)]);
        assert_eq!(got.values, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn single_point_passes_through() {
        let got = normalize(raw(Some(vec![0]), Some(vec![42.5]))).unwrap();
        assert_eq!(got.timestamps.len(), 1);
        assert_eq!(got.values, vec![42.5]);
    }

    fn ascending_series() -> impl Strategy<Value = (Vec<i64>, Vec<f64>)> {
        (1usize..64).prop_flat_map(|len| {
            (
                prop::collection::vec(0i64..1_000_000, len).prop_map(|mut v| {
                    v.sort_unstable();
                    v
                }),
                prop::collection::vec(0.0f64..100.0, len),
            )
        })
    }

    proptest! {
        #[test]
        fn normalize_is_idempotent((secs, values) in ascending_series()) {
            let once = normalize(raw(Some(secs), Some(values))).unwrap();
            let twice = normalize(RawMetricResult {
                timestamps: Some(once.timestamps.clone()),
                values: Some(once.values.clone()),
            })
            .unwrap();
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn mismatched_lengths_keep_common_prefix(
            (secs, values) in ascending_series(),
            extra_values in prop::collection::vec(0.0f64..100.0, 1..8),
            drop_timestamps in 0usize..8,
        ) {
            let mut long_values = values.clone();
            long_values.extend(extra_values);
            let keep = secs.len().saturating_sub(drop_timestamps).max(1);
            let short_secs = secs[..keep].to_vec();

            let got = normalize(raw(Some(short_secs.clone()), Some(long_values.clone()))).unwrap();
            let expected_len = short_secs.len().min(long_values.len());
            prop_assert_eq!(got.timestamps.len(), expected_len);
            prop_assert_eq!(got.values.len(), expected_len);
            prop_assert_eq!(&got.values[..], &long_values[..expected_len]);
            let expected_ts: Vec<_> = short_secs[..expected_len].iter().copied().map(ts).collect();
            prop_assert_eq!(got.timestamps, expected_ts);
        }

        #[test]
        fn strictly_descending_input_is_exactly_reversed(
            secs in prop::collection::btree_set(0i64..1_000_000, 2..64),
            seed in 0.0f64..100.0,
        ) {
            let descending: Vec<i64> = secs.into_iter().rev().collect();
            let values: Vec<f64> = (0..descending.len()).map(|i| seed + i as f64).collect();

            let got = normalize(raw(Some(descending.clone()), Some(values.clone()))).unwrap();

            let mut expected_ts: Vec<_> = descending.into_iter().map(ts).collect();
            expected_ts.reverse();
            let mut expected_values = values;
            expected_values.reverse();
            prop_assert_eq!(got.timestamps, expected_ts);
            prop_assert_eq!(got.values, expected_values);
        }
    }
}

use crate::domain::metric::cpu::dto::cpu_usage_summary_dto::{
    CpuUsageStatisticsDto, CpuUsageSummaryDto, HighUsageAnalysisDto, SampleDataPointDto,
    SummaryTimeRangeDto,
};
use crate::domain::metric::cpu::dto::MetricResult;
use crate::domain::metric::cpu::CPU_METRIC_NAME;

pub const HIGH_USAGE_THRESHOLD_PERCENT: f64 = 90.0;
const SAMPLE_POINTS: usize = 5;

/// Summarize a normalized series. `None` when there is no complete data point.
pub fn summarize(instance_id: &str, result: &MetricResult) -> Option<CpuUsageSummaryDto> {
    let count = result.timestamps.len().min(result.values.len());
    if count == 0 {
        return None;
    }
    let values = &result.values[..count];

    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let average = values.iter().sum::<f64>() / count as f64;
    let minimum = sorted[0];
    let maximum = sorted[count - 1];
    let median = sorted[count / 2];
    let percentile95 = sorted[((count as f64 * 0.95).floor() as usize).min(count - 1)];

    let above = values
        .iter()
        .filter(|v| **v > HIGH_USAGE_THRESHOLD_PERCENT)
        .count();

    let sample_data_points = result
        .timestamps
        .iter()
        .zip(values)
        .take(SAMPLE_POINTS)
        .map(|(timestamp, value)| SampleDataPointDto {
            timestamp: *timestamp,
            value: *value,
        })
        .collect();

    Some(CpuUsageSummaryDto {
        metric_name: CPU_METRIC_NAME.to_string(),
        instance_id: instance_id.to_string(),
        total_data_points: count,
        time_range: SummaryTimeRangeDto {
            start: result.timestamps[0],
            end: result.timestamps[count - 1],
        },
        sample_data_points,
        statistics: CpuUsageStatisticsDto {
            average,
            maximum,
            minimum,
            median,
            percentile95,
        },
        high_usage_analysis: HighUsageAnalysisDto {
            threshold_percent: HIGH_USAGE_THRESHOLD_PERCENT,
            periods_above_threshold: above,
            percentage_of_total: above as f64 / count as f64 * 100.0,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Utc};

    fn series(values: &[f64]) -> MetricResult {
        MetricResult {
            timestamps: (0..values.len() as i64)
                .map(|i| DateTime::from_timestamp(1_704_110_400 + i * 60, 0).unwrap())
                .collect(),
            values: values.to_vec(),
        }
    }

    #[test]
    fn statistics_over_ten_points() {
        let result = series(&[10.0, 20.0, 30.0, 40.0, 50.0, 60.0, 70.0, 80.0, 95.0, 99.0]);
        let summary = summarize("i-1", &result).unwrap();

        assert_eq!(summary.total_data_points, 10);
        assert!((summary.statistics.average - 55.4).abs() < 1e-9);
        assert_eq!(summary.statistics.minimum, 10.0);
        assert_eq!(summary.statistics.maximum, 99.0);
        assert_eq!(summary.statistics.median, 60.0);
        assert_eq!(summary.statistics.percentile95, 99.0);
        assert_eq!(summary.high_usage_analysis.periods_above_threshold, 2);
        assert!((summary.high_usage_analysis.percentage_of_total - 20.0).abs() < 1e-9);
    }

    #[test]
    fn samples_are_the_first_five_points() {
        let result = series(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0]);
        let summary = summarize("i-1", &result).unwrap();

        let sampled: Vec<f64> = summary.sample_data_points.iter().map(|p| p.value).collect();
        assert_eq!(sampled, vec![1.0, 2.0, 3.0, 4.0, 5.0]);
        assert_eq!(summary.sample_data_points[0].timestamp, result.timestamps[0]);
        assert_eq!(summary.time_range.end, result.timestamps[6]);
    }

    #[test]
    fn single_point_series() {
        let summary = summarize("i-1", &series(&[90.0])).unwrap();
        assert_eq!(summary.statistics.median, 90.0);
        assert_eq!(summary.statistics.percentile95, 90.0);
        // threshold is exclusive
        assert_eq!(summary.high_usage_analysis.periods_above_threshold, 0);
    }

    #[test]
    fn empty_series_has_no_summary() {
        assert_eq!(summarize("i-1", &series(&[])), None);

        let lopsided = MetricResult {
            timestamps: Vec::new(),
            values: vec![50.0],
        };
        assert_eq!(summarize("i-1", &lopsided), None);
    }
}

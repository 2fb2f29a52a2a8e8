pub mod dto;
pub mod service;
pub mod util;

/// Provider identity of the CPU utilization series.
pub const CPU_NAMESPACE: &str = "AWS/EC2";
pub const CPU_METRIC_NAME: &str = "CPUUtilization";
pub const INSTANCE_DIMENSION: &str = "InstanceId";
pub const CPU_STATISTIC: &str = "Average";

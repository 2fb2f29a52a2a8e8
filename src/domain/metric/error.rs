use thiserror::Error;

/// Failure kinds of a CPU metric request. All are terminal for the request.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MetricError {
    #[error("Invalid time range: {0}")]
    InvalidTimeRange(String),

    #[error("No instance found for IP address {0}")]
    InstanceNotFound(String),

    #[error("Metrics provider error: {0}")]
    ProviderError(String),

    #[error("Invalid metric data: missing {0}")]
    MissingData(&'static str),

    #[error("No metric data returned: {0} is empty")]
    EmptyData(&'static str),
}

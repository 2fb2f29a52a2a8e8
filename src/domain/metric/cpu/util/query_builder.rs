use crate::domain::common::model::{Period, Window};
use crate::domain::metric::cpu::dto::MetricQuery;

/// Assemble the provider query. Inputs are already validated upstream.
pub fn build(instance_id: impl Into<String>, window: Window, period: Period) -> MetricQuery {
    MetricQuery {
        instance_id: instance_id.into(),
        window,
        period,
    }
}

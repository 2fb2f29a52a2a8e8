//! Shared domain services (time window and sampling period logic)

pub mod period_advisor;
pub mod time_window;

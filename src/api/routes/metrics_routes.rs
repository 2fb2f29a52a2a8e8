//! Metrics routes (e.g., /api/v1/metrics/*)

use axum::{routing::{get, post}, Router};

use crate::api::controller::metric::cpu::CpuMetricsController;
use crate::app_state::AppState;

/// Build the router for metrics endpoints under /api/v1/metrics
pub fn metrics_routes() -> Router<AppState> {
    Router::new()
        .route("/cpu-usage", post(CpuMetricsController::get_cpu_usage))
        .route("/cpu-usage/summary", post(CpuMetricsController::get_cpu_usage_summary))
        .route("/options", get(CpuMetricsController::get_options))
}

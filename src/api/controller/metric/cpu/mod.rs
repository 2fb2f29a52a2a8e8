use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;

use crate::api::dto::metrics_dto::{CpuUsageRequest, MetricOptionsDto};
use crate::api::dto::ApiResponse;
use crate::api::util::json::to_json;
use crate::app_state::AppState;
use crate::domain::metric::cpu::dto::cpu_usage_summary_dto::CpuUsageSummaryDto;
use crate::domain::metric::cpu::dto::MetricResult;
use crate::errors::AppError;

pub struct CpuMetricsController;

impl CpuMetricsController {
    pub async fn get_cpu_usage(
        State(state): State<AppState>,
        payload: Result<Json<CpuUsageRequest>, JsonRejection>,
    ) -> Result<Json<ApiResponse<MetricResult>>, AppError> {
        let Json(req) = payload?;
        let (ip_address, range, period) = req.into_parts()?;
        to_json(
            state
                .metric_service
                .get_cpu_usage(&ip_address, range, period)
                .await,
        )
    }

    pub async fn get_cpu_usage_summary(
        State(state): State<AppState>,
        payload: Result<Json<CpuUsageRequest>, JsonRejection>,
    ) -> Result<Json<ApiResponse<CpuUsageSummaryDto>>, AppError> {
        let Json(req) = payload?;
        let (ip_address, range, period) = req.into_parts()?;
        to_json(
            state
                .metric_service
                .get_cpu_usage_summary(&ip_address, range, period)
                .await,
        )
    }

    pub async fn get_options() -> Json<ApiResponse<MetricOptionsDto>> {
        Json(ApiResponse::ok(MetricOptionsDto::current()))
    }
}

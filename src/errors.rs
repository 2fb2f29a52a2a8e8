use axum::{extract::rejection::JsonRejection, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use thiserror::Error;

use crate::domain::metric::error::MetricError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Internal server error: {0}")]
    InternalServerError(String),

    #[error("Body parsing error: {0}")]
    BodyParsingError(String),

    #[error("Upstream provider error: {0}")]
    ProviderError(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

/// Helper for mapping any unknown error into internal error
pub fn internal_error<E: ToString>(err: E) -> AppError {
    AppError::InternalServerError(err.to_string())
}

impl From<MetricError> for AppError {
    fn from(err: MetricError) -> Self {
        let message = err.to_string();
        match err {
            MetricError::InvalidTimeRange(_) => AppError::BodyParsingError(message),
            MetricError::InstanceNotFound(_) | MetricError::EmptyData(_) => AppError::NotFound(message),
            MetricError::ProviderError(_) | MetricError::MissingData(_) => AppError::ProviderError(message),
        }
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        internal_error(err)
    }
}

/// Malformed or incomplete request bodies are the caller's fault, never 422.
impl From<JsonRejection> for AppError {
    fn from(err: JsonRejection) -> Self {
        AppError::BodyParsingError(err.body_text())
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::BodyParsingError(err.to_string())
    }
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::BodyParsingError(_) => StatusCode::BAD_REQUEST,
            AppError::ProviderError(_) => StatusCode::BAD_GATEWAY,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status_code();

        // String provided by thiserror → safe JSON message
        let body = Json(json!({
            "message": self.to_string()
        }));

        (status, body).into_response()
    }
}

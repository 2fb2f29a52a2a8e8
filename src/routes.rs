use anyhow::{Context, Result};
use axum::{
    http::{HeaderValue, Method, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde_json::json;
use tower_http::cors::{Any, CorsLayer};

use crate::app_state::AppState;

/// Build the main application router
pub fn app_router(cors: CorsLayer) -> Router<AppState> {
    // Metrics and System subrouters live under /api/v1
    let api_v1 = Router::new()
        .nest("/metrics", crate::api::routes::metrics_routes::metrics_routes())
        .nest("/system", crate::api::routes::system_routes::system_routes());

    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .nest("/api/v1", api_v1)
        .fallback(handler_404)
        .layer(cors)
}

/// Single configured origin, or anything when unset.
pub fn cors_layer(origin: Option<&str>) -> Result<CorsLayer> {
    let Some(origin) = origin else {
        return Ok(CorsLayer::very_permissive());
    };

    let origin = HeaderValue::from_str(origin)
        .with_context(|| format!("CORS_ORIGIN is not a valid header value: {origin:?}"))?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any))
}

async fn root() -> &'static str {
    "Server is running!"
}

async fn health_check() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

async fn handler_404() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        "The requested resource was not found",
    )
}

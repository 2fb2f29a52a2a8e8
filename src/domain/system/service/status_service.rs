use anyhow::Result;
use chrono::Utc;
use serde_json::{json, Value};

use crate::domain::common::service::period_advisor::MAX_POINTS;

pub async fn status() -> Result<Value> {
    Ok(json!({
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "server_time": Utc::now().to_rfc3339(),
        "max_points": MAX_POINTS,
    }))
}

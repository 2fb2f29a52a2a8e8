use anyhow::{bail, Result};
use tracing::info;

use crate::app_state::AppState;
use crate::config::AppConfig;
use crate::domain::common::model::{Period, TimeRange};

/// Runs only when in CPUWATCH_DEBUG_MODE: one query against the pinned instance.
pub async fn run_debug(state: &AppState, config: &AppConfig) -> Result<()> {
    info!("🔧 Debug mode: running debug tasks...");

    let Some(pinned) = &config.pinned_instance else {
        bail!("CPUWATCH_DEBUG_MODE needs EC2_IP_ADDRESS and INSTANCE_ID");
    };

    let summary = state
        .metric_service
        .get_cpu_usage_summary(&pinned.ip_address, TimeRange::LastHour, Period::FIVE_MINUTES)
        .await?;

    info!(
        instance_id = %summary.instance_id,
        points = summary.total_data_points,
        average = %format!("{:.2}%", summary.statistics.average),
        maximum = %format!("{:.2}%", summary.statistics.maximum),
        p95 = %format!("{:.2}%", summary.statistics.percentile95),
        above_90 = summary.high_usage_analysis.periods_above_threshold,
        "Debug CPU usage summary"
    );

    info!("Debug tasks completed. Exiting...");
    Ok(())
}

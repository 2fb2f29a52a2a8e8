mod api;
mod app_state;
mod config;
mod core;
mod debug;
mod domain;
mod errors;
mod routes;

use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::net::TcpListener;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::app_state::build_app_state;
use crate::config::AppConfig;
use crate::core::client::aws_client::build_aws_config;
use crate::core::client::cloudwatch_provider::CloudWatchMetricsProvider;
use crate::core::client::ec2_directory::Ec2InstanceDirectory;
use crate::core::client::instance_directory_trait::InstanceDirectory;
use crate::core::client::static_directory::StaticInstanceDirectory;
use crate::domain::metric::cpu::service::CpuMetricService;

#[tokio::main]
async fn main() -> Result<()> {
    let config = AppConfig::from_env()?;
    let _log_guard = init_tracing(&config);

    info!(version = env!("CARGO_PKG_VERSION"), "Starting cpuwatch-core");

    let aws = build_aws_config(&config.aws).await;
    let ec2: Arc<dyn InstanceDirectory> = Arc::new(Ec2InstanceDirectory::from_conf(&aws));

    let directory: Arc<dyn InstanceDirectory> = match &config.pinned_instance {
        Some(pinned) => {
            info!(ip_address = %pinned.ip_address, "Pinned instance configured");
            Arc::new(
                StaticInstanceDirectory::default()
                    .with_entry(pinned.ip_address.clone(), pinned.instance_id.clone())
                    .with_fallback(ec2),
            )
        }
        None => ec2,
    };

    let provider = Arc::new(CloudWatchMetricsProvider::from_conf(&aws));
    let state = build_app_state(CpuMetricService::new(directory, provider));

    if config.debug_mode {
        return debug::run_debug(&state, &config).await;
    }

    let cors = routes::cors_layer(config.cors_origin.as_deref())?;
    let app = routes::app_router(cors).with_state(state);

    let addr = config.bind_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("🚀 Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

/// Stdout plus a daily rolling file. Keep the guard alive to flush on exit.
fn init_tracing(config: &AppConfig) -> WorkerGuard {
    let file_appender = tracing_appender::rolling::daily(&config.log_dir, "cpuwatch.log");
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true))
        .with(fmt::layer().with_ansi(false).with_writer(file_writer))
        .init();

    guard
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(?e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

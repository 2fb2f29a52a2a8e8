use std::sync::Arc;

use crate::domain::metric::cpu::service::CpuMetricService;

macro_rules! delegate_async_service {
    ($(fn $name:ident($($arg:ident : $typ:ty),*) -> $ret:ty => $path:path;)+) => {
        $(
            pub async fn $name(&self, $($arg: $typ),*) -> anyhow::Result<$ret> {
                $path($($arg),*).await
            }
        )+
    };
}

#[derive(Clone)]
pub struct AppState {
    pub system_service: Arc<SystemService>,
    pub metric_service: Arc<CpuMetricService>,
}

pub fn build_app_state(metric_service: CpuMetricService) -> AppState {
    AppState {
        system_service: Arc::new(SystemService::default()),
        metric_service: Arc::new(metric_service),
    }
}

#[derive(Clone, Default)]
pub struct SystemService;

impl SystemService {
    delegate_async_service! {
        fn status() -> serde_json::Value => crate::domain::system::service::status_service::status;
        fn health() -> serde_json::Value => crate::domain::system::service::health_service::health;
    }
}

use std::collections::HashMap;
use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;

use crate::core::client::instance_directory_trait::InstanceDirectory;

/// Fixed IP → instance table, optionally backed by another directory on a miss.
#[derive(Clone, Default)]
pub struct StaticInstanceDirectory {
    entries: HashMap<String, String>,
    fallback: Option<Arc<dyn InstanceDirectory>>,
}

impl StaticInstanceDirectory {
    pub fn with_entry(mut self, ip_address: impl Into<String>, instance_id: impl Into<String>) -> Self {
        self.entries.insert(ip_address.into(), instance_id.into());
        self
    }

    pub fn with_fallback(mut self, fallback: Arc<dyn InstanceDirectory>) -> Self {
        self.fallback = Some(fallback);
        self
    }
}

#[async_trait]
impl InstanceDirectory for StaticInstanceDirectory {
    async fn lookup(&self, ip_address: &str) -> Result<Option<String>> {
        if let Some(id) = self.entries.get(ip_address) {
            return Ok(Some(id.clone()));
        }

        match &self.fallback {
            Some(fallback) => fallback.lookup(ip_address).await,
            None => Ok(None),
        }
    }
}

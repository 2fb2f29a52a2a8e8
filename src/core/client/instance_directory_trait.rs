use anyhow::Result;
use async_trait::async_trait;

/// Resolves a private IP address to the compute instance holding it.
#[async_trait]
pub trait InstanceDirectory: Send + Sync {
    /// `Ok(None)` means no instance holds the address; `Err` is a lookup failure.
    async fn lookup(&self, ip_address: &str) -> Result<Option<String>>;
}

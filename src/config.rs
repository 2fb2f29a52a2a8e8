//! Process configuration, read from the environment (and `.env` when present).

use std::path::PathBuf;

use anyhow::{anyhow, bail, Context, Result};

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_LOG_DIR: &str = "logs";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AwsSettings {
    pub region: Option<String>,
    pub endpoint_url: Option<String>,
}

/// IP → instance pair answered locally, ahead of EC2.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PinnedInstance {
    pub ip_address: String,
    pub instance_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub aws: AwsSettings,
    pub cors_origin: Option<String>,
    pub pinned_instance: Option<PinnedInstance>,
    pub log_dir: PathBuf,
    pub debug_mode: bool,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        // Missing .env is normal outside local development.
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let port = match get("PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .with_context(|| format!("PORT must be a port number, got {raw:?}"))?,
            None => DEFAULT_PORT,
        };

        let debug_mode = match get("CPUWATCH_DEBUG_MODE") {
            Some(raw) => parse_bool(&raw).context("CPUWATCH_DEBUG_MODE")?,
            None => false,
        };

        let pinned_instance = match (get("EC2_IP_ADDRESS"), get("INSTANCE_ID")) {
            (Some(ip_address), Some(instance_id)) => Some(PinnedInstance {
                ip_address,
                instance_id,
            }),
            (None, None) => None,
            (Some(_), None) => bail!("EC2_IP_ADDRESS is set but INSTANCE_ID is missing"),
            (None, Some(_)) => bail!("INSTANCE_ID is set but EC2_IP_ADDRESS is missing"),
        };

        Ok(Self {
            host: get("CPUWATCH_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            aws: AwsSettings {
                region: get("AWS_REGION"),
                endpoint_url: get("CPUWATCH_AWS_ENDPOINT_URL"),
            },
            cors_origin: get("CORS_ORIGIN"),
            pinned_instance,
            log_dir: get("CPUWATCH_LOG_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_DIR)),
            debug_mode,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_bool(raw: &str) -> Result<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(anyhow!("expected a boolean, got {other:?}")),
    }
}

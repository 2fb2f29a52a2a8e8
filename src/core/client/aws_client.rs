use aws_config::retry::RetryConfig;
use aws_config::{BehaviorVersion, Region, SdkConfig};
use tracing::debug;

use crate::config::AwsSettings;

/// Loads shared AWS configuration from the default credential chain.
///
/// SDK retries are disabled: every EC2 and CloudWatch call is attempted once
/// and a failure surfaces to the caller as is.
pub async fn build_aws_config(settings: &AwsSettings) -> SdkConfig {
    let mut loader = aws_config::defaults(BehaviorVersion::latest())
        .retry_config(RetryConfig::disabled());

    if let Some(region) = &settings.region {
        debug!(%region, "Using AWS region from AWS_REGION");
        loader = loader.region(Region::new(region.clone()));
    }

    if let Some(endpoint) = &settings.endpoint_url {
        debug!(%endpoint, "Using custom AWS endpoint from CPUWATCH_AWS_ENDPOINT_URL");
        loader = loader.endpoint_url(endpoint);
    }

    let config = loader.load().await;
    debug!(region = ?config.region(), "AWS configuration loaded");
    config
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> AwsSettings {
        AwsSettings {
            region: Some("eu-west-1".into()),
            endpoint_url: Some("http://localhost:4566".into()),
        }
    }

    #[tokio::test]
    async fn outbound_calls_are_single_attempt() {
        let config = build_aws_config(&settings()).await;
        assert_eq!(config.retry_config().map(|r| r.max_attempts()), Some(1));
    }

    #[tokio::test]
    async fn region_and_endpoint_overrides_apply() {
        let config = build_aws_config(&settings()).await;
        assert_eq!(config.region(), Some(&Region::new("eu-west-1")));
        assert_eq!(config.endpoint_url(), Some("http://localhost:4566"));
    }
}

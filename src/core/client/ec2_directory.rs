use anyhow::{anyhow, Result};
use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_ec2::error::DisplayErrorContext;
use aws_sdk_ec2::types::Filter;
use tracing::debug;

use crate::core::client::instance_directory_trait::InstanceDirectory;

/// Instance states still holding a private address.
const LIVE_STATES: [&str; 4] = ["pending", "running", "stopping", "stopped"];

/// Looks up instances through EC2 `DescribeInstances`.
#[derive(Clone)]
pub struct Ec2InstanceDirectory {
    client: aws_sdk_ec2::Client,
}

impl Ec2InstanceDirectory {
    pub fn new(client: aws_sdk_ec2::Client) -> Self {
        Self { client }
    }

    pub fn from_conf(config: &SdkConfig) -> Self {
        Self::new(aws_sdk_ec2::Client::new(config))
    }
}

#[async_trait]
impl InstanceDirectory for Ec2InstanceDirectory {
    async fn lookup(&self, ip_address: &str) -> Result<Option<String>> {
        let ip_filter = Filter::builder()
            .name("private-ip-address")
            .values(ip_address)
            .build();

        let state_filter = LIVE_STATES
            .iter()
            .fold(Filter::builder().name("instance-state-name"), |b, state| {
                b.values(*state)
            })
            .build();

        let output = self
            .client
            .describe_instances()
            .filters(ip_filter)
            .filters(state_filter)
            .send()
            .await
            .map_err(|e| anyhow!("EC2 DescribeInstances failed: {}", DisplayErrorContext(&e)))?;

        let instance_id = output
            .reservations()
            .iter()
            .flat_map(|reservation| reservation.instances())
            .find_map(|instance| instance.instance_id())
            .map(str::to_string);

        debug!(ip_address, found = instance_id.is_some(), "EC2 instance lookup finished");
        Ok(instance_id)
    }
}

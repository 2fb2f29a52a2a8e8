pub mod instance_directory_trait;
pub mod metrics_provider_trait;

// AWS-backed collaborators
pub mod aws_client;
pub mod cloudwatch_provider;
pub mod ec2_directory;

// In-memory collaborators
pub mod static_directory;

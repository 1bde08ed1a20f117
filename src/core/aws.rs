//! AWS-backed providers.
//!
//! STS answers who we are, IAM lists the role's tags, and Secrets Manager
//! holds the payloads. Credentials and region come from the default
//! provider chain, with an optional region override.

use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region, SdkConfig};
use tracing::debug;

use crate::core::identity::IdentityProvider;
use crate::core::pipeline::Providers;
use crate::core::secrets::SecretProvider;
use crate::core::tags::{Tag, TagProvider};
use crate::error::{ConfigError, IdentityError, SecretError, TagError};

/// Load the shared AWS configuration.
///
/// An empty `region` is treated as unset so the default chain decides.
///
/// # Errors
///
/// Returns `ConfigError::MissingRegion` when no region resolves. Credentials
/// are resolved lazily, so a missing chain surfaces on the first STS call.
pub async fn load_sdk_config(region: Option<&str>) -> Result<SdkConfig, ConfigError> {
    let mut loader = aws_config::defaults(BehaviorVersion::latest());
    if let Some(region) = region.filter(|r| !r.is_empty()) {
        loader = loader.region(Region::new(region.to_string()));
    }
    let config = loader.load().await;

    let Some(region) = config.region() else {
        return Err(ConfigError::MissingRegion);
    };

    debug!(region = %region, "loaded AWS config");
    Ok(config)
}

/// AWS service clients, constructed once per run.
pub struct AwsClients {
    sts: aws_sdk_sts::Client,
    iam: aws_sdk_iam::Client,
    secrets: aws_sdk_secretsmanager::Client,
}

impl AwsClients {
    /// Build every client from one shared config.
    pub fn new(config: &SdkConfig) -> Self {
        Self {
            sts: aws_sdk_sts::Client::new(config),
            iam: aws_sdk_iam::Client::new(config),
            secrets: aws_sdk_secretsmanager::Client::new(config),
        }
    }

    /// Borrow the clients as pipeline providers.
    pub fn providers(&self) -> Providers<'_> {
        Providers {
            identity: &self.sts,
            tags: &self.iam,
            secrets: &self.secrets,
        }
    }
}

#[async_trait]
impl IdentityProvider for aws_sdk_sts::Client {
    async fn caller_arn(&self) -> Result<String, IdentityError> {
        let output = self.get_caller_identity().send().await.map_err(|e| {
            IdentityError::Provider(aws_sdk_sts::error::DisplayErrorContext(&e).to_string())
        })?;
        output
            .arn()
            .map(str::to_string)
            .ok_or(IdentityError::MissingArn)
    }
}

#[async_trait]
impl TagProvider for aws_sdk_iam::Client {
    async fn role_tags(&self, role: &str) -> Result<Vec<Tag>, TagError> {
        let mut tags = Vec::new();
        let mut marker: Option<String> = None;

        // IAM only returns a marker while the listing is truncated.
        loop {
            let output = self
                .list_role_tags()
                .role_name(role)
                .set_marker(marker.take())
                .send()
                .await
                .map_err(|e| TagError::Provider {
                    role: role.to_string(),
                    message: aws_sdk_iam::error::DisplayErrorContext(&e).to_string(),
                })?;

            tags.extend(output.tags().iter().map(|t| Tag::new(t.key(), t.value())));

            match output.marker() {
                Some(next) => marker = Some(next.to_string()),
                None => break,
            }
        }

        debug!(role, count = tags.len(), "listed role tags");
        Ok(tags)
    }
}

#[async_trait]
impl SecretProvider for aws_sdk_secretsmanager::Client {
    async fn secret_string(&self, reference: &str) -> Result<Option<String>, SecretError> {
        let output = self
            .get_secret_value()
            .secret_id(reference)
            .send()
            .await
            .map_err(|e| SecretError::Provider {
                reference: reference.to_string(),
                message: aws_sdk_secretsmanager::error::DisplayErrorContext(&e).to_string(),
            })?;
        Ok(output.secret_string().map(str::to_string))
    }
}

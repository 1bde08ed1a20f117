//! Shared run plumbing for CLI commands.
//!
//! The AWS and Kubernetes SDKs are async, so each command drives its work on
//! a current-thread tokio runtime.

use tokio::runtime::Runtime;
use tracing::info;

use crate::core::aws::{load_sdk_config, AwsClients};
use crate::core::config::Settings;
use crate::core::pipeline::{resolve_environment, Deadline};
use crate::core::types::EnvPair;
use crate::error::{ConfigError, Error, Result};

/// Build the single-threaded runtime a command runs on.
pub fn runtime() -> Result<Runtime> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| ConfigError::Runtime(e).into())
}

/// Load AWS config and run the resolution pipeline, all within `deadline`.
///
/// # Errors
///
/// Returns `Error::Config` if the AWS config cannot be loaded,
/// `Error::Identity` or `Error::Tag` if resolution aborts, and
/// `Error::Timeout` if the deadline passes first.
pub async fn resolve_secrets(settings: &Settings, deadline: Deadline) -> Result<Vec<EnvPair>> {
    let config = deadline
        .run(async { load_sdk_config(settings.region()).await.map_err(Error::from) })
        .await?;
    let clients = AwsClients::new(&config);
    let providers = clients.providers();

    let secrets = deadline
        .run(resolve_environment(
            &providers,
            &settings.tag_prefix,
            settings.reference_source,
        ))
        .await?;

    info!(count = secrets.len(), "resolved secrets");
    Ok(secrets)
}

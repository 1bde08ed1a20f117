//! Resolution pipeline.
//!
//! identity -> prefixed role tags -> secret payloads -> `KEY=VALUE` pairs.
//! Identity and tag failures abort the run; individual secret failures do not.

use std::future::Future;
use std::time::Duration;

use tokio::time::Instant;
use tracing::info;

use crate::core::identity::{resolve_role, IdentityProvider};
use crate::core::secrets::{resolve_all_secrets, SecretProvider};
use crate::core::tags::{collect_tags, references, ReferenceSource, TagProvider};
use crate::core::types::EnvPair;
use crate::error::{Error, Result};

/// The three providers the pipeline depends on.
pub struct Providers<'a> {
    pub identity: &'a dyn IdentityProvider,
    pub tags: &'a dyn TagProvider,
    pub secrets: &'a dyn SecretProvider,
}

/// Run identity, tag, and secret resolution in sequence.
///
/// # Errors
///
/// Returns `Error::Identity` or `Error::Tag` when the role or its tags cannot
/// be read. An empty result is not an error.
pub async fn resolve_environment(
    providers: &Providers<'_>,
    prefix: &str,
    source: ReferenceSource,
) -> Result<Vec<EnvPair>> {
    let role = resolve_role(providers.identity).await?;
    let tags = collect_tags(providers.tags, &role, prefix).await?;
    let refs = references(&tags, source);
    info!(role = %role, references = refs.len(), "resolving tagged secrets");

    Ok(resolve_all_secrets(providers.secrets, &refs).await)
}

/// A single deadline shared by every step of a run.
#[derive(Debug, Clone, Copy)]
pub struct Deadline {
    at: Instant,
    timeout: Duration,
}

impl Deadline {
    /// Start a deadline `timeout` from now.
    pub fn start(timeout: Duration) -> Self {
        Self {
            at: Instant::now() + timeout,
            timeout,
        }
    }

    /// Run `fut` to completion unless the deadline passes first.
    ///
    /// # Errors
    ///
    /// Returns `Error::Timeout` if the deadline elapses, discarding any
    /// partial work.
    pub async fn run<F, T>(&self, fut: F) -> Result<T>
    where
        F: Future<Output = Result<T>>,
    {
        match tokio::time::timeout_at(self.at, fut).await {
            Ok(result) => result,
            Err(_) => Err(Error::Timeout(self.timeout)),
        }
    }
}

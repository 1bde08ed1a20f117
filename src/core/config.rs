//! Run configuration.
//!
//! Collects the options that shape a resolution run. Values arrive from
//! command-line flags or their `FS_*` environment variables.

use std::time::Duration;

use tracing::debug;

use crate::core::constants;
use crate::core::tags::ReferenceSource;
use crate::error::ConfigError;

/// Settings shared by every sink mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// AWS region override; `None` defers to the default provider chain
    pub region: Option<String>,
    /// Tag-key prefix marking secret references
    pub tag_prefix: String,
    /// Which tag field names the secret
    pub reference_source: ReferenceSource,
    /// Deadline for the whole run
    pub timeout: Duration,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            region: None,
            tag_prefix: constants::DEFAULT_TAG_PREFIX.to_string(),
            reference_source: ReferenceSource::default(),
            timeout: constants::DEFAULT_TIMEOUT,
        }
    }
}

impl Settings {
    /// Validate settings before any external call is made.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::EmptyTagPrefix` for an empty prefix, which would
    /// otherwise treat every tag as a secret reference, and
    /// `ConfigError::ZeroTimeout` for a zero deadline.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tag_prefix.is_empty() {
            return Err(ConfigError::EmptyTagPrefix);
        }
        if self.timeout.is_zero() {
            return Err(ConfigError::ZeroTimeout);
        }

        debug!(
            region = self.region.as_deref().unwrap_or("<default>"),
            prefix = %self.tag_prefix,
            source = ?self.reference_source,
            timeout_secs = self.timeout.as_secs(),
            "settings validated"
        );
        Ok(())
    }

    /// Region override with empty strings treated as unset.
    pub fn region(&self) -> Option<&str> {
        self.region.as_deref().filter(|r| !r.is_empty())
    }
}

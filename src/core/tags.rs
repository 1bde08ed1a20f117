//! Role tag collection.
//!
//! Lists the tags on a role and keeps the ones whose key carries the secret
//! prefix. Each kept tag names a secret, through its value by default or its
//! key when [`ReferenceSource::Key`] is configured.

use async_trait::async_trait;
use tracing::info;

use crate::core::types::SecretReference;
use crate::error::TagError;

/// A key/value tag attached to a role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub key: String,
    pub value: String,
}

impl Tag {
    /// Create a tag from anything string-like.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// The secret reference this tag carries.
    pub fn reference(&self, source: ReferenceSource) -> &str {
        match source {
            ReferenceSource::Value => &self.value,
            ReferenceSource::Key => &self.key,
        }
    }
}

/// Which half of a tag names the secret.
#[derive(clap::ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReferenceSource {
    /// The tag value is the secret id.
    #[default]
    Value,
    /// The tag key is the secret id.
    Key,
}

/// Source of role tags.
#[async_trait]
pub trait TagProvider: Send + Sync {
    /// List every tag on `role`, in provider order.
    async fn role_tags(&self, role: &str) -> Result<Vec<Tag>, TagError>;
}

/// Collect the tags on `role` whose key starts with `prefix`.
///
/// Returns an empty list, not an error, when nothing matches.
///
/// # Errors
///
/// Returns `TagError` if the provider call fails.
pub async fn collect_tags<P>(provider: &P, role: &str, prefix: &str) -> Result<Vec<Tag>, TagError>
where
    P: TagProvider + ?Sized,
{
    info!(prefix, role, "getting prefixed tags for role");
    let tags = provider.role_tags(role).await?;
    Ok(filter_prefixed(tags, prefix))
}

/// Keep tags whose key starts with `prefix`, preserving order.
pub fn filter_prefixed(tags: Vec<Tag>, prefix: &str) -> Vec<Tag> {
    tags.into_iter()
        .filter(|tag| tag.key.starts_with(prefix))
        .collect()
}

/// Extract secret references from tags.
pub fn references(tags: &[Tag], source: ReferenceSource) -> Vec<SecretReference> {
    tags.iter()
        .map(|tag| tag.reference(source).to_string())
        .collect()
}

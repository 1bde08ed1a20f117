//! Identity resolution.
//!
//! Asks the identity provider who we are and extracts the role name from the
//! returned ARN, e.g. `arn:aws:sts::123456789012:assumed-role/MyRole/session`
//! resolves to `MyRole`.

use async_trait::async_trait;
use tracing::debug;

use crate::core::constants::{ARN_SEPARATOR, WILDCARD_ROLE};
use crate::core::types::RoleName;
use crate::error::IdentityError;

/// Source of the caller identity string.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Return the caller's identity ARN.
    async fn caller_arn(&self) -> Result<String, IdentityError>;
}

/// Resolve the current role name with a single provider call.
///
/// # Errors
///
/// Returns `IdentityError` if the provider call fails or the ARN does not
/// carry a usable role segment.
pub async fn resolve_role<P>(provider: &P) -> Result<RoleName, IdentityError>
where
    P: IdentityProvider + ?Sized,
{
    let arn = provider.caller_arn().await?;
    let role = parse_role_name(&arn)?;
    debug!(%arn, role, "resolved caller role");
    Ok(role.to_string())
}

/// Extract the role name: the second `/`-delimited segment of `arn`.
pub fn parse_role_name(arn: &str) -> Result<&str, IdentityError> {
    match arn.split(ARN_SEPARATOR).nth(1) {
        Some(role) if !role.is_empty() && role != WILDCARD_ROLE => Ok(role),
        _ => Err(IdentityError::InvalidArn(arn.to_string())),
    }
}

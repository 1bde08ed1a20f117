//! Type aliases for domain concepts.
//!
//! Provides semantic type aliases to make function signatures more descriptive.

/// Short role name parsed from the caller identity (e.g. `MyServiceRole`).
pub type RoleName = String;

/// Identifier of a secret in the secret store (name or ARN).
pub type SecretReference = String;

/// A resolved `KEY=VALUE` environment pair.
pub type EnvPair = String;

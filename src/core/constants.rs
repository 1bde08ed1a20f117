//! Constants used throughout fetch-secrets.
//!
//! Centralizes defaults and environment variable names.

use std::time::Duration;

/// Default tag-key prefix marking a role tag as a secret reference.
pub const DEFAULT_TAG_PREFIX: &str = "secrets_";

/// Deadline for the whole run, from config loading through the sink.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Segment separator in a caller identity ARN.
pub const ARN_SEPARATOR: char = '/';

/// Role segment value that never names a concrete role.
pub const WILDCARD_ROLE: &str = "*";

/// Separator between key and value in a resolved pair.
pub const PAIR_SEPARATOR: char = '=';

/// Default namespace for the Kubernetes sink.
pub const DEFAULT_NAMESPACE: &str = "consumer";

/// Default Secret name for the Kubernetes sink.
pub const DEFAULT_SECRET_NAME: &str = "starrocks-secret";

/// Kubernetes Secret type written on create.
pub const SECRET_TYPE: &str = "Opaque";

/// Environment variable holding the tracing filter.
pub const LOG_ENV: &str = "FETCH_SECRETS_LOG";

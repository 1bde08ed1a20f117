//! Error types for fetch-secrets.
//!
//! Each failure class has its own enum so the CLI can map it to a stable
//! process exit code. See [`Error::exit_code`].

use std::time::Duration;

use thiserror::Error;

/// Process exit codes. These are a contract with automation and must stay stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    Success = 0,
    ExecutableNotFound = 1,
    Config = 2,
    Pipeline = 3,
    Timeout = 4,
    ExecFailed = 5,
    Sink = 6,
}

impl ExitCode {
    /// Numeric value passed to `std::process::exit`.
    pub fn code(self) -> i32 {
        self as i32
    }
}

/// Top-level error type.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Identity(#[from] IdentityError),

    #[error(transparent)]
    Tag(#[from] TagError),

    #[error(transparent)]
    Sink(#[from] SinkError),

    #[error(transparent)]
    Exec(#[from] ExecError),

    #[error("deadline of {}s exceeded", .0.as_secs())]
    Timeout(Duration),

    #[error("unable to write output: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Exit code for this failure class.
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Error::Config(_) => ExitCode::Config,
            Error::Identity(_) | Error::Tag(_) => ExitCode::Pipeline,
            Error::Sink(_) => ExitCode::Sink,
            Error::Exec(ExecError::NotFound { .. }) | Error::Exec(ExecError::NoCommand) => {
                ExitCode::ExecutableNotFound
            }
            Error::Exec(ExecError::Failed { .. }) => ExitCode::ExecFailed,
            Error::Timeout(_) => ExitCode::Timeout,
            Error::Io(_) => ExitCode::Sink,
        }
    }
}

/// Configuration errors. Always fatal, raised before any resolution.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("tag prefix must not be empty")]
    EmptyTagPrefix,

    #[error("timeout must be greater than zero")]
    ZeroTimeout,

    #[error("no AWS region configured (set FS_REGION or AWS_REGION)")]
    MissingRegion,

    #[error("unable to build tokio runtime: {0}")]
    Runtime(#[source] std::io::Error),

    #[error("unable to load Kubernetes config: {0}")]
    Kube(String),
}

/// Failures resolving the caller's role name.
#[derive(Error, Debug)]
pub enum IdentityError {
    #[error("unable to get STS caller identity: {0}")]
    Provider(String),

    #[error("caller identity has no ARN")]
    MissingArn,

    #[error("unable to determine role name from arn: {0}")]
    InvalidArn(String),
}

/// Failures listing the role's tags.
#[derive(Error, Debug)]
pub enum TagError {
    #[error("unable to get tags for role {role}: {message}")]
    Provider { role: String, message: String },
}

/// Failures fetching a single secret. Logged and skipped at batch level, so
/// never wrapped in [`Error`].
#[derive(Error, Debug)]
pub enum SecretError {
    #[error("unable to get secret {reference:?} from SecretsManager: {message}")]
    Provider { reference: String, message: String },

    #[error("secret {0:?} has no string payload")]
    EmptyPayload(String),

    #[error("unable to parse {reference:?} JSON from SecretsManager: {message}")]
    InvalidPayload { reference: String, message: String },
}

/// Failures writing resolved pairs to the cluster secret store.
#[derive(Error, Debug)]
pub enum SinkError {
    /// Carries the whole pair; only the key half is displayed.
    #[error(
        "malformed secret pair for key {:?}: expected KEY=VALUE with a single '='",
        crate::core::secrets::pair_key(.0)
    )]
    MalformedPair(String),

    #[error("unable to {action} secret {namespace}/{name}: {message}")]
    Store {
        action: &'static str,
        namespace: String,
        name: String,
        message: String,
    },
}

/// Failures handing off to the target executable.
#[derive(Error, Debug)]
pub enum ExecError {
    #[error("no command specified")]
    NoCommand,

    #[error("executable not found: {program}: {source}")]
    NotFound {
        program: String,
        #[source]
        source: which::Error,
    },

    #[error("failed to execute {program}: {source}")]
    Failed {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

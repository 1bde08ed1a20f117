//! Command-line interface.

pub mod cluster;
pub mod exec;
pub mod resolve;
pub mod session;

use std::time::Duration;

use clap::{Args, Parser, Subcommand};

use crate::core::config::Settings;
use crate::core::constants;
use crate::core::tags::ReferenceSource;

/// fetch-secrets - Resolve secrets tagged on the current IAM role.
#[derive(Parser)]
#[command(
    name = "fetch-secrets",
    about = "Resolve secrets tagged on the current IAM role into a process or a Kubernetes Secret",
    version
)]
pub struct Cli {
    #[command(flatten)]
    pub options: Options,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Log output format
    #[arg(
        long,
        value_enum,
        env = "FS_LOG_FORMAT",
        default_value_t = LogFormat::Json,
        global = true
    )]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Command,
}

/// Options shared by every command.
#[derive(Args, Debug)]
pub struct Options {
    /// AWS region override (defaults to the SDK provider chain)
    #[arg(long, env = "FS_REGION", global = true)]
    pub region: Option<String>,

    /// Tag-key prefix marking a role tag as a secret reference
    #[arg(
        long,
        env = "FS_TAG_PREFIX",
        default_value = constants::DEFAULT_TAG_PREFIX,
        global = true
    )]
    pub tag_prefix: String,

    /// Which half of a tag names the secret
    #[arg(
        long,
        value_enum,
        env = "FS_REFERENCE_SOURCE",
        default_value_t = ReferenceSource::Value,
        global = true
    )]
    pub reference_source: ReferenceSource,

    /// Deadline for the whole run, in seconds
    #[arg(
        long,
        env = "FS_TIMEOUT",
        value_name = "SECONDS",
        default_value_t = constants::DEFAULT_TIMEOUT.as_secs(),
        global = true
    )]
    pub timeout: u64,
}

impl Options {
    /// Build run settings from parsed options.
    pub fn settings(&self) -> Settings {
        Settings {
            region: self.region.clone(),
            tag_prefix: self.tag_prefix.clone(),
            reference_source: self.reference_source,
            timeout: Duration::from_secs(self.timeout),
        }
    }
}

/// Log output formats.
#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Text,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Resolve secrets, then replace this process with a program
    Exec {
        /// Program and arguments to run
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        command: Vec<String>,
    },

    /// Resolve secrets into a Kubernetes Secret
    Kube {
        /// Namespace holding the Secret
        #[arg(long, env = "FS_NAMESPACE", default_value = constants::DEFAULT_NAMESPACE)]
        namespace: String,
        /// Name of the Secret to create or update
        #[arg(long, env = "FS_SECRET_NAME", default_value = constants::DEFAULT_SECRET_NAME)]
        secret_name: String,
    },

    /// Print the secret key names that would be resolved
    Resolve,
}

/// Execute a command.
pub fn execute(command: Command, options: &Options) -> crate::error::Result<()> {
    use Command::*;

    let settings = options.settings();
    match command {
        Exec { command } => exec::execute(&settings, &command),
        Kube {
            namespace,
            secret_name,
        } => cluster::execute(&settings, &namespace, &secret_name),
        Resolve => resolve::execute(&settings),
    }
}

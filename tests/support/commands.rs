//! Command helper methods for Test.

use super::Test;
use assert_cmd::Command;
use std::process::Output;

const CLEARED_VARS: &[&str] = &[
    "FS_REGION",
    "FS_TAG_PREFIX",
    "FS_REFERENCE_SOURCE",
    "FS_TIMEOUT",
    "FS_NAMESPACE",
    "FS_SECRET_NAME",
    "FS_LOG_FORMAT",
    "FETCH_SECRETS_LOG",
];

impl Test {
    /// Create a fetch-secrets command with an isolated environment.
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd =
            Command::cargo_bin("fetch-secrets").expect("failed to find fetch-secrets binary");
        for var in CLEARED_VARS {
            cmd.env_remove(var);
        }
        cmd.env("AWS_EC2_METADATA_DISABLED", "true");
        cmd
    }

    /// Run fetch-secrets with `args` and capture its output.
    pub fn run(&self, args: &[&str]) -> Output {
        self.cmd()
            .args(args)
            .output()
            .expect("failed to run fetch-secrets")
    }

    /// Shortcut for `fetch-secrets exec <command>`.
    pub fn exec(&self, command: &[&str]) -> Output {
        let mut args = vec!["exec"];
        args.extend_from_slice(command);
        self.run(&args)
    }
}

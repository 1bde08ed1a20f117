//! Exec command.
//!
//! Resolves secrets and replaces this process with the target program, with
//! the secrets merged over the current environment.

use tracing::info;

use crate::cli::session;
use crate::core::config::Settings;
use crate::core::pipeline::Deadline;
use crate::core::sink::process;
use crate::error::{ExecError, Result};

/// Run `command` with resolved secrets in its environment.
///
/// Only returns on failure; success hands the process to `command`.
pub fn execute(settings: &Settings, command: &[String]) -> Result<()> {
    let (program, args) = command.split_first().ok_or(ExecError::NoCommand)?;
    let path = process::locate(program)?;

    settings.validate()?;
    let deadline = Deadline::start(settings.timeout);
    let secrets = session::runtime()?.block_on(session::resolve_secrets(settings, deadline))?;

    info!(count = secrets.len(), "adding secrets to env");
    let env = process::merge_environment(std::env::vars_os(), &secrets);
    Err(process::exec_replace(&path, program, args, env).into())
}

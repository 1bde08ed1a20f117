//! Process environment sink.
//!
//! Hands the resolved pairs to a target program by replacing the current
//! process image. On Unix this is `execve`, so the PID is preserved. Other
//! platforms spawn a child with inherited stdio and exit with its status,
//! which gives the program a new PID.

use std::collections::BTreeMap;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::{info, warn};

use crate::core::constants::PAIR_SEPARATOR;
use crate::core::types::EnvPair;
use crate::error::ExecError;

/// Resolve `program` through the `PATH` search.
///
/// # Errors
///
/// Returns `ExecError::NotFound` if no executable matches.
pub fn locate(program: &str) -> Result<PathBuf, ExecError> {
    which::which(program).map_err(|source| ExecError::NotFound {
        program: program.to_string(),
        source,
    })
}

/// Overlay resolved pairs on a base environment. Later entries win.
pub fn merge_environment<I>(base: I, resolved: &[EnvPair]) -> BTreeMap<OsString, OsString>
where
    I: IntoIterator<Item = (OsString, OsString)>,
{
    let mut env: BTreeMap<OsString, OsString> = base.into_iter().collect();
    for pair in resolved {
        match pair.split_once(PAIR_SEPARATOR) {
            Some((key, value)) if !key.is_empty() => {
                env.insert(key.into(), value.into());
            }
            _ => warn!("skipping environment entry without a key"),
        }
    }
    env
}

/// Replace the current process with `path`, passing `args` and `env`.
///
/// `program` becomes `argv[0]`. Only returns if the hand-off fails.
pub fn exec_replace(
    path: &Path,
    program: &str,
    args: &[String],
    env: BTreeMap<OsString, OsString>,
) -> ExecError {
    info!(cmd = %program, args = args.len(), "executing");

    let mut cmd = Command::new(path);
    cmd.args(args).env_clear().envs(env);
    hand_off(cmd, program)
}

#[cfg(unix)]
fn hand_off(mut cmd: Command, program: &str) -> ExecError {
    use std::os::unix::process::CommandExt;

    let source = cmd.arg0(program).exec();
    ExecError::Failed {
        program: program.to_string(),
        source,
    }
}

#[cfg(not(unix))]
fn hand_off(mut cmd: Command, program: &str) -> ExecError {
    match cmd.status() {
        Ok(status) => std::process::exit(status.code().unwrap_or(1)),
        Err(source) => ExecError::Failed {
            program: program.to_string(),
            source,
        },
    }
}

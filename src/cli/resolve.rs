//! Resolve command.
//!
//! Dry run: prints the key names the pipeline resolves, never their values.

use std::io::{self, Write};

use crate::cli::session;
use crate::core::config::Settings;
use crate::core::pipeline::Deadline;
use crate::core::secrets::pair_key;
use crate::core::types::EnvPair;
use crate::error::Result;

/// Print resolved secret key names, one per line.
pub fn execute(settings: &Settings) -> Result<()> {
    settings.validate()?;
    let deadline = Deadline::start(settings.timeout);
    let secrets = session::runtime()?.block_on(session::resolve_secrets(settings, deadline))?;

    print_keys(&mut io::stdout().lock(), &secrets)?;
    Ok(())
}

/// Write the key half of each pair to `out`, one per line.
pub fn print_keys<W: Write>(out: &mut W, pairs: &[EnvPair]) -> io::Result<()> {
    for pair in pairs {
        writeln!(out, "{}", pair_key(pair))?;
    }
    out.flush()
}

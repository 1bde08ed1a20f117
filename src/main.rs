//! fetch-secrets - Resolve secrets tagged on the current IAM role.

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use fetch_secrets::cli::{execute, Cli, LogFormat};
use fetch_secrets::core::constants::LOG_ENV;
use fetch_secrets::error::ExitCode;

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("fetch_secrets=debug")
        } else {
            EnvFilter::new("fetch_secrets=info")
        }
    });

    // Logs go to stderr so an exec'd program owns stdout.
    let registry = tracing_subscriber::registry().with(filter);
    match cli.log_format {
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init(),
        LogFormat::Text => registry
            .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
            .init(),
    }

    info!(version = env!("CARGO_PKG_VERSION"), "fetch-secrets starting");

    let code = match execute(cli.command, &cli.options) {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            let code = e.exit_code();
            error!(error = %e, exit_code = code.code(), "fetch-secrets failure");
            code
        }
    };
    std::process::exit(code.code());
}

//! Command-line interface.
//!
//! Commands return a [`CommandResult`](commands::CommandResult); printing and the
//! exit status are decided here so the commands stay usable as a library.

use anyhow::Result;
use tracing_subscriber::EnvFilter;

pub mod args;
pub mod commands;
mod context;
mod exit_status;
mod report;
mod run;

pub use args::{Arguments, Command};
pub use context::ScanContext;
pub use exit_status::ExitStatus;

/// Environment variable holding a `tracing` filter directive, e.g. `transcan=debug`.
pub const LOG_ENV: &str = "TRANSCAN_LOG";

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    init_logging(args.verbose());

    let Some(args) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success);
    };

    let result = run::run(args)?;
    report::print(&result);

    Ok(result.exit_status)
}

fn init_logging(verbose: bool) {
    let default = if verbose { "transcan=debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));

    // A subscriber may already be installed when the CLI is driven as a library.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .try_init();
}

//! Command dispatch logic.
//!
//! Responsibilities:
//! - Build the loader from global options and apply files, `--set` and `--unset`.
//! - Route parsed CLI arguments to the matching command handler.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).
//!
//! Invariants:
//! - Overrides are applied after all files, in the order given.
//! - Error context names variables but never their values.

use anyhow::{Context, Result};
use envload_core::{Loader, LoaderConfig};

use crate::args::{Cli, Commands};
use crate::commands;
use crate::error::ExitCode;

/// Load the environment, then run the subcommand.
///
/// Returns the process exit code: the child's for `run`, success otherwise.
pub(crate) fn run_command(cli: Cli) -> Result<i32> {
    let loader = load_environment(&cli)?;

    match cli.command {
        Commands::Print { format } => commands::print::run(&loader, format)?,
        Commands::Get { name } => commands::get::run(&loader, &name)?,
        Commands::Check => commands::check::run(&loader, &cli.files)?,
        Commands::Run { command } => return commands::run::run(&command),
    }

    Ok(ExitCode::Success.as_i32())
}

fn load_environment(cli: &Cli) -> Result<Loader> {
    let config = LoaderConfig::new(cli.files.iter().cloned()).immutable(cli.immutable);
    let mut loader = Loader::new(config);

    loader.load().context("Failed to load env files")?;

    for assignment in &cli.set {
        let name = assignment.split_once('=').map_or(assignment.as_str(), |(n, _)| n);
        loader
            .set_variable(assignment, "")
            .with_context(|| format!("Failed to apply --set {}", name.trim()))?;
        tracing::debug!(name = %name.trim(), "Applied --set override");
    }

    for name in &cli.unset {
        loader.clear_variable(name);
        tracing::debug!(name = %name, "Applied --unset");
    }

    Ok(loader)
}

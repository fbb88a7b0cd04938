//! envload - load env files and run commands with them.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Initialize logging to stderr (stdout carries command output).
//! - Map failures to structured exit codes.
//!
//! Does NOT handle:
//! - Env file syntax or loading rules (see `envload-core`).
//!
//! Invariants:
//! - Files are loaded and overrides applied BEFORE any subcommand runs.
//! - A child command's exit code is passed through unchanged.

mod args;
mod commands;
mod dispatch;
mod error;
mod formatters;

use args::Cli;
use clap::Parser;
use dispatch::run_command;
use error::ExitCodeExt;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let code = match run_command(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            e.exit_code().as_i32()
        }
    };

    std::process::exit(code);
}

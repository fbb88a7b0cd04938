//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Read file lists and the immutable flag from `ENVLOAD_*` variables when not given.
//!
//! Invariants:
//! - Loader options go before the subcommand, so repeated `-f` values
//!   accumulate in one place and keep their order.
//!
//! Non-responsibilities:
//! - Does not load anything (see `dispatch` module).

use clap::{Parser, Subcommand, ValueEnum};
use std::ffi::OsString;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "envload")]
#[command(about = "Load KEY=VALUE env files into the environment", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  envload print\n  envload -f .env -f .env.local print --format json\n  envload --immutable run -- ./server --port 8080\n  envload -s LOG_LEVEL=debug get LOG_LEVEL\n"
)]
pub struct Cli {
    /// Env file to load; repeat to layer files (later files win)
    #[arg(
        short,
        long = "file",
        env = "ENVLOAD_FILES",
        value_delimiter = ',',
        default_value = ".env",
        value_name = "FILE"
    )]
    pub files: Vec<PathBuf>,

    /// Never overwrite or unset variables that already have a value
    #[arg(long, env = "ENVLOAD_IMMUTABLE")]
    pub immutable: bool,

    /// Apply KEY=VALUE after the files are loaded (same rules as a file line)
    #[arg(
        short,
        long = "set",
        value_name = "KEY=VALUE",
        value_parser = parse_assignment
    )]
    pub set: Vec<String>,

    /// Unset a variable after loading (ignored with --immutable)
    #[arg(short, long = "unset", value_name = "NAME")]
    pub unset: Vec<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the variables applied from the files
    Print {
        /// Output format
        #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Dotenv)]
        format: OutputFormat,
    },

    /// Print the value of one variable
    Get {
        /// Variable name
        name: String,
    },

    /// Validate the files and report how many variables they set
    Check,

    /// Run a command with the loaded environment
    Run {
        /// Command and arguments (put them after `--`)
        #[arg(
            required = true,
            trailing_var_arg = true,
            allow_hyphen_values = true,
            value_name = "COMMAND"
        )]
        command: Vec<OsString>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// NAME="value", loadable again by envload
    Dotenv,
    /// export NAME='value', for `eval` in POSIX shells
    Shell,
    /// JSON array of {"name", "value"} objects
    Json,
}

fn parse_assignment(s: &str) -> Result<String, String> {
    match s.split_once('=') {
        Some((name, _)) if !name.trim().is_empty() => Ok(s.to_string()),
        _ => Err(format!("expected KEY=VALUE, got '{}'", s)),
    }
}

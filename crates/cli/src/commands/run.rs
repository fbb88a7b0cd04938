//! `envload run -- COMMAND [ARGS...]`.
//!
//! The loader has already written into this process's environment, so the
//! child simply inherits it.

use anyhow::{Context, Result};
use std::ffi::OsString;
use std::process::{Command, ExitStatus};

use crate::error::ExitCode;

/// Run `command` and return its exit code.
pub fn run(command: &[OsString]) -> Result<i32> {
    let (program, args) = command.split_first().context("No command given")?;

    tracing::debug!(program = %program.to_string_lossy(), args = args.len(), "Running command");
    let status = Command::new(program)
        .args(args)
        .status()
        .with_context(|| format!("Failed to run `{}`", program.to_string_lossy()))?;

    Ok(exit_code_of(status))
}

/// The child's exit code, or `128 + signal` when it was killed by a signal.
fn exit_code_of(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    ExitCode::GeneralError.as_i32()
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::os::unix::process::ExitStatusExt;

    #[test]
    fn test_exit_code_passthrough() {
        assert_eq!(exit_code_of(ExitStatus::from_raw(0)), 0);
        assert_eq!(exit_code_of(ExitStatus::from_raw(3 << 8)), 3);
    }

    #[test]
    fn test_signal_exit_code() {
        // SIGKILL
        assert_eq!(exit_code_of(ExitStatus::from_raw(9)), 137);
    }

    #[test]
    fn test_empty_command_is_an_error() {
        assert!(run(&[]).is_err());
    }
}

//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map `LoadError` variants and CLI errors to exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//! - Exit codes of child processes (passed through by `commands::run`).
//!
//! Invariants:
//! - Exit codes 1-9 are reserved for envload's own error categories.
//! - Exit code 127 follows the shell convention for "command not found".

use envload_core::LoadError;
use thiserror::Error;

/// Errors raised by the CLI itself rather than the loader.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Variable {0} is not set")]
    VariableNotFound(String),
}

/// Structured exit codes for envload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - command completed successfully.
    Success = 0,

    /// General error - unhandled or generic failure.
    GeneralError = 1,

    /// An env file is missing, not a regular file, or unreadable.
    ConfigFileError = 2,

    /// A value in an env file (or `--set`) is malformed.
    ///
    /// Scripts should fix the file; retrying will not help.
    ValueFormatError = 3,

    /// `get` was asked for a variable that is not set.
    NotFound = 4,

    /// The command given to `run` could not be found.
    CommandNotFound = 127,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&LoadError> for ExitCode {
    fn from(err: &LoadError) -> Self {
        match err {
            LoadError::ConfigFile(_) => ExitCode::ConfigFileError,
            LoadError::InvalidValue { .. } | LoadError::ValueFormat(_) => {
                ExitCode::ValueFormatError
            }
        }
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Returns ExitCode::GeneralError if no known error is in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        for cause in self.chain() {
            if let Some(load_err) = cause.downcast_ref::<LoadError>() {
                return ExitCode::from(load_err);
            }
            if let Some(CliError::VariableNotFound(_)) = cause.downcast_ref::<CliError>() {
                return ExitCode::NotFound;
            }
            if let Some(io_err) = cause.downcast_ref::<std::io::Error>() {
                if io_err.kind() == std::io::ErrorKind::NotFound {
                    return ExitCode::CommandNotFound;
                }
            }
        }

        ExitCode::GeneralError
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;
    use envload_core::{ConfigFileError, ValueFormatError};
    use std::path::PathBuf;

    #[test]
    fn test_exit_code_as_i32() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::GeneralError.as_i32(), 1);
        assert_eq!(ExitCode::ConfigFileError.as_i32(), 2);
        assert_eq!(ExitCode::ValueFormatError.as_i32(), 3);
        assert_eq!(ExitCode::NotFound.as_i32(), 4);
        assert_eq!(ExitCode::CommandNotFound.as_i32(), 127);
    }

    #[test]
    fn test_from_load_error() {
        let missing = LoadError::ConfigFile(ConfigFileError::NotFound {
            path: PathBuf::from(".env"),
        });
        assert_eq!(ExitCode::from(&missing), ExitCode::ConfigFileError);

        let invalid = LoadError::InvalidValue {
            path: PathBuf::from(".env"),
            line: 1,
            source: ValueFormatError::UnquotedWhitespace {
                name: "KEY".to_string(),
            },
        };
        assert_eq!(ExitCode::from(&invalid), ExitCode::ValueFormatError);
    }

    #[test]
    fn test_exit_code_found_through_context() {
        let err = Err::<(), _>(LoadError::ValueFormat(
            ValueFormatError::UnquotedWhitespace {
                name: "KEY".to_string(),
            },
        ))
        .context("Failed to apply --set KEY");

        assert_eq!(err.unwrap_err().exit_code(), ExitCode::ValueFormatError);
    }

    #[test]
    fn test_variable_not_found() {
        let err = anyhow::Error::new(CliError::VariableNotFound("MISSING".to_string()));
        assert_eq!(err.exit_code(), ExitCode::NotFound);
    }

    #[test]
    fn test_command_not_found() {
        let err = anyhow::Error::new(std::io::Error::from(std::io::ErrorKind::NotFound))
            .context("Failed to run `does-not-exist`");
        assert_eq!(err.exit_code(), ExitCode::CommandNotFound);
    }

    #[test]
    fn test_unknown_error_is_general() {
        let err = anyhow::anyhow!("something else");
        assert_eq!(err.exit_code(), ExitCode::GeneralError);
    }
}

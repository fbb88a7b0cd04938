//! Error types for environment file loading.
//!
//! Responsibilities:
//! - Define the failures a load can end with: unreadable files and malformed values.
//! - Provide conversion from the component errors into `LoadError`.
//!
//! Invariants:
//! - Every variant names its context (file path, line number, variable name).
//! - Errors NEVER include raw values from env files to prevent secret leakage.

use std::io::ErrorKind;
use std::path::PathBuf;
use thiserror::Error;

/// A configured path could not be used as an env file.
#[derive(Error, Debug)]
pub enum ConfigFileError {
    #[error("Env file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Env file is not a regular file: {path}")]
    NotAFile { path: PathBuf },

    #[error("Failed to read env file at {path}: {kind}")]
    Read {
        path: PathBuf,
        kind: ErrorKind,
        #[source]
        source: std::io::Error,
    },
}

impl ConfigFileError {
    /// The path that failed.
    pub fn path(&self) -> &std::path::Path {
        match self {
            ConfigFileError::NotFound { path }
            | ConfigFileError::NotAFile { path }
            | ConfigFileError::Read { path, .. } => path,
        }
    }
}

/// A value could not be normalized.
///
/// SAFETY: Only the variable name is reported, never the value itself.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValueFormatError {
    #[error("Value for {name} contains whitespace; surround it with quotes")]
    UnquotedWhitespace { name: String },

    #[error("Value for {name} is missing its closing {quote} quote")]
    UnterminatedQuote { name: String, quote: char },
}

impl ValueFormatError {
    /// The variable whose value was rejected.
    pub fn name(&self) -> &str {
        match self {
            ValueFormatError::UnquotedWhitespace { name }
            | ValueFormatError::UnterminatedQuote { name, .. } => name,
        }
    }
}

/// Errors returned by [`crate::Loader`].
#[derive(Error, Debug)]
pub enum LoadError {
    #[error(transparent)]
    ConfigFile(#[from] ConfigFileError),

    #[error("Invalid value at {path}:{line}")]
    InvalidValue {
        path: PathBuf,
        line: usize,
        #[source]
        source: ValueFormatError,
    },

    /// A value passed directly to [`crate::Loader::set_variable`] was rejected.
    #[error(transparent)]
    ValueFormat(#[from] ValueFormatError),
}

impl LoadError {
    /// Returns the value error behind this failure, if any.
    pub fn value_format(&self) -> Option<&ValueFormatError> {
        match self {
            LoadError::InvalidValue { source, .. } | LoadError::ValueFormat(source) => Some(source),
            LoadError::ConfigFile(_) => None,
        }
    }
}

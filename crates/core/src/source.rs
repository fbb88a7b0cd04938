//! Reading env files into raw lines.
//!
//! Responsibilities:
//! - Verify each configured path is an existing, readable regular file.
//! - Split file content into non-empty lines, dropping `\n`, `\r\n` and `\r` terminators.
//!
//! Does NOT handle:
//! - Assignment syntax of any kind (see `parse.rs` and `processor.rs`).
//!
//! Invariants:
//! - Lines keep their in-file order and their 1-based line number.
//! - A `SourceLine` is never empty.

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::ConfigFileError;

/// One non-empty line of an env file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLine {
    /// 1-based line number in the originating file.
    pub number: usize,
    pub text: String,
}

/// Something that can turn a path into lines.
pub trait LineSource {
    fn read_lines(&self, path: &Path) -> Result<Vec<SourceLine>, ConfigFileError>;
}

/// Reads files from disk.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileSource;

impl LineSource for FileSource {
    fn read_lines(&self, path: &Path) -> Result<Vec<SourceLine>, ConfigFileError> {
        let metadata = std::fs::metadata(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => ConfigFileError::NotFound {
                path: path.to_path_buf(),
            },
            kind => ConfigFileError::Read {
                path: path.to_path_buf(),
                kind,
                source: e,
            },
        })?;

        if !metadata.is_file() {
            return Err(ConfigFileError::NotAFile {
                path: path.to_path_buf(),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| ConfigFileError::Read {
            path: path.to_path_buf(),
            kind: e.kind(),
            source: e,
        })?;

        let lines = split_lines(&content);
        tracing::debug!(path = %path.display(), lines = lines.len(), "Read env file");
        Ok(lines)
    }
}

/// In-memory files keyed by path, for tests and embedded defaults.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    files: HashMap<PathBuf, String>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `content` under `path`.
    pub fn with_file(mut self, path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        self.files.insert(path.into(), content.into());
        self
    }
}

impl LineSource for MemorySource {
    fn read_lines(&self, path: &Path) -> Result<Vec<SourceLine>, ConfigFileError> {
        self.files
            .get(path)
            .map(|content| split_lines(content))
            .ok_or_else(|| ConfigFileError::NotFound {
                path: path.to_path_buf(),
            })
    }
}

/// Read every path in order and concatenate their lines.
///
/// Fails on the first path that cannot be read.
pub fn read_all<S, P>(source: &S, paths: &[P]) -> Result<Vec<SourceLine>, ConfigFileError>
where
    S: LineSource + ?Sized,
    P: AsRef<Path>,
{
    let mut lines = Vec::new();
    for path in paths {
        lines.extend(source.read_lines(path.as_ref())?);
    }
    Ok(lines)
}

/// Split `content` on `\n`, `\r\n` or a lone `\r`, discarding empty lines.
///
/// Whitespace-only lines are kept; they are rejected later as non-assignments.
pub fn split_lines(content: &str) -> Vec<SourceLine> {
    let mut lines = Vec::new();
    let mut number = 0;
    let mut rest = content;

    while !rest.is_empty() {
        number += 1;
        let (line, next) = match rest.find(['\n', '\r']) {
            Some(idx) => {
                let skip = if rest[idx..].starts_with("\r\n") { 2 } else { 1 };
                (&rest[..idx], &rest[idx + skip..])
            }
            None => (rest, ""),
        };
        if !line.is_empty() {
            lines.push(SourceLine {
                number,
                text: line.to_string(),
            });
        }
        rest = next;
    }

    lines
}

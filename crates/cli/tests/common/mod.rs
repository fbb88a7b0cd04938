//! Shared test utilities for envload integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory.
//! - Write env file fixtures into temporary directories.
//!
//! Invariants / Assumptions:
//! - `ENVLOAD_*` variables from the host never reach the command under test.
//! - Every command runs inside its own temporary directory, so the default
//!   `.env` never picks up a file from the repository.

use assert_cmd::Command;
use std::path::PathBuf;
use tempfile::TempDir;

/// Temporary working directory holding env file fixtures.
pub struct Fixture {
    pub dir: TempDir,
}

impl Fixture {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    /// Write `content` to `name` inside the fixture directory.
    pub fn file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, content).expect("Failed to write env file");
        path
    }

    /// Returns a hermetic `envload` command running in the fixture directory.
    pub fn cmd(&self) -> Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("envload");
        cmd.current_dir(self.dir.path())
            .env_remove("ENVLOAD_FILES")
            .env_remove("ENVLOAD_IMMUTABLE")
            .env_remove("RUST_LOG");
        cmd
    }
}

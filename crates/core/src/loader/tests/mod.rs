//! Tests for the `Loader`.
//!
//! Responsibilities:
//! - Test multi-file ordering, precedence and cross-file interpolation.
//! - Test immutable mode for loads and for the single-variable paths.
//! - Test fail-fast behavior without rollback.
//! - Test loading into the real process environment.
//!
//! Invariants:
//! - Tests touching the process environment use `serial_test` and `env_lock()`.
//! - On-disk fixtures live in `tempfile` directories.

use std::sync::Mutex;


/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}

//! Loading env files into an environment store.
//!
//! Responsibilities:
//! - Provide the `Loader` entry point built from a fixed `LoaderConfig`.
//! - Read files in order and hand their lines to the `EntryProcessor`.
//! - Expose single-variable set/get/clear paths with the same rules as file loading.
//!
//! Does NOT handle:
//! - Line syntax (see `parse.rs`) or interpolation (see `interpolate.rs`).
//!
//! Invariants / Assumptions:
//! - Files are applied in configuration order; each file is fully applied before
//!   the next is read.
//! - A failure aborts the load; entries applied before it are not rolled back.

mod builder;
mod config;

pub use builder::Loader;
pub use config::LoaderConfig;

#[cfg(test)]
mod tests;

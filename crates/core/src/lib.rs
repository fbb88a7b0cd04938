//! Environment file loading for application bootstrap.
//!
//! This crate reads `KEY=VALUE` files and applies their entries to an
//! environment store, by default the real process environment.
//!
//! | Concern | Trait / type | Production | Test |
//! |---------|--------------|------------|------|
//! | Reading files | [`LineSource`] | [`FileSource`] | [`MemorySource`] |
//! | Environment | [`EnvironmentStore`] | [`ProcessEnv`] | [`MemoryEnv`] |
//!
//! ```no_run
//! use envload_core::{Loader, LoaderConfig};
//!
//! let mut loader = Loader::new(LoaderConfig::new([".env", ".env.local"]));
//! loader.load()?;
//! # Ok::<(), envload_core::LoadError>(())
//! ```

mod error;
pub mod interpolate;
mod loader;
pub mod parse;
mod processor;
pub mod source;
pub mod store;

pub use error::{ConfigFileError, LoadError, ValueFormatError};
pub use loader::{Loader, LoaderConfig};
pub use processor::{Entry, EntryProcessor};
pub use source::{FileSource, LineSource, MemorySource, SourceLine};
pub use store::{EnvironmentStore, MemoryEnv, ProcessEnv};

//! The `Loader` entry point.
//!
//! Responsibilities:
//! - Own the configuration, the line source and the entry processor.
//! - Allow substituting the store and the source (in-memory doubles for tests).

use crate::error::LoadError;
use crate::processor::{Entry, EntryProcessor};
use crate::source::{FileSource, LineSource};
use crate::store::{EnvironmentStore, ProcessEnv};

use super::config::LoaderConfig;

/// Loads env files into an environment store.
///
/// Defaults to the real process environment and the filesystem.
#[derive(Debug)]
pub struct Loader<S = ProcessEnv, R = FileSource> {
    config: LoaderConfig,
    source: R,
    processor: EntryProcessor<S>,
}

impl Loader {
    /// Create a loader writing into the process environment.
    pub fn new(config: LoaderConfig) -> Self {
        let immutable = config.is_immutable();
        Self {
            config,
            source: FileSource,
            processor: EntryProcessor::new(ProcessEnv::new(), immutable),
        }
    }
}

impl<S: EnvironmentStore, R: LineSource> Loader<S, R> {
    /// Replace the environment store.
    pub fn with_store<T: EnvironmentStore>(self, store: T) -> Loader<T, R> {
        Loader {
            processor: EntryProcessor::new(store, self.config.is_immutable()),
            config: self.config,
            source: self.source,
        }
    }

    /// Replace where file contents come from.
    pub fn with_source<Q: LineSource>(self, source: Q) -> Loader<S, Q> {
        Loader {
            config: self.config,
            source,
            processor: self.processor,
        }
    }

    pub fn config(&self) -> &LoaderConfig {
        &self.config
    }

    /// Read every configured file and apply its entries.
    ///
    /// # Errors
    ///
    /// - [`LoadError::ConfigFile`] if a file is missing, not a regular file, or unreadable.
    /// - [`LoadError::InvalidValue`] if an unquoted value contains whitespace or a
    ///   quoted value is never closed.
    ///
    /// Entries from files (and lines) before the failure remain applied.
    pub fn load(&mut self) -> Result<(), LoadError> {
        for path in self.config.files() {
            let lines = self.source.read_lines(path)?;
            self.processor.process(path, &lines)?;
        }
        tracing::debug!(
            files = self.config.files().len(),
            entries = self.processor.entries().len(),
            immutable = self.config.is_immutable(),
            "Loaded env files"
        );
        Ok(())
    }

    /// Apply a single variable with the same normalization and immutability
    /// rules as a file line.
    ///
    /// A `name` of the form `KEY=VALUE` is split and its right-hand side used
    /// instead of `value`.
    pub fn set_variable(&mut self, name: &str, value: &str) -> Result<(), LoadError> {
        self.processor.apply(name, value)?;
        Ok(())
    }

    /// Current value of `name` as seen through the store.
    pub fn get_variable(&self, name: &str) -> Option<String> {
        self.processor.store().get(name)
    }

    /// Remove `name`. Does nothing in immutable mode.
    pub fn clear_variable(&mut self, name: &str) {
        self.processor.clear(name);
    }

    /// Entries applied by this loader, one per name, in first-applied order.
    pub fn entries(&self) -> &[Entry] {
        self.processor.entries()
    }

    pub fn store(&self) -> &S {
        self.processor.store()
    }

    pub fn into_store(self) -> S {
        self.processor.into_store()
    }
}

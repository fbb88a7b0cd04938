//! Applying parsed entries to an environment store.
//!
//! Responsibilities:
//! - Run each line through classification, normalization and interpolation.
//! - Enforce the immutability policy before writing.
//! - Record applied entries so later lines observe them.
//!
//! Does NOT handle:
//! - Reading files (see `source.rs`).
//!
//! Invariants:
//! - Entries with an empty name are never applied.
//! - In immutable mode, a name the store already holds is never overwritten,
//!   including names applied earlier in the same load.
//! - Processing stops at the first malformed value; earlier entries stay applied.

use serde::Serialize;
use std::path::Path;

use crate::error::{LoadError, ValueFormatError};
use crate::interpolate;
use crate::parse::{self, LineKind};
use crate::source::SourceLine;
use crate::store::EnvironmentStore;

/// A resolved variable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    pub name: String,
    pub value: String,
}

/// Applies lines to a store.
#[derive(Debug)]
pub struct EntryProcessor<S> {
    store: S,
    immutable: bool,
    applied: Vec<Entry>,
}

impl<S: EnvironmentStore> EntryProcessor<S> {
    pub fn new(store: S, immutable: bool) -> Self {
        Self {
            store,
            immutable,
            applied: Vec::new(),
        }
    }

    pub fn is_immutable(&self) -> bool {
        self.immutable
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Entries applied so far, one per name, in first-applied order.
    pub fn entries(&self) -> &[Entry] {
        &self.applied
    }

    /// Process `lines` read from `origin`, in order.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::InvalidValue`] for the first line whose value is malformed.
    pub fn process(&mut self, origin: &Path, lines: &[SourceLine]) -> Result<(), LoadError> {
        for line in lines {
            self.process_line(&line.text).map_err(|source| LoadError::InvalidValue {
                path: origin.to_path_buf(),
                line: line.number,
                source,
            })?;
        }
        Ok(())
    }

    /// Process a single raw line. Comments and non-assignments are skipped.
    pub fn process_line(&mut self, line: &str) -> Result<(), ValueFormatError> {
        if parse::classify(line) != LineKind::Assignment {
            return Ok(());
        }
        match parse::split_assignment(line) {
            Some((name, value)) => self.apply(name, value),
            None => Ok(()),
        }
    }

    /// Normalize and apply one raw name/value pair.
    ///
    /// If `raw_name` itself contains `=`, it is split again and its right-hand
    /// side replaces `raw_value`.
    pub fn apply(&mut self, raw_name: &str, raw_value: &str) -> Result<(), ValueFormatError> {
        let (raw_name, raw_value) =
            parse::split_assignment(raw_name).unwrap_or((raw_name, raw_value));

        let name = parse::sanitize_name(raw_name);
        if name.is_empty() {
            tracing::trace!("Skipping entry with empty name");
            return Ok(());
        }

        let sanitized = parse::sanitize_value(&name, raw_value)?;

        if self.immutable && self.store.contains(&name) {
            tracing::debug!(name = %name, "Immutable mode: keeping existing value");
            return Ok(());
        }

        for reference in interpolate::unresolved(&sanitized, &self.store) {
            tracing::debug!(name = %name, reference = %reference, "Unresolved variable reference");
        }
        let value = interpolate::resolve(&sanitized, &self.store);

        self.store.set(&name, &value);
        tracing::trace!(name = %name, "Applied variable");
        self.record(name, value);
        Ok(())
    }

    /// Remove `name` from the store. No-op in immutable mode.
    pub fn clear(&mut self, name: &str) {
        if self.immutable {
            tracing::debug!(name = %name, "Immutable mode: not clearing variable");
            return;
        }
        self.store.remove(name);
        self.applied.retain(|entry| entry.name != name);
    }

    fn record(&mut self, name: String, value: String) {
        match self.applied.iter_mut().find(|entry| entry.name == name) {
            Some(entry) => entry.value = value,
            None => self.applied.push(Entry { name, value }),
        }
    }
}

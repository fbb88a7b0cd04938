//! Environment stores the loader writes into.
//!
//! Responsibilities:
//! - Define the `EnvironmentStore` seam so loading never depends on ambient global state.
//! - Provide the process-backed store used in production and an in-memory store for tests.
//!
//! Does NOT handle:
//! - Immutability; `Loader` decides whether a write or removal may happen.
//!
//! Invariants:
//! - After `set(name, value)`, `get(name)` returns `value` through every read path.
//! - After `remove(name)`, `get(name)` returns `None`.

mod memory;
mod process;

pub use memory::MemoryEnv;
pub use process::ProcessEnv;

/// Key/value environment the loader reads from and writes into.
///
/// # Thread Safety
///
/// Does **not** require `Send + Sync`. [`ProcessEnv`] mutates the process
/// environment, so concurrent loads must be serialized by the caller.
pub trait EnvironmentStore {
    fn get(&self, name: &str) -> Option<String>;

    fn set(&mut self, name: &str, value: &str);

    fn remove(&mut self, name: &str);

    fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }
}

impl<T: EnvironmentStore + ?Sized> EnvironmentStore for &mut T {
    fn get(&self, name: &str) -> Option<String> {
        (**self).get(name)
    }

    fn set(&mut self, name: &str, value: &str) {
        (**self).set(name, value)
    }

    fn remove(&mut self, name: &str) {
        (**self).remove(name)
    }
}

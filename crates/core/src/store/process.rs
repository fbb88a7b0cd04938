use std::collections::HashMap;

use super::EnvironmentStore;

/// Store backed by the real process environment.
///
/// Reads check the loader's own overlay first, then `std::env`. Writes go to
/// both, so code reading `std::env::var` directly sees what the loader applied.
/// Rust exposes a single environment view, so the overlay is the only extra tier.
#[derive(Debug, Default)]
pub struct ProcessEnv {
    overlay: HashMap<String, String>,
}

impl ProcessEnv {
    pub fn new() -> Self {
        Self::default()
    }

    /// `std::env::set_var` panics on these.
    fn is_os_compatible(name: &str, value: &str) -> bool {
        is_os_name(name) && !value.contains('\0')
    }
}

fn is_os_name(name: &str) -> bool {
    !name.is_empty() && !name.contains(['=', '\0'])
}

impl EnvironmentStore for ProcessEnv {
    fn get(&self, name: &str) -> Option<String> {
        if let Some(value) = self.overlay.get(name) {
            return Some(value.clone());
        }
        if !is_os_name(name) {
            return None;
        }
        std::env::var(name).ok()
    }

    /// A host variable holding non-UTF-8 bytes is present even though `get`
    /// cannot return it.
    fn contains(&self, name: &str) -> bool {
        self.overlay.contains_key(name) || (is_os_name(name) && std::env::var_os(name).is_some())
    }

    fn set(&mut self, name: &str, value: &str) {
        if Self::is_os_compatible(name, value) {
            // SAFETY: loading is single-threaded; callers that load from several
            // threads must serialize access to the process environment.
            unsafe {
                std::env::set_var(name, value);
            }
        } else {
            tracing::warn!(
                name = %name.escape_debug(),
                "Variable cannot be stored in the process environment; keeping it in the loader only"
            );
        }
        self.overlay.insert(name.to_string(), value.to_string());
    }

    fn remove(&mut self, name: &str) {
        self.overlay.remove(name);
        if is_os_name(name) {
            // SAFETY: see `set`.
            unsafe {
                std::env::remove_var(name);
            }
        }
    }
}

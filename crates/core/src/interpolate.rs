//! `${NAME}` substitution against an environment store.
//!
//! Unknown names are left untouched and substituted text is never re-scanned.

use regex::{Captures, Regex};
use std::sync::LazyLock;

use crate::store::EnvironmentStore;

static VARIABLE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$\{([A-Za-z0-9_]+)\}").expect("interpolation pattern is valid")
});

/// Replace every `${NAME}` in `value` with the store's current value for `NAME`.
pub fn resolve<S>(value: &str, store: &S) -> String
where
    S: EnvironmentStore + ?Sized,
{
    if !value.contains("${") {
        return value.to_string();
    }

    VARIABLE_PATTERN
        .replace_all(value, |caps: &Captures<'_>| {
            store.get(&caps[1]).unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

/// Names referenced by `${...}` tokens in `value`, in order of appearance.
pub fn references(value: &str) -> Vec<&str> {
    VARIABLE_PATTERN
        .captures_iter(value)
        .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
        .collect()
}

/// Names referenced in `value` that `resolve` would leave as literal tokens.
///
/// Call on the value before resolving it; substituted text may itself
/// contain `${...}` that was never meant as a reference.
pub fn unresolved<'a, S>(value: &'a str, store: &S) -> Vec<&'a str>
where
    S: EnvironmentStore + ?Sized,
{
    references(value)
        .into_iter()
        .filter(|name| store.get(name).is_none())
        .collect()
}

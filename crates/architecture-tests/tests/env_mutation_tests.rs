//! Architecture tests for process environment writes.
//!
//! `std::env::set_var` and `remove_var` are unsafe in edition 2024 and race
//! with any thread reading the environment. Outside of tests, only the store
//! module may call them.
//!
//! Invariants:
//! - Non-test code under `crates/*/src` writes to the environment only from
//!   `crates/core/src/store/`.
//! - Lines after a `#[cfg(test)]` marker are treated as test code.

use std::fs;
use std::path::Path;

const ALLOWED_DIR: &str = "crates/core/src/store";
const FORBIDDEN_CALLS: &[&str] = &["set_var(", "remove_var("];

#[test]
fn test_only_store_writes_process_environment() {
    let root = workspace_root();
    let mut violations = Vec::new();

    for entry in walkdir::WalkDir::new(root.join("crates"))
        .into_iter()
        .filter_entry(|e| e.file_name() != "target")
        .filter_map(|e| e.ok())
        .filter(|e| e.path().extension().is_some_and(|ext| ext == "rs"))
    {
        let relative = entry.path().strip_prefix(&root).unwrap_or(entry.path());
        let relative_str = relative.to_string_lossy().replace('\\', "/");

        if !relative_str.contains("/src/") || relative_str.starts_with(ALLOWED_DIR) {
            continue;
        }

        let content = fs::read_to_string(entry.path()).unwrap_or_default();
        for (line_no, call) in find_env_writes(&content) {
            violations.push(format!("{}:{}: {}", relative_str, line_no, call));
        }
    }

    assert!(
        violations.is_empty(),
        "Process environment written outside {}:\n{}",
        ALLOWED_DIR,
        violations.join("\n")
    );
}

/// (line number, call) for every forbidden call before the first test module.
fn find_env_writes(content: &str) -> Vec<(usize, &'static str)> {
    content
        .lines()
        .enumerate()
        .take_while(|(_, line)| !line.trim_start().starts_with("#[cfg(test)]"))
        .filter(|(_, line)| !line.trim_start().starts_with("//"))
        .flat_map(|(i, line)| {
            FORBIDDEN_CALLS
                .iter()
                .filter(move |call| line.contains(*call))
                .map(move |call| (i + 1, *call))
        })
        .collect()
}

fn workspace_root() -> std::path::PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .ancestors()
        .nth(2)
        .expect("architecture-tests lives two levels below the workspace root")
        .to_path_buf()
}

#[test]
fn test_find_env_writes_ignores_comments_and_tests() {
    let source = "\
fn f() {
    // std::env::set_var(\"A\", \"1\");
    unsafe { std::env::remove_var(\"B\") };
}

#[cfg(test)]
mod tests {
    fn g() { unsafe { std::env::set_var(\"C\", \"1\") }; }
}
";
    assert_eq!(find_env_writes(source), vec![(3, "remove_var(")]);
}

//! Property-based tests for value normalization.
//!
//! These tests generate values, encode them the way an env file author would,
//! and verify the loader recovers the original text.
//!
//! Test coverage:
//! - Quoted values with escaped delimiters and backslashes
//! - Quoted values are never comment-truncated
//! - Unquoted tokens survive trailing comments
//! - Unquoted values with inner whitespace are rejected

use proptest::prelude::*;

use envload_core::parse::{sanitize_name, sanitize_value};
use envload_core::{EnvironmentStore, Loader, LoaderConfig, MemoryEnv, MemorySource, ValueFormatError};

/// Escape `value` for use between `quote` delimiters.
fn encode_quoted(value: &str, quote: char) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push(quote);
    for c in value.chars() {
        if c == quote || c == '\\' {
            out.push('\\');
        }
        out.push(c);
    }
    out.push(quote);
    out
}

/// Printable single-line text, including quotes, backslashes and `#`.
fn line_text_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 #'\"\\\\=.,:;!?@%^&*()\\[\\]{}-]{0,40}"
}

fn quote_strategy() -> impl Strategy<Value = char> {
    prop_oneof![Just('"'), Just('\'')]
}

/// Whitespace-free token that cannot start with a quote or contain `${`.
fn token_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_./:@%+-][a-zA-Z0-9_./:@%+#=-]{0,30}"
}

fn name_strategy() -> impl Strategy<Value = String> {
    "[A-Z_][A-Z0-9_]{0,20}"
}

proptest! {
    #[test]
    fn prop_quoted_value_roundtrip(value in line_text_strategy(), quote in quote_strategy()) {
        let encoded = encode_quoted(&value, quote);
        let decoded = sanitize_value("KEY", &encoded).unwrap();
        prop_assert_eq!(decoded, value);
    }

    #[test]
    fn prop_quoted_value_ignores_trailing_comment(value in line_text_strategy(), quote in quote_strategy(), comment in "[a-z ]{0,10}") {
        let encoded = format!("{} # {}", encode_quoted(&value, quote), comment);
        let decoded = sanitize_value("KEY", &encoded).unwrap();
        prop_assert_eq!(decoded, value);
    }

    #[test]
    fn prop_unquoted_token_survives_comment(token in token_strategy(), comment in "[a-zA-Z0-9 =#]{0,20}") {
        let decoded = sanitize_value("KEY", &format!("{} #{}", token, comment)).unwrap();
        prop_assert_eq!(decoded, token);
    }

    #[test]
    fn prop_unquoted_whitespace_rejected(left in token_strategy(), right in token_strategy()) {
        let result = sanitize_value("KEY", &format!("{}\t{}", left, right));
        prop_assert_eq!(
            result,
            Err(ValueFormatError::UnquotedWhitespace { name: "KEY".to_string() })
        );
    }

    #[test]
    fn prop_name_sanitizing_is_idempotent(name in name_strategy()) {
        let wrapped = format!("export \"{}\"", name);
        let once = sanitize_name(&wrapped);
        prop_assert_eq!(sanitize_name(&once), once.clone());
        prop_assert_eq!(once, name);
    }

    #[test]
    fn prop_loaded_line_matches_quoted_value(name in name_strategy(), value in line_text_strategy(), quote in quote_strategy()) {
        // `${` would trigger interpolation; the generated alphabet has no `$`.
        let content = format!("{}={}\n", name, encode_quoted(&value, quote));
        let mut loader = Loader::new(LoaderConfig::new([".env"]))
            .with_store(MemoryEnv::new())
            .with_source(MemorySource::new().with_file(".env", content));

        loader.load().unwrap();
        prop_assert_eq!(loader.store().get(&name), Some(value));
    }
}

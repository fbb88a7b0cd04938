//! Line classification and name/value normalization.
//!
//! Responsibilities:
//! - Classify a raw line as a comment, an assignment, or something to ignore.
//! - Split assignments on the first `=` and sanitize both halves.
//! - Strip quoting with an explicit scanner (delimiter, escape, accumulate).
//!
//! Does NOT handle:
//! - `${VAR}` interpolation (see `interpolate.rs`).
//! - Writing to the environment (see `processor.rs`).
//!
//! Invariants:
//! - A line whose trimmed start is `#` is a comment, even if it contains `=`.
//! - Quoted values are never comment-truncated; unquoted values are cut at the first ` #`.
//! - Unquoted values are a single whitespace-free token.

use crate::error::ValueFormatError;

const EXPORT_PREFIX: &str = "export ";
const INLINE_COMMENT: &str = " #";

/// What a raw line is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Comment,
    Assignment,
    /// No `=` anywhere; silently ignored.
    Other,
}

pub fn classify(line: &str) -> LineKind {
    if line.trim().starts_with('#') {
        LineKind::Comment
    } else if line.contains('=') {
        LineKind::Assignment
    } else {
        LineKind::Other
    }
}

/// Split on the first `=`, trimming both sides.
pub fn split_assignment(line: &str) -> Option<(&str, &str)> {
    line.split_once('=')
        .map(|(name, value)| (name.trim(), value.trim()))
}

/// Drop a leading `export ` keyword and every quote character.
///
/// The keyword is recognized both outside and inside the quotes, so
/// `export 'FOO'` and `"export FOO"` both yield `FOO`.
pub fn sanitize_name(raw: &str) -> String {
    let raw = strip_export(raw);
    let unquoted: String = raw.chars().filter(|c| !matches!(c, '"' | '\'')).collect();
    strip_export(&unquoted).to_string()
}

fn strip_export(raw: &str) -> &str {
    let raw = raw.trim();
    raw.strip_prefix(EXPORT_PREFIX).unwrap_or(raw).trim()
}

/// Normalize the right-hand side of an assignment to `name`.
///
/// # Errors
///
/// - [`ValueFormatError::UnterminatedQuote`] when a quoted value never closes.
/// - [`ValueFormatError::UnquotedWhitespace`] when an unquoted value contains whitespace.
pub fn sanitize_value(name: &str, raw: &str) -> Result<String, ValueFormatError> {
    let value = raw.trim();
    let Some(first) = value.chars().next() else {
        return Ok(String::new());
    };

    if first == '"' || first == '\'' {
        return unquote(name, &value[first.len_utf8()..], first);
    }

    let value = match value.find(INLINE_COMMENT) {
        Some(idx) => value[..idx].trim(),
        None => value,
    };

    if value.chars().any(char::is_whitespace) {
        return Err(ValueFormatError::UnquotedWhitespace {
            name: name.to_string(),
        });
    }

    Ok(value.to_string())
}

/// Scan `body` (the text after the opening `quote`) up to the closing quote.
///
/// `\<quote>` yields the quote and `\\` a single backslash; any other backslash
/// is kept as-is. Whatever follows the closing quote is discarded.
fn unquote(name: &str, body: &str, quote: char) -> Result<String, ValueFormatError> {
    let mut out = String::with_capacity(body.len());
    let mut chars = body.chars();

    while let Some(c) = chars.next() {
        match c {
            c if c == quote => return Ok(out),
            '\\' => match chars.clone().next() {
                Some(next) if next == quote || next == '\\' => {
                    out.push(next);
                    chars.next();
                }
                _ => out.push('\\'),
            },
            c => out.push(c),
        }
    }

    Err(ValueFormatError::UnterminatedQuote {
        name: name.to_string(),
        quote,
    })
}

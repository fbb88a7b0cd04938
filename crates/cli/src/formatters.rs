//! Output formatters for `envload print`.
//!
//! Provides multiple output formats: dotenv, shell, and JSON.

use anyhow::Result;
use envload_core::Entry;

use crate::args::OutputFormat;

/// Formatter trait for different output types.
pub trait Formatter {
    fn format_entries(&self, entries: &[Entry]) -> Result<String>;
}

/// `NAME="value"` lines.
///
/// Re-loading the output yields the same values, except that `${NAME}`
/// sequences are interpolated again.
pub struct DotenvFormatter;

impl Formatter for DotenvFormatter {
    fn format_entries(&self, entries: &[Entry]) -> Result<String> {
        Ok(entries
            .iter()
            .map(|e| format!("{}=\"{}\"", e.name, escape_double_quoted(&e.value)))
            .collect::<Vec<_>>()
            .join("\n"))
    }
}

/// `export NAME='value'` lines for POSIX shells.
pub struct ShellFormatter;

impl Formatter for ShellFormatter {
    fn format_entries(&self, entries: &[Entry]) -> Result<String> {
        Ok(entries
            .iter()
            .map(|e| format!("export {}={}", e.name, quote_shell(&e.value)))
            .collect::<Vec<_>>()
            .join("\n"))
    }
}

pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn format_entries(&self, entries: &[Entry]) -> Result<String> {
        Ok(serde_json::to_string_pretty(entries)?)
    }
}

/// Get a formatter for the specified output format.
pub fn get_formatter(format: OutputFormat) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Dotenv => Box::new(DotenvFormatter),
        OutputFormat::Shell => Box::new(ShellFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
    }
}

pub fn format_entries(entries: &[Entry], format: OutputFormat) -> Result<String> {
    get_formatter(format).format_entries(entries)
}

fn escape_double_quoted(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Single-quote `s`, closing and reopening the quotes around embedded `'`.
fn quote_shell(s: &str) -> String {
    format!("'{}'", s.replace('\'', "'\\''"))
}

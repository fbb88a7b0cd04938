//! `envload print`.

use anyhow::Result;
use envload_core::Loader;

use crate::args::OutputFormat;
use crate::formatters::format_entries;

pub fn run(loader: &Loader, format: OutputFormat) -> Result<()> {
    let output = format_entries(loader.entries(), format)?;
    if !output.is_empty() {
        println!("{}", output);
    }
    Ok(())
}

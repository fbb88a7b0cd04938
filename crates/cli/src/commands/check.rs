//! `envload check`.

use anyhow::Result;
use envload_core::Loader;
use std::path::PathBuf;

pub fn run(loader: &Loader, files: &[PathBuf]) -> Result<()> {
    println!("{}", summary(loader.entries().len(), files.len()));
    Ok(())
}

fn summary(variables: usize, files: usize) -> String {
    format!(
        "OK: {} variable{} from {} file{}",
        variables,
        if variables == 1 { "" } else { "s" },
        files,
        if files == 1 { "" } else { "s" },
    )
}

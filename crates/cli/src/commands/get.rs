//! `envload get NAME`.

use anyhow::Result;
use envload_core::Loader;

use crate::error::CliError;

/// Print the value of `name`, whether it came from a file or the host environment.
pub fn run(loader: &Loader, name: &str) -> Result<()> {
    let value = loader
        .get_variable(name)
        .ok_or_else(|| CliError::VariableNotFound(name.to_string()))?;
    println!("{}", value);
    Ok(())
}

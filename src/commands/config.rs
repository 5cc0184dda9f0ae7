//! Config subcommands handler

use std::process::ExitCode;

use anyhow::{bail, Result};

use tfrag::Config;

/// Show the effective configuration as TOML.
#[cfg(not(tarpaulin_include))]
pub fn handle_show(config: &Config) -> Result<ExitCode> {
    let toml_str = toml::to_string_pretty(config)?;
    print!("{}", toml_str);
    Ok(ExitCode::SUCCESS)
}

/// Print where the configuration file is read from.
#[cfg(not(tarpaulin_include))]
pub fn handle_path() -> Result<ExitCode> {
    let path = Config::config_path()?;
    println!("{}", path.display());
    Ok(ExitCode::SUCCESS)
}

/// Write a default configuration file.
///
/// Refuses to overwrite an existing file unless `force` is set.
#[cfg(not(tarpaulin_include))]
pub fn handle_init(force: bool) -> Result<ExitCode> {
    let path = Config::config_path()?;
    if path.exists() && !force {
        bail!(
            "{} already exists (use --force to overwrite)",
            path.display()
        );
    }

    let path = Config::default().save()?;
    println!("Wrote {}", path.display());
    Ok(ExitCode::SUCCESS)
}

//! Config subcommands handler

use std::path::Path;

use anyhow::{Context, Result};

use tweetext::Config;

/// Show the effective configuration as TOML.
#[cfg(not(tarpaulin_include))]
pub fn handle_show(config_path: Option<&Path>) -> Result<()> {
    let config = Config::load(config_path).context("Failed to load config")?;
    let toml_str = config.to_toml()?;
    print!("{}", toml_str);
    Ok(())
}

/// Print the config file that would be loaded, noting whether it exists.
#[cfg(not(tarpaulin_include))]
pub fn handle_path(config_path: Option<&Path>) -> Result<()> {
    let (path, _) = Config::resolve_path(config_path)?;
    if path.exists() {
        println!("{}", path.display());
    } else {
        println!("{} (not found, using defaults)", path.display());
    }
    Ok(())
}

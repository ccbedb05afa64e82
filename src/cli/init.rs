//! Init command implementation

use std::path::PathBuf;

use anyhow::{bail, Result};

use nutrilog::config::Config;

/// Write a default config with standard goals
pub fn init_command(config_path: Option<PathBuf>, force: bool) -> Result<()> {
    let config_path = config_path.unwrap_or_else(Config::global_config_path);

    if config_path.exists() && !force {
        bail!(
            "Configuration already exists: {}\nUse --force to overwrite.",
            config_path.display()
        );
    }

    Config::with_defaults().save_to_file(&config_path)?;
    println!("Created: {}", config_path.display());

    Ok(())
}

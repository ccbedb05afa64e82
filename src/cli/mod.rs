//! CLI command implementations

pub mod achievements;
pub mod catalog;
pub mod init;
pub mod streak;
pub mod summary;

use std::path::{Path, PathBuf};

use anyhow::Result;

use nutrilog::config::Config;
use nutrilog::domain::EventLog;

/// Load the config from an explicit path or the global location
pub fn load_config(config_path: Option<&Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::from_file(path),
        None => Config::load(),
    }
}

/// Load the event log from `--log` or the path configured in settings
pub fn load_event_log(config: &Config, log_path: Option<PathBuf>) -> Result<EventLog> {
    let path = log_path.unwrap_or_else(|| config.settings.event_log_path());
    EventLog::from_file(&path)
}

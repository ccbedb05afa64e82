//! Settings configuration types

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::Config;

/// General settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Where the achievements database lives (defaults to ~/.nutrilog)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,

    /// JSON event log exported by the host app (defaults to <data_dir>/events.json)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_log: Option<PathBuf>,
}

impl Settings {
    pub fn data_dir(&self) -> PathBuf {
        self.data_dir
            .clone()
            .unwrap_or_else(Config::global_config_dir)
    }

    pub fn event_log_path(&self) -> PathBuf {
        self.event_log
            .clone()
            .unwrap_or_else(|| self.data_dir().join("events.json"))
    }

    pub fn database_path(&self) -> PathBuf {
        self.data_dir().join("achievements.db")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_paths_follow_data_dir() {
        let settings = Settings {
            data_dir: Some(PathBuf::from("/srv/nutrilog")),
            event_log: None,
        };
        assert_eq!(settings.database_path(), Path::new("/srv/nutrilog/achievements.db"));
        assert_eq!(settings.event_log_path(), Path::new("/srv/nutrilog/events.json"));
    }
}

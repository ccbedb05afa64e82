//! Catalog command implementation

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Result;

use nutrilog::domain::EventLog;
use nutrilog::stats::achievements::AchievementManager;
use nutrilog::stats::SqliteStore;

use super::{load_config, load_event_log};

/// List every achievement with lock state and progress
pub fn catalog_command(config_path: Option<&Path>, log_path: Option<PathBuf>) -> Result<()> {
    let config = load_config(config_path)?;
    // Progress needs the log; the catalog still prints without one
    let log = match load_event_log(&config, log_path) {
        Ok(log) => log,
        Err(e) => {
            tracing::debug!("no event log for progress: {:#}", e);
            EventLog::default()
        }
    };
    let store = Arc::new(SqliteStore::open(&config.settings.database_path())?);
    let manager = AchievementManager::new(store);

    let mut current_category = None;
    for status in manager.statuses(&log, &config.goals)? {
        let achievement = status.achievement;
        if current_category != Some(achievement.category) {
            println!("\n{}", achievement.category.label());
            current_category = Some(achievement.category);
        }

        let mark = if status.unlocked { "✓" } else { " " };
        let progress = match status.progress {
            Some((current, target)) if !status.unlocked => format!(" ({}/{})", current, target),
            _ => String::new(),
        };
        println!(
            "  [{}] {} {:<20} {:<6} {}{}",
            mark,
            achievement.icon,
            achievement.name,
            achievement.rarity.label(),
            achievement.description,
            progress
        );
    }

    Ok(())
}

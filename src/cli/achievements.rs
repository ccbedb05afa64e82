//! Achievements command implementation

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Result;

use nutrilog::stats::achievements::{Achievement, AchievementEvent, AchievementManager};
use nutrilog::stats::SqliteStore;

use super::{load_config, load_event_log};

/// Evaluate achievements and record new unlocks
pub fn achievements_command(
    config_path: Option<&Path>,
    log_path: Option<PathBuf>,
    dry_run: bool,
) -> Result<()> {
    let config = load_config(config_path)?;
    let log = load_event_log(&config, log_path)?;
    let store = Arc::new(SqliteStore::open(&config.settings.database_path())?);
    let manager = AchievementManager::new(store);

    let newly_unlocked: Vec<&'static Achievement> = if dry_run {
        manager.preview(&log, &config.goals)?
    } else {
        manager
            .check(&log, &config.goals)?
            .into_iter()
            .map(|event| match event {
                AchievementEvent::Unlocked(unlocked) => unlocked.achievement,
            })
            .collect()
    };

    if newly_unlocked.is_empty() {
        println!("No new achievements.");
    } else {
        let verb = if dry_run { "Would unlock" } else { "Unlocked" };
        println!("{} {} achievement(s):\n", verb, newly_unlocked.len());
        for achievement in &newly_unlocked {
            println!(
                "  {} {} [{}] - {}",
                achievement.icon,
                achievement.name,
                achievement.rarity.label(),
                achievement.description
            );
        }
        println!();
    }

    println!(
        "Progress: {}/{} unlocked",
        manager.unlocked_count()?,
        Achievement::total_count()
    );

    Ok(())
}

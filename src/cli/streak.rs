//! Streak command implementation

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::NaiveDate;

use nutrilog::stats::achievements::{streak_summary, today_local};

use super::{load_config, load_event_log};

/// Show current and best logging streak
pub fn streak_command(
    config_path: Option<&Path>,
    log_path: Option<PathBuf>,
    today: Option<String>,
) -> Result<()> {
    let config = load_config(config_path)?;
    let log = load_event_log(&config, log_path)?;

    let today = match today {
        Some(s) => NaiveDate::parse_from_str(&s, "%Y-%m-%d")
            .with_context(|| format!("Invalid --today date (expected YYYY-MM-DD): {}", s))?,
        None => today_local(),
    };

    let summary = streak_summary(&log.meals, today);

    if summary.is_active() {
        println!("🔥 Current streak: {} day(s)", summary.current);
    } else {
        println!("Current streak: 0 days");
    }
    println!("   Best streak:    {} day(s)", summary.best);
    match summary.last_log_day {
        Some(day) => println!("   Last logged:    {}", day),
        None => println!("   No meals logged yet."),
    }

    Ok(())
}

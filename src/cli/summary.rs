//! Summary command implementation

use std::path::{Path, PathBuf};

use anyhow::Result;

use nutrilog::domain::nutrients;
use nutrilog::stats::daily_summaries;

use super::{load_config, load_event_log};

/// Print per-day totals against goals, newest first
pub fn summary_command(
    config_path: Option<&Path>,
    log_path: Option<PathBuf>,
    days: usize,
) -> Result<()> {
    let config = load_config(config_path)?;
    let log = load_event_log(&config, log_path)?;
    let goals = &config.goals;

    let summaries = daily_summaries(&log, goals);
    if summaries.is_empty() {
        println!("Nothing logged yet.");
        return Ok(());
    }

    let calorie_goal = goals
        .calories()
        .map(|c| format!("{:.0}", c))
        .unwrap_or_else(|| "-".to_string());

    for summary in summaries.iter().take(days) {
        let status = match summary.calorie_goal_hit {
            Some(true) => "✓",
            Some(false) => "✗",
            None => " ",
        };
        println!(
            "{} {}  {:>5.0}/{} kcal  P {:>4.0}g  C {:>4.0}g  F {:>4.0}g",
            status,
            summary.day,
            summary.intake.calories(),
            calorie_goal,
            summary.intake.get(nutrients::PROTEIN),
            summary.intake.get(nutrients::CARBS),
            summary.intake.get(nutrients::FAT),
        );
        println!(
            "              💧 {:>5.0} ml  🏃 {:>3.0} min  ({} meal(s))",
            summary.water_ml, summary.exercise.minutes, summary.meal_count,
        );
    }

    Ok(())
}

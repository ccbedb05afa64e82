//! Achievements and streaks
//!
//! Pure evaluation lives in `checker` and `streaks`; `manager` adds storage.

mod checker;
mod definitions;
mod manager;
mod streaks;

pub use checker::{
    evaluate, is_satisfied, progress, within_tolerance, AchievementStats, GOAL_TOLERANCE,
    PROTEIN_POWERHOUSE_GRAMS,
};
pub use definitions::{Achievement, AchievementCategory, AchievementId, Rarity, ACHIEVEMENTS};
pub use manager::{AchievementEvent, AchievementManager, AchievementStatus, UnlockedAchievement};
pub use streaks::{
    current_streak, logged_days, longest_streak, streak_summary, today_local, StreakSummary,
};

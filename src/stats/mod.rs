//! Streak and achievement engine
//!
//! Derives daily totals, streaks and achievement unlocks from the host's
//! event log. Everything except the stores is pure and synchronous.
//!
//! # Architecture
//!
//! ```text
//!   EventLog ──▶ aggregator (per-day totals)
//!                    │
//!          ┌─────────┴─────────┐
//!          ▼                   ▼
//!      streaks            achievements::checker
//!                              │
//!                              ▼
//!                    AchievementManager ──▶ UserStore
//!                                        (SQLite / memory)
//! ```
//!
//! # Usage
//!
//! ```ignore
//! let store = Arc::new(SqliteStore::open(&config.settings.database_path())?);
//! let manager = AchievementManager::new(store);
//!
//! for event in manager.check(&log, &config.goals)? {
//!     notify(event);
//! }
//! ```

pub mod achievements;
mod aggregator;
mod db;
mod store;
mod time_bucket;

pub use aggregator::{
    aggregate_by_day, daily_summaries, exercise_by_day, water_by_day, DaySummary, ExerciseDay,
};
pub use db::SqliteStore;
pub use store::{MemoryStore, UserStore};
pub use time_bucket::{day_key, days_between, DayKey};

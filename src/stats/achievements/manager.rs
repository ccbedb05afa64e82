//! Achievement Manager - evaluation plus persistence
//!
//! Runs the pure evaluator against a [`UserStore`] and records whatever is
//! newly unlocked.

use std::sync::Arc;

use anyhow::Result;
use chrono::Utc;

use crate::domain::{DailyGoal, EventLog};
use crate::stats::store::UserStore;

use super::checker::{evaluate, progress, AchievementStats};
use super::definitions::{Achievement, AchievementId, ACHIEVEMENTS};

/// An achievement that was just unlocked
#[derive(Debug, Clone, PartialEq)]
pub struct UnlockedAchievement {
    pub achievement: &'static Achievement,
    pub unlocked_at: i64,
}

/// Events produced by an achievement check, ready for notifications
#[derive(Debug, Clone, PartialEq)]
pub enum AchievementEvent {
    Unlocked(UnlockedAchievement),
}

/// Lock state and progress of one catalog entry
#[derive(Debug, Clone, PartialEq)]
pub struct AchievementStatus {
    pub achievement: &'static Achievement,
    pub unlocked: bool,
    pub progress: Option<(u32, u32)>,
}

/// Main entry point for hosts that want evaluation and storage in one call
pub struct AchievementManager {
    store: Arc<dyn UserStore>,
}

impl AchievementManager {
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self { store }
    }

    /// Evaluate the log and persist anything newly unlocked.
    ///
    /// Returns one event per new unlock, in catalog order.
    pub fn check(&self, log: &EventLog, goal: &DailyGoal) -> Result<Vec<AchievementEvent>> {
        let newly_unlocked = self.preview(log, goal)?;
        if newly_unlocked.is_empty() {
            return Ok(Vec::new());
        }

        let now = Utc::now().timestamp_millis();
        let ids: Vec<AchievementId> = newly_unlocked.iter().map(|a| a.id).collect();
        self.store.record_unlocked(&ids, now)?;

        let events = newly_unlocked
            .into_iter()
            .map(|achievement| {
                tracing::info!(
                    id = %achievement.id,
                    name = achievement.name,
                    "achievement unlocked"
                );
                AchievementEvent::Unlocked(UnlockedAchievement {
                    achievement,
                    unlocked_at: now,
                })
            })
            .collect();
        Ok(events)
    }

    /// Evaluate without writing anything
    pub fn preview(&self, log: &EventLog, goal: &DailyGoal) -> Result<Vec<&'static Achievement>> {
        let unlocked = self.store.unlocked_ids()?;
        Ok(evaluate(&log.meals, &log.exercises, &log.water_logs, goal, &unlocked))
    }

    /// Every catalog entry with lock state and progress, in catalog order
    pub fn statuses(&self, log: &EventLog, goal: &DailyGoal) -> Result<Vec<AchievementStatus>> {
        let unlocked = self.store.unlocked_ids()?;
        let stats = AchievementStats::compute(&log.meals, &log.water_logs, goal);

        Ok(ACHIEVEMENTS
            .iter()
            .map(|achievement| AchievementStatus {
                achievement,
                unlocked: unlocked.contains(achievement.id.as_str()),
                progress: progress(achievement.id, &stats),
            })
            .collect())
    }

    /// Number of catalog entries already unlocked (unknown stored IDs ignored)
    pub fn unlocked_count(&self) -> Result<usize> {
        let unlocked = self.store.unlocked_ids()?;
        Ok(unlocked
            .iter()
            .filter(|id| AchievementId::from_str(id).is_some())
            .count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Meal, MealSource};
    use crate::stats::store::MemoryStore;

    fn photo_log() -> EventLog {
        EventLog {
            meals: vec![
                Meal::new("m1", "Poke bowl", "2026-10-17T12:00:00Z").with_source(MealSource::Photo),
            ],
            ..Default::default()
        }
    }

    #[test]
    fn test_check_persists_and_does_not_redeliver() {
        let store = Arc::new(MemoryStore::new());
        let manager = AchievementManager::new(store.clone());
        let goal = DailyGoal::default();

        let events = manager.check(&photo_log(), &goal).unwrap();
        assert_eq!(events.len(), 2);
        let AchievementEvent::Unlocked(first) = &events[0];
        assert_eq!(first.achievement.id, AchievementId::FirstLog);

        assert!(manager.check(&photo_log(), &goal).unwrap().is_empty());
        assert_eq!(manager.unlocked_count().unwrap(), 2);
        assert!(store.unlocked_at(AchievementId::Photogenic).unwrap().is_some());
    }

    #[test]
    fn test_preview_does_not_write() {
        let store = Arc::new(MemoryStore::new());
        let manager = AchievementManager::new(store.clone());

        let preview = manager.preview(&photo_log(), &DailyGoal::default()).unwrap();
        assert_eq!(preview.len(), 2);
        assert!(store.unlocked_ids().unwrap().is_empty());
    }

    #[test]
    fn test_statuses_cover_catalog() {
        let store = Arc::new(MemoryStore::with_unlocked(["first_log", "no_longer_exists"]));
        let manager = AchievementManager::new(store);

        let statuses = manager.statuses(&photo_log(), &DailyGoal::default()).unwrap();
        assert_eq!(statuses.len(), ACHIEVEMENTS.len());
        assert!(statuses[0].unlocked);
        assert!(!statuses[1].unlocked);
        assert_eq!(statuses[1].progress, Some((1, 5)));
        assert_eq!(manager.unlocked_count().unwrap(), 1);
    }
}

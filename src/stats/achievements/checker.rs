//! Achievement checking logic
//!
//! Statistics are derived from the event log once per call
//! ([`AchievementStats::compute`]); each catalog entry is then a plain
//! predicate over those numbers.

use std::collections::{HashMap, HashSet};

use crate::domain::{nutrients, DailyGoal, Exercise, Meal, MealSource, NutritionSample, WaterLog};
use crate::stats::aggregator::{aggregate_by_day, water_by_day};
use crate::stats::time_bucket::DayKey;

use super::definitions::{Achievement, AchievementId, ACHIEVEMENTS};
use super::streaks::{logged_days, longest_streak_from_days};

/// Relative deviation from a goal that still counts as hitting it
pub const GOAL_TOLERANCE: f64 = 0.10;

/// Fixed protein threshold for Protein Powerhouse, independent of goals
pub const PROTEIN_POWERHOUSE_GRAMS: f64 = 100.0;

// Keeps goal × 1.10 inside the band despite float rounding
const TOLERANCE_EPSILON: f64 = 1e-9;

/// Check whether `actual` lies within ±10% of `goal` (inclusive).
///
/// A goal of 0 is only hit by an actual of exactly 0.
pub fn within_tolerance(actual: f64, goal: f64) -> bool {
    if goal == 0.0 {
        return actual == 0.0;
    }
    ((actual - goal).abs() / goal.abs()) <= GOAL_TOLERANCE + TOLERANCE_EPSILON
}

/// Everything the rule table looks at, computed in one pass
#[derive(Debug, Clone, Default)]
pub struct AchievementStats {
    pub total_meals: u32,
    pub meals_by_day: HashMap<DayKey, NutritionSample>,
    pub sources_used: HashSet<MealSource>,
    pub unique_meal_name_count: u32,
    pub photo_log_count: u32,
    pub max_streak_ever: u32,
    pub calorie_goal_hit_count: u32,
    pub iron_goal_hit: bool,
    pub vitamin_c_goal_hit: bool,
    pub protein_powerhouse_day: bool,
    pub water_goal_hit: bool,
    pub macro_master_day: bool,
}

impl AchievementStats {
    pub fn compute(meals: &[Meal], water_logs: &[WaterLog], goal: &DailyGoal) -> Self {
        let meals_by_day = aggregate_by_day(meals);

        let sources_used: HashSet<MealSource> = meals.iter().map(|m| m.source).collect();
        let unique_meal_name_count = meals
            .iter()
            .map(|m| m.name.trim().to_lowercase())
            .collect::<HashSet<_>>()
            .len() as u32;
        let photo_log_count = meals.iter().filter(|m| m.source == MealSource::Photo).count() as u32;
        let max_streak_ever = longest_streak_from_days(&logged_days(meals));

        let calorie_goal = goal.calories();
        let iron_goal = goal.target(nutrients::IRON);
        let vitamin_c_goal = goal.target(nutrients::VITAMIN_C);
        let macro_goals = (
            goal.targets.get_opt(nutrients::PROTEIN),
            goal.targets.get_opt(nutrients::CARBS),
            goal.targets.get_opt(nutrients::FAT),
        );

        let mut calorie_goal_hit_count = 0;
        let mut iron_goal_hit = false;
        let mut vitamin_c_goal_hit = false;
        let mut protein_powerhouse_day = false;
        let mut macro_master_day = false;

        for totals in meals_by_day.values() {
            if calorie_goal.is_some_and(|target| within_tolerance(totals.calories(), target)) {
                calorie_goal_hit_count += 1;
            }
            if iron_goal.is_some_and(|target| totals.get(nutrients::IRON) >= target) {
                iron_goal_hit = true;
            }
            if vitamin_c_goal.is_some_and(|target| totals.get(nutrients::VITAMIN_C) >= target) {
                vitamin_c_goal_hit = true;
            }
            if totals.protein() >= PROTEIN_POWERHOUSE_GRAMS {
                protein_powerhouse_day = true;
            }
            if let (Some(protein), Some(carbs), Some(fat)) = macro_goals {
                if within_tolerance(totals.protein(), protein)
                    && within_tolerance(totals.carbs(), carbs)
                    && within_tolerance(totals.fat(), fat)
                {
                    macro_master_day = true;
                }
            }
        }

        let water_goal_hit = match goal.water() {
            Some(target) => water_by_day(water_logs).values().any(|ml| *ml >= target),
            None => false,
        };

        let stats = Self {
            total_meals: meals.len() as u32,
            meals_by_day,
            sources_used,
            unique_meal_name_count,
            photo_log_count,
            max_streak_ever,
            calorie_goal_hit_count,
            iron_goal_hit,
            vitamin_c_goal_hit,
            protein_powerhouse_day,
            water_goal_hit,
            macro_master_day,
        };
        tracing::debug!(
            total_meals = stats.total_meals,
            days = stats.meals_by_day.len(),
            max_streak = stats.max_streak_ever,
            calorie_goal_days = stats.calorie_goal_hit_count,
            "computed achievement stats"
        );
        stats
    }

    fn used(&self, source: MealSource) -> bool {
        self.sources_used.contains(&source)
    }
}

/// Unlock predicate for one catalog entry
pub fn is_satisfied(id: AchievementId, stats: &AchievementStats) -> bool {
    match id {
        AchievementId::FirstLog => stats.total_meals >= 1,
        AchievementId::CulinaryExplorer5 => stats.unique_meal_name_count >= 5,
        AchievementId::Photogenic => stats.used(MealSource::Photo),
        AchievementId::SharpShooter10 => stats.photo_log_count >= 10,
        AchievementId::GoodListener => stats.used(MealSource::Voice),
        AchievementId::Scanner => stats.used(MealSource::Barcode),
        AchievementId::Trifecta => {
            stats.used(MealSource::Photo)
                && stats.used(MealSource::Voice)
                && stats.used(MealSource::Barcode)
        }
        AchievementId::Streak3 => stats.max_streak_ever >= 3,
        AchievementId::Streak7 => stats.max_streak_ever >= 7,
        AchievementId::Streak30 => stats.max_streak_ever >= 30,
        AchievementId::HydrationHero1 => stats.water_goal_hit,
        AchievementId::GoalCrusher3 => stats.calorie_goal_hit_count >= 3,
        AchievementId::ProteinPowerhouse => stats.protein_powerhouse_day,
        AchievementId::IronClad => stats.iron_goal_hit,
        AchievementId::VitaminCVictor => stats.vitamin_c_goal_hit,
        AchievementId::MacroMaster => stats.macro_master_day,
    }
}

/// Progress toward a count-based achievement as `(current, target)`.
///
/// `current` is capped at `target`. Yes/no achievements return `None`.
pub fn progress(id: AchievementId, stats: &AchievementStats) -> Option<(u32, u32)> {
    let target = Achievement::get(id).target?;
    let current = match id {
        AchievementId::FirstLog => stats.total_meals,
        AchievementId::CulinaryExplorer5 => stats.unique_meal_name_count,
        AchievementId::SharpShooter10 => stats.photo_log_count,
        AchievementId::Streak3 | AchievementId::Streak7 | AchievementId::Streak30 => {
            stats.max_streak_ever
        }
        AchievementId::GoalCrusher3 => stats.calorie_goal_hit_count,
        _ => return None,
    };
    Some((current.min(target), target))
}

/// Return catalog entries that newly qualify, in catalog order.
///
/// Entries whose ID is already in `unlocked` are never returned. An empty
/// event log returns an empty list without computing anything.
pub fn evaluate(
    meals: &[Meal],
    exercises: &[Exercise],
    water_logs: &[WaterLog],
    goal: &DailyGoal,
    unlocked: &HashSet<String>,
) -> Vec<&'static Achievement> {
    if meals.is_empty() && exercises.is_empty() && water_logs.is_empty() {
        return Vec::new();
    }

    let stats = AchievementStats::compute(meals, water_logs, goal);
    ACHIEVEMENTS
        .iter()
        .filter(|a| !unlocked.contains(a.id.as_str()))
        .filter(|a| is_satisfied(a.id, &stats))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(achievements: &[&'static Achievement]) -> Vec<&'static str> {
        achievements.iter().map(|a| a.id.as_str()).collect()
    }

    fn meal(id: &str, name: &str, ts: &str, source: MealSource) -> Meal {
        Meal::new(id, name, ts).with_source(source)
    }

    #[test]
    fn test_within_tolerance_boundaries() {
        assert!(within_tolerance(2000.0, 2000.0));
        assert!(within_tolerance(2000.0 * 1.10, 2000.0));
        assert!(within_tolerance(2000.0 * 0.90, 2000.0));
        assert!(!within_tolerance(2000.0 * 1.11, 2000.0));
        assert!(!within_tolerance(2000.0 * 0.89, 2000.0));
        assert!(within_tolerance(0.0, 0.0));
        assert!(!within_tolerance(0.1, 0.0));
    }

    #[test]
    fn test_empty_log_short_circuits() {
        let result = evaluate(&[], &[], &[], &DailyGoal::standard(), &HashSet::new());
        assert!(result.is_empty());
    }

    #[test]
    fn test_single_photo_meal() {
        let meals = vec![meal("m1", "Salad", "2026-10-17T12:00:00Z", MealSource::Photo)];
        let result = evaluate(&meals, &[], &[], &DailyGoal::default(), &HashSet::new());
        assert_eq!(ids(&result), vec!["first_log", "photogenic"]);
    }

    #[test]
    fn test_unique_names_are_trimmed_and_case_insensitive() {
        let meals = vec![
            meal("1", "Pasta", "2026-10-17T12:00:00Z", MealSource::Manual),
            meal("2", " pasta ", "2026-10-17T13:00:00Z", MealSource::Manual),
            meal("3", "PASTA", "2026-10-17T14:00:00Z", MealSource::Manual),
            meal("4", "Soup", "2026-10-17T15:00:00Z", MealSource::Manual),
        ];
        let stats = AchievementStats::compute(&meals, &[], &DailyGoal::default());
        assert_eq!(stats.unique_meal_name_count, 2);
    }

    #[test]
    fn test_trifecta_needs_all_three_sources() {
        let mut meals = vec![
            meal("1", "A", "2026-10-17T08:00:00Z", MealSource::Photo),
            meal("2", "B", "2026-10-17T09:00:00Z", MealSource::Voice),
        ];
        let result = evaluate(&meals, &[], &[], &DailyGoal::default(), &HashSet::new());
        assert!(!ids(&result).contains(&"trifecta"));

        meals.push(meal("3", "C", "2026-10-17T10:00:00Z", MealSource::Barcode));
        let result = evaluate(&meals, &[], &[], &DailyGoal::default(), &HashSet::new());
        assert_eq!(
            ids(&result),
            vec!["first_log", "photogenic", "good_listener", "scanner", "trifecta"]
        );
    }

    #[test]
    fn test_missing_goals_never_unlock() {
        let meals = vec![Meal::new("1", "Liver", "2026-10-17T12:00:00Z").with_nutrition(
            NutritionSample::new()
                .with(nutrients::IRON, 40.0)
                .with(nutrients::VITAMIN_C, 500.0),
        )];
        let water = vec![WaterLog::new("w", 5000.0, "2026-10-17T09:00:00Z")];
        let stats = AchievementStats::compute(&meals, &water, &DailyGoal::default());

        assert!(!stats.iron_goal_hit);
        assert!(!stats.vitamin_c_goal_hit);
        assert!(!stats.water_goal_hit);
        assert!(!stats.macro_master_day);
        assert_eq!(stats.calorie_goal_hit_count, 0);
    }

    #[test]
    fn test_macro_master_needs_all_three_on_one_day() {
        let goal = DailyGoal {
            targets: NutritionSample::new()
                .with(nutrients::PROTEIN, 150.0)
                .with(nutrients::CARBS, 200.0)
                .with(nutrients::FAT, 60.0),
            water_goal: None,
        };
        let near_miss = vec![Meal::new("1", "Bowl", "2026-10-16T12:00:00Z").with_nutrition(
            NutritionSample::new()
                .with(nutrients::PROTEIN, 150.0)
                .with(nutrients::CARBS, 200.0)
                .with(nutrients::FAT, 80.0),
        )];
        assert!(!AchievementStats::compute(&near_miss, &[], &goal).macro_master_day);

        let hit = vec![Meal::new("2", "Bowl", "2026-10-17T12:00:00Z").with_nutrition(
            NutritionSample::new()
                .with(nutrients::PROTEIN, 140.0)
                .with(nutrients::CARBS, 215.0)
                .with(nutrients::FAT, 63.0),
        )];
        assert!(AchievementStats::compute(&hit, &[], &goal).macro_master_day);
    }

    #[test]
    fn test_water_only_log_can_unlock_hydration() {
        let goal = DailyGoal {
            targets: NutritionSample::new(),
            water_goal: Some(2000.0),
        };
        let water = vec![
            WaterLog::new("w1", 1200.0, "2026-10-17T09:00:00Z"),
            WaterLog::new("w2", 800.0, "2026-10-17T15:00:00Z"),
        ];
        let result = evaluate(&[], &[], &water, &goal, &HashSet::new());
        assert_eq!(ids(&result), vec!["hydration_hero_1"]);
    }

    #[test]
    fn test_progress_caps_at_target() {
        let meals: Vec<Meal> = (0..12)
            .map(|i| {
                let id = i.to_string();
                meal(&id, &format!("Dish {i}"), "2026-10-17T12:00:00Z", MealSource::Photo)
            })
            .collect();
        let stats = AchievementStats::compute(&meals, &[], &DailyGoal::default());

        assert_eq!(progress(AchievementId::SharpShooter10, &stats), Some((10, 10)));
        assert_eq!(progress(AchievementId::Streak7, &stats), Some((1, 7)));
        assert_eq!(progress(AchievementId::Photogenic, &stats), None);
    }
}

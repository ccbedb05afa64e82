//! Per-day aggregation of meals, water and exercise
//!
//! Every function here skips records whose timestamp has no valid day key
//! instead of failing the whole aggregation.

use std::collections::HashMap;

use crate::domain::{DailyGoal, EventLog, Exercise, Meal, NutritionSample, WaterLog};

use super::achievements::within_tolerance;
use super::time_bucket::{day_key, DayKey};

/// Exercise totals for one day
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExerciseDay {
    pub minutes: f64,
    pub calories_burned: f64,
    pub sessions: u32,
}

/// Everything logged on one day, for display
#[derive(Debug, Clone, PartialEq)]
pub struct DaySummary {
    pub day: DayKey,
    pub intake: NutritionSample,
    pub meal_count: u32,
    pub water_ml: f64,
    pub exercise: ExerciseDay,
    /// `None` when no calorie goal is configured
    pub calorie_goal_hit: Option<bool>,
}

impl DaySummary {
    pub fn net_calories(&self) -> f64 {
        self.intake.calories() - self.exercise.calories_burned
    }
}

/// Sum meal nutrition per calendar day
pub fn aggregate_by_day(meals: &[Meal]) -> HashMap<DayKey, NutritionSample> {
    let mut by_day: HashMap<DayKey, NutritionSample> = HashMap::new();
    for meal in meals {
        let Some(day) = day_key(&meal.timestamp) else {
            tracing::debug!(
                meal_id = %meal.id,
                timestamp = %meal.timestamp,
                "skipping meal with malformed timestamp"
            );
            continue;
        };
        *by_day.entry(day).or_default() += &meal.nutrition;
    }
    by_day
}

/// Total water in milliliters per calendar day
pub fn water_by_day(water_logs: &[WaterLog]) -> HashMap<DayKey, f64> {
    let mut by_day: HashMap<DayKey, f64> = HashMap::new();
    for log in water_logs {
        let Some(day) = day_key(&log.timestamp) else {
            tracing::debug!(
                water_id = %log.id,
                timestamp = %log.timestamp,
                "skipping water log with malformed timestamp"
            );
            continue;
        };
        let amount = if log.amount.is_finite() { log.amount.max(0.0) } else { 0.0 };
        *by_day.entry(day).or_insert(0.0) += amount;
    }
    by_day
}

/// Exercise minutes, calories and session count per calendar day
pub fn exercise_by_day(exercises: &[Exercise]) -> HashMap<DayKey, ExerciseDay> {
    let mut by_day: HashMap<DayKey, ExerciseDay> = HashMap::new();
    for exercise in exercises {
        let Some(day) = day_key(&exercise.timestamp) else {
            tracing::debug!(
                exercise_id = %exercise.id,
                timestamp = %exercise.timestamp,
                "skipping exercise with malformed timestamp"
            );
            continue;
        };
        let entry = by_day.entry(day).or_default();
        entry.minutes += exercise.duration.max(0.0);
        entry.calories_burned += exercise.calories_burned.max(0.0);
        entry.sessions += 1;
    }
    by_day
}

/// Combine all three aggregations into one row per day, newest first
pub fn daily_summaries(log: &EventLog, goal: &DailyGoal) -> Vec<DaySummary> {
    let intake = aggregate_by_day(&log.meals);
    let water = water_by_day(&log.water_logs);
    let exercise = exercise_by_day(&log.exercises);

    let mut meal_counts: HashMap<DayKey, u32> = HashMap::new();
    for meal in &log.meals {
        if let Some(day) = day_key(&meal.timestamp) {
            *meal_counts.entry(day).or_insert(0) += 1;
        }
    }

    let mut days: Vec<DayKey> = intake
        .keys()
        .chain(water.keys())
        .chain(exercise.keys())
        .copied()
        .collect();
    days.sort_unstable_by(|a, b| b.cmp(a));
    days.dedup();

    days.into_iter()
        .map(|day| {
            let intake = intake.get(&day).cloned().unwrap_or_default();
            let calorie_goal_hit = goal
                .calories()
                .map(|target| within_tolerance(intake.calories(), target));
            DaySummary {
                day,
                meal_count: meal_counts.get(&day).copied().unwrap_or(0),
                water_ml: water.get(&day).copied().unwrap_or(0.0),
                exercise: exercise.get(&day).cloned().unwrap_or_default(),
                calorie_goal_hit,
                intake,
            }
        })
        .collect()
}

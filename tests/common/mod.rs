//! Shared fixtures for engine integration tests

#![allow(dead_code)]

use chrono::{Duration, NaiveDate};

use nutrilog::{nutrients, DailyGoal, Meal, MealSource, NutritionSample};

pub const TODAY: &str = "2026-10-17";

pub fn today() -> NaiveDate {
    NaiveDate::parse_from_str(TODAY, "%Y-%m-%d").expect("valid fixture date")
}

/// "YYYY-MM-DD" for `days_ago` days before [`TODAY`]
pub fn day(days_ago: i64) -> String {
    (today() - Duration::days(days_ago)).format("%Y-%m-%d").to_string()
}

/// A meal at noon on the given day
pub fn meal_on(date: &str, name: &str, source: MealSource) -> Meal {
    Meal::new(format!("{date}-{name}"), name, format!("{date}T12:00:00.000Z")).with_source(source)
}

pub fn with_calories(meal: Meal, calories: f64) -> Meal {
    meal.with_nutrition(NutritionSample::new().with(nutrients::CALORIES, calories))
}

pub fn calorie_goal(calories: f64) -> DailyGoal {
    DailyGoal {
        targets: NutritionSample::new().with(nutrients::CALORIES, calories),
        water_goal: None,
    }
}

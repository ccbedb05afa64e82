//! Core domain types for nutrilog

mod activity;
mod event_log;
mod goal;
mod meal;
mod nutrition;

pub use activity::{Exercise, WaterLog};
pub use event_log::EventLog;
pub use goal::DailyGoal;
pub use meal::{FoodItem, Meal, MealSource, MealType};
pub use nutrition::{nutrients, NutritionSample};

//! Logged meals and their tags

use serde::{Deserialize, Serialize};

use super::nutrition::NutritionSample;

/// How a meal was logged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealSource {
    Photo,
    Manual,
    Voice,
    Barcode,
}

impl MealSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Photo => "photo",
            Self::Manual => "manual",
            Self::Voice => "voice",
            Self::Barcode => "barcode",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "photo" => Some(Self::Photo),
            "manual" => Some(Self::Manual),
            "voice" => Some(Self::Voice),
            "barcode" => Some(Self::Barcode),
            _ => None,
        }
    }
}

impl std::fmt::Display for MealSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Slot of the day a meal belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

/// A single named food inside a meal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodItem {
    pub name: String,
    #[serde(flatten)]
    pub nutrition: NutritionSample,
}

/// One logged eating event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meal {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub nutrition: NutritionSample,
    #[serde(default)]
    pub items: Vec<FoodItem>,
    /// ISO-8601 date-time as stored by the host, kept verbatim
    pub timestamp: String,
    /// Clock time shown in the diary (e.g. "08:30")
    #[serde(default)]
    pub time: String,
    pub source: MealSource,
    pub meal_type: MealType,
}

impl Meal {
    /// Minimal meal for fixtures; nutrition and items start empty
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        timestamp: impl Into<String>,
    ) -> Self {
        let timestamp = timestamp.into();
        let time = timestamp.get(11..16).unwrap_or_default().to_string();
        Self {
            id: id.into(),
            name: name.into(),
            nutrition: NutritionSample::default(),
            items: Vec::new(),
            timestamp,
            time,
            source: MealSource::Manual,
            meal_type: MealType::Snack,
        }
    }

    pub fn with_source(mut self, source: MealSource) -> Self {
        self.source = source;
        self
    }

    pub fn with_nutrition(mut self, nutrition: NutritionSample) -> Self {
        self.nutrition = nutrition;
        self
    }
}

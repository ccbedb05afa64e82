//! Sparse nutrient samples
//!
//! A [`NutritionSample`] maps nutrient names to amounts. Meal analysis produces
//! one per meal and per food item; daily totals are built by summing them.

use std::collections::BTreeMap;
use std::ops::AddAssign;

use serde::{Deserialize, Deserializer, Serialize};

/// Well-known nutrient names as they appear in stored meals and goals
pub mod nutrients {
    pub const CALORIES: &str = "calories";
    pub const PROTEIN: &str = "protein";
    pub const CARBS: &str = "carbs";
    pub const FAT: &str = "fat";
    pub const FIBER: &str = "fiber";
    pub const SUGAR: &str = "sugar";
    pub const SODIUM: &str = "sodium";
    pub const IRON: &str = "iron";
    pub const VITAMIN_C: &str = "vitaminC";
    pub const CALCIUM: &str = "calcium";
    pub const POTASSIUM: &str = "potassium";
}

/// Mapping from nutrient name to a non-negative amount.
///
/// Absent nutrients read as `0.0`. Values that are not usable numbers
/// (strings, booleans, negatives, NaN) are stored as `0.0` when deserialized
/// so one bad field never rejects a whole meal.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct NutritionSample {
    amounts: BTreeMap<String, f64>,
}

impl NutritionSample {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter, mostly used by tests and fixtures
    pub fn with(mut self, nutrient: &str, amount: f64) -> Self {
        self.set(nutrient, amount);
        self
    }

    /// Set a nutrient amount (clamped to a finite, non-negative value)
    pub fn set(&mut self, nutrient: &str, amount: f64) {
        self.amounts.insert(nutrient.to_string(), sanitize(amount));
    }

    /// Amount for a nutrient, `0.0` when absent
    pub fn get(&self, nutrient: &str) -> f64 {
        self.amounts.get(nutrient).copied().unwrap_or(0.0)
    }

    /// Amount for a nutrient, `None` when the field was never set
    pub fn get_opt(&self, nutrient: &str) -> Option<f64> {
        self.amounts.get(nutrient).copied()
    }

    pub fn contains(&self, nutrient: &str) -> bool {
        self.amounts.contains_key(nutrient)
    }

    pub fn is_empty(&self) -> bool {
        self.amounts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.amounts.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn calories(&self) -> f64 {
        self.get(nutrients::CALORIES)
    }

    pub fn protein(&self) -> f64 {
        self.get(nutrients::PROTEIN)
    }

    pub fn carbs(&self) -> f64 {
        self.get(nutrients::CARBS)
    }

    pub fn fat(&self) -> f64 {
        self.get(nutrients::FAT)
    }
}

impl AddAssign<&NutritionSample> for NutritionSample {
    fn add_assign(&mut self, rhs: &NutritionSample) {
        for (name, amount) in &rhs.amounts {
            *self.amounts.entry(name.clone()).or_insert(0.0) += amount;
        }
    }
}

impl<'de> Deserialize<'de> for NutritionSample {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = BTreeMap::<String, serde_json::Value>::deserialize(deserializer)?;
        let amounts = raw
            .into_iter()
            .map(|(name, value)| {
                let amount = value.as_f64().map(sanitize).unwrap_or(0.0);
                (name, amount)
            })
            .collect();
        Ok(Self { amounts })
    }
}

fn sanitize(amount: f64) -> f64 {
    if amount.is_finite() && amount > 0.0 {
        amount
    } else {
        0.0
    }
}

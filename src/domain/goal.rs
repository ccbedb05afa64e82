//! Daily nutrition targets

use serde::{Deserialize, Serialize};

use super::nutrition::{nutrients, NutritionSample};

/// Per-day targets supplied by the host.
///
/// Nutrient targets share the [`NutritionSample`] shape; hydration has its
/// own field. A target that is absent (or not positive) means "no goal" and
/// never unlocks anything.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DailyGoal {
    #[serde(flatten)]
    pub targets: NutritionSample,

    /// Milliliters of water per day
    #[serde(rename = "waterGoal", default, skip_serializing_if = "Option::is_none")]
    pub water_goal: Option<f64>,
}

impl DailyGoal {
    /// Target for a nutrient, `None` when unset or not positive
    pub fn target(&self, nutrient: &str) -> Option<f64> {
        self.targets.get_opt(nutrient).filter(|v| *v > 0.0)
    }

    /// Raw calorie target; `Some(0.0)` is a real (if odd) goal
    pub fn calories(&self) -> Option<f64> {
        self.targets.get_opt(nutrients::CALORIES)
    }

    pub fn water(&self) -> Option<f64> {
        self.water_goal.filter(|v| v.is_finite() && *v > 0.0)
    }

    /// Goals used when no config exists yet
    pub fn standard() -> Self {
        Self {
            targets: NutritionSample::new()
                .with(nutrients::CALORIES, 2000.0)
                .with(nutrients::PROTEIN, 150.0)
                .with(nutrients::CARBS, 200.0)
                .with(nutrients::FAT, 65.0)
                .with(nutrients::FIBER, 30.0)
                .with(nutrients::IRON, 18.0)
                .with(nutrients::VITAMIN_C, 90.0),
            water_goal: Some(2500.0),
        }
    }
}

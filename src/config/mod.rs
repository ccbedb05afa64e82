//! Configuration loading and management

mod io;
mod settings;

pub use settings::Settings;

use serde::{Deserialize, Serialize};

use crate::domain::DailyGoal;

/// Error type for config validation
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Water goal must be a positive number of milliliters, got {0}")]
    InvalidWaterGoal(f64),
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Daily nutrition and hydration targets
    #[serde(default)]
    pub goals: DailyGoal,

    /// General settings
    #[serde(default)]
    pub settings: Settings,
}

impl Config {
    /// Create a config with sensible defaults
    pub fn with_defaults() -> Self {
        Self {
            goals: DailyGoal::standard(),
            settings: Settings::default(),
        }
    }

    /// Reject goals that can never be meaningfully hit.
    ///
    /// Nutrient targets are already clamped to non-negative values on load.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(water) = self.goals.water_goal {
            if !water.is_finite() || water <= 0.0 {
                return Err(ConfigError::InvalidWaterGoal(water));
            }
        }
        Ok(())
    }
}

//! Exercise and hydration entries

use serde::{Deserialize, Serialize};

/// One logged activity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    pub id: String,
    pub name: String,
    /// Minutes
    pub duration: f64,
    pub calories_burned: f64,
    pub timestamp: String,
}

impl Exercise {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        duration: f64,
        calories_burned: f64,
        timestamp: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            duration,
            calories_burned,
            timestamp: timestamp.into(),
        }
    }
}

/// One hydration entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaterLog {
    pub id: String,
    /// Milliliters
    pub amount: f64,
    pub timestamp: String,
}

impl WaterLog {
    pub fn new(id: impl Into<String>, amount: f64, timestamp: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            amount,
            timestamp: timestamp.into(),
        }
    }
}

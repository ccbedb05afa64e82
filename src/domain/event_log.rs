//! The host's event log as handed to the engine

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use super::activity::{Exercise, WaterLog};
use super::meal::Meal;

/// All dated records for one user
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventLog {
    #[serde(default)]
    pub meals: Vec<Meal>,
    #[serde(default)]
    pub exercises: Vec<Exercise>,
    #[serde(default)]
    pub water_logs: Vec<WaterLog>,
}

impl EventLog {
    /// Load an event log from a JSON file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read event log: {}", path.display()))?;
        Self::from_json_str(&content)
            .with_context(|| format!("Failed to parse event log: {}", path.display()))
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        let log: EventLog = serde_json::from_str(content)?;
        tracing::debug!(
            meals = log.meals.len(),
            exercises = log.exercises.len(),
            water_logs = log.water_logs.len(),
            "loaded event log"
        );
        Ok(log)
    }

    pub fn is_empty(&self) -> bool {
        self.meals.is_empty() && self.exercises.is_empty() && self.water_logs.is_empty()
    }
}

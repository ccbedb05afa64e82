//! Persistence of unlocked achievements
//!
//! The engine never writes; callers merge the evaluated delta into a
//! [`UserStore`].

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use anyhow::{anyhow, Result};

use super::achievements::AchievementId;

/// Storage for the set of achievement IDs a user has been granted
pub trait UserStore: Send + Sync {
    /// All stored IDs, including ones the current catalog no longer knows
    fn unlocked_ids(&self) -> Result<HashSet<String>>;

    /// Record achievements as unlocked. Already stored IDs keep their
    /// original timestamp.
    fn record_unlocked(&self, ids: &[AchievementId], unlocked_at_ms: i64) -> Result<()>;

    /// When an achievement was unlocked (ms since epoch)
    fn unlocked_at(&self, id: AchievementId) -> Result<Option<i64>>;

    /// Forget every unlocked achievement
    fn reset(&self) -> Result<()>;
}

/// In-process store, used by tests and embedders that persist elsewhere
#[derive(Clone, Default)]
pub struct MemoryStore {
    unlocked: Arc<Mutex<HashMap<String, i64>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with IDs (e.g. loaded from the host's own storage)
    pub fn with_unlocked<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let unlocked = ids.into_iter().map(|id| (id.into(), 0)).collect();
        Self {
            unlocked: Arc::new(Mutex::new(unlocked)),
        }
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, i64>>> {
        self.unlocked
            .lock()
            .map_err(|_| anyhow!("Memory store lock poisoned"))
    }
}

impl UserStore for MemoryStore {
    fn unlocked_ids(&self) -> Result<HashSet<String>> {
        Ok(self.lock()?.keys().cloned().collect())
    }

    fn record_unlocked(&self, ids: &[AchievementId], unlocked_at_ms: i64) -> Result<()> {
        let mut unlocked = self.lock()?;
        for id in ids {
            unlocked.entry(id.as_str().to_string()).or_insert(unlocked_at_ms);
        }
        Ok(())
    }

    fn unlocked_at(&self, id: AchievementId) -> Result<Option<i64>> {
        Ok(self.lock()?.get(id.as_str()).copied())
    }

    fn reset(&self) -> Result<()> {
        self.lock()?.clear();
        Ok(())
    }
}

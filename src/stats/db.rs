//! SQLite-backed achievement store
//!
//! Keeps the unlocked set in `<data_dir>/achievements.db` (see
//! [`Settings::database_path`](crate::config::Settings::database_path)) with
//! automatic schema migration.

use std::collections::HashSet;
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard};

use anyhow::{anyhow, Context, Result};
use rusqlite::{Connection, OptionalExtension};

use super::achievements::AchievementId;
use super::store::UserStore;

/// Database wrapper sharing one connection between clones
#[derive(Clone)]
pub struct SqliteStore {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteStore {
    /// Open or create the database at a specific path
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create data dir: {}", parent.display()))?;
        }

        let conn = Connection::open(path)
            .with_context(|| format!("Failed to open achievements db: {}", path.display()))?;

        conn.pragma_update(None, "journal_mode", "WAL")?;
        conn.pragma_update(None, "synchronous", "NORMAL")?;

        let store = Self {
            conn: Arc::new(Mutex::new(conn)),
        };
        store.init_schema()?;
        Ok(store)
    }

    /// Open a throwaway in-memory database
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let store = Self {
            conn: Arc::new(Mutex::new(conn)),
        };
        store.init_schema()?;
        Ok(store)
    }

    fn conn(&self) -> Result<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|_| anyhow!("Achievements DB lock poisoned"))
    }

    fn init_schema(&self) -> Result<()> {
        let conn = self.conn()?;
        conn.execute_batch(SCHEMA_SQL)?;
        drop(conn);
        self.run_migrations()
    }

    /// Run any pending migrations
    fn run_migrations(&self) -> Result<()> {
        let conn = self.conn()?;

        let version: i32 = conn
            .query_row("SELECT COALESCE(MAX(version), 0) FROM schema_version", [], |r| r.get(0))
            .unwrap_or(0);

        // Migration 1: unlocked achievements
        if version < 1 {
            conn.execute_batch(
                r#"
                CREATE TABLE IF NOT EXISTS achievements (
                    id TEXT PRIMARY KEY,
                    unlocked_at INTEGER NOT NULL
                );
                "#,
            )?;
            conn.execute("INSERT OR REPLACE INTO schema_version VALUES (1)", [])?;
            tracing::debug!("achievements db migrated to version 1");
        }

        Ok(())
    }

    /// Count unlocked catalog entries; rows left by removed achievements are skipped
    pub fn unlocked_count(&self) -> Result<usize> {
        let ids = self.unlocked_ids()?;
        Ok(ids
            .iter()
            .filter(|id| AchievementId::from_str(id).is_some())
            .count())
    }
}

impl UserStore for SqliteStore {
    fn unlocked_ids(&self) -> Result<HashSet<String>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare("SELECT id FROM achievements")?;
        let ids: HashSet<String> = stmt
            .query_map([], |row| row.get(0))?
            .collect::<rusqlite::Result<_>>()?;

        for id in &ids {
            if AchievementId::from_str(id).is_none() {
                tracing::debug!(id = %id, "stored achievement not in catalog");
            }
        }
        Ok(ids)
    }

    fn record_unlocked(&self, ids: &[AchievementId], unlocked_at_ms: i64) -> Result<()> {
        let mut conn = self.conn()?;
        let tx = conn.transaction()?;
        for id in ids {
            tx.execute(
                "INSERT OR IGNORE INTO achievements (id, unlocked_at) VALUES (?1, ?2)",
                (id.as_str(), unlocked_at_ms),
            )?;
        }
        tx.commit()?;
        Ok(())
    }

    fn unlocked_at(&self, id: AchievementId) -> Result<Option<i64>> {
        let conn = self.conn()?;
        let at = conn
            .query_row(
                "SELECT unlocked_at FROM achievements WHERE id = ?1",
                [id.as_str()],
                |r| r.get(0),
            )
            .optional()?;
        Ok(at)
    }

    fn reset(&self) -> Result<()> {
        let conn = self.conn()?;
        conn.execute("DELETE FROM achievements", [])?;
        Ok(())
    }
}

const SCHEMA_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS schema_version (
    version INTEGER PRIMARY KEY
);
"#;

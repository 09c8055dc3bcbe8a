//! SQLite-backed key-value persistence.
//!
//! The progress record is a single JSON document under a fixed key,
//! written back whole after every mutation. The transient day view
//! lives under its own key so sub-task flags never leak into the
//! persisted aggregate. A missing or unparseable document falls back
//! to defaults instead of failing the session.

use std::path::Path;

use rusqlite::{params, Connection};

use crate::error::{DatabaseError, Result};
use crate::progress::{DayView, UserProgress};

use super::data_dir;

const PROGRESS_KEY: &str = "user_progress";
const DAY_VIEW_KEY: &str = "day_view";

/// SQLite database holding the kv store.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open the database at `~/.config/openpath/openpath.db`.
    ///
    /// Creates the database file and schema if they don't exist.
    ///
    /// # Errors
    /// Returns an error if the database cannot be opened or migrated.
    pub fn open() -> Result<Self> {
        let path = data_dir()?.join("openpath.db");
        Self::open_at(&path)
    }

    /// Open a database at an explicit path.
    pub fn open_at(path: &Path) -> Result<Self> {
        let conn = Connection::open(path).map_err(|source| DatabaseError::OpenFailed {
            path: path.to_path_buf(),
            source,
        })?;
        let db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    /// Open an in-memory database (for tests).
    pub fn open_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().map_err(DatabaseError::from)?;
        let db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    fn migrate(&self) -> Result<(), DatabaseError> {
        self.conn
            .execute_batch(
                "CREATE TABLE IF NOT EXISTS kv (
                    key   TEXT PRIMARY KEY,
                    value TEXT NOT NULL
                );",
            )
            .map_err(DatabaseError::from)?;
        Ok(())
    }

    /// Get a value from the kv store.
    pub fn kv_get(&self, key: &str) -> Result<Option<String>, DatabaseError> {
        let mut stmt = self.conn.prepare("SELECT value FROM kv WHERE key = ?1")?;
        let result = stmt.query_row(params![key], |row| row.get::<_, String>(0));
        match result {
            Ok(v) => Ok(Some(v)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Set a value in the kv store.
    pub fn kv_set(&self, key: &str, value: &str) -> Result<(), DatabaseError> {
        self.conn.execute(
            "INSERT OR REPLACE INTO kv (key, value) VALUES (?1, ?2)",
            params![key, value],
        )?;
        Ok(())
    }

    /// Remove a key from the kv store.
    pub fn kv_delete(&self, key: &str) -> Result<(), DatabaseError> {
        self.conn
            .execute("DELETE FROM kv WHERE key = ?1", params![key])?;
        Ok(())
    }

    /// Load the progress record, substituting defaults when the
    /// document is missing or malformed.
    pub fn load_progress(&self) -> Result<UserProgress, DatabaseError> {
        match self.kv_get(PROGRESS_KEY)? {
            Some(json) => Ok(serde_json::from_str(&json).unwrap_or_default()),
            None => Ok(UserProgress::default()),
        }
    }

    /// Write the whole progress record back.
    pub fn save_progress(&self, progress: &UserProgress) -> Result<()> {
        let json = serde_json::to_string(progress)?;
        self.kv_set(PROGRESS_KEY, &json)?;
        Ok(())
    }

    /// Load the transient day view a previous invocation left behind.
    pub fn load_day_view(&self) -> Result<Option<DayView>, DatabaseError> {
        match self.kv_get(DAY_VIEW_KEY)? {
            Some(json) => Ok(serde_json::from_str(&json).ok()),
            None => Ok(None),
        }
    }

    pub fn save_day_view(&self, view: Option<&DayView>) -> Result<()> {
        match view {
            Some(v) => {
                let json = serde_json::to_string(v)?;
                self.kv_set(DAY_VIEW_KEY, &json)?;
            }
            None => self.kv_delete(DAY_VIEW_KEY)?,
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::TaskKey;

    #[test]
    fn kv_store() {
        let db = Database::open_memory().unwrap();
        assert!(db.kv_get("test").unwrap().is_none());
        db.kv_set("test", "hello").unwrap();
        assert_eq!(db.kv_get("test").unwrap().unwrap(), "hello");
        db.kv_delete("test").unwrap();
        assert!(db.kv_get("test").unwrap().is_none());
    }

    #[test]
    fn missing_progress_defaults() {
        let db = Database::open_memory().unwrap();
        let progress = db.load_progress().unwrap();
        assert_eq!(progress, UserProgress::default());
    }

    #[test]
    fn malformed_progress_defaults_instead_of_failing() {
        let db = Database::open_memory().unwrap();
        db.kv_set(PROGRESS_KEY, "{not json").unwrap();
        assert_eq!(db.load_progress().unwrap(), UserProgress::default());
        db.kv_set(PROGRESS_KEY, r#"{"completedDays": ["garbage"]}"#)
            .unwrap();
        assert_eq!(db.load_progress().unwrap(), UserProgress::default());
    }

    #[test]
    fn progress_roundtrip() {
        let db = Database::open_memory().unwrap();
        let mut progress = UserProgress::default();
        progress.selected_path_id = Some("p1".into());
        progress.completed_days.push(TaskKey::new("p1", 1));
        progress.current_streak = 1;
        progress.longest_streak = 1;
        db.save_progress(&progress).unwrap();
        assert_eq!(db.load_progress().unwrap(), progress);
    }

    #[test]
    fn day_view_roundtrip_and_clear() {
        let db = Database::open_memory().unwrap();
        assert!(db.load_day_view().unwrap().is_none());

        let view = DayView::for_day(TaskKey::new("p1", 2), false);
        db.save_day_view(Some(&view)).unwrap();
        assert_eq!(db.load_day_view().unwrap().unwrap(), view);

        db.save_day_view(None).unwrap();
        assert!(db.load_day_view().unwrap().is_none());
    }
}

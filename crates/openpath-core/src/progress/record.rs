//! The persisted progress record.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::task::TaskKey;

/// The persisted aggregate: identity plus everything earned so far.
///
/// Serialized as a single JSON document under a fixed key in the kv
/// store. Field names mirror the document shape the web client used,
/// so an exported record stays readable. Every field defaults so a
/// partial or first-run document loads cleanly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserProgress {
    pub name: String,
    pub email: String,
    pub is_authenticated: bool,

    /// None means no path chosen yet.
    pub selected_path_id: Option<String>,
    /// Duplicate-free, scoped per path via the structured key.
    pub completed_days: Vec<TaskKey>,
    pub current_streak: u32,
    pub longest_streak: u32,
    /// Calendar date of the most recent completion, if any.
    pub last_active_date: Option<NaiveDate>,
    /// When the current path was selected.
    pub start_date: Option<DateTime<Utc>>,
    /// Last-viewed day, used to resume navigation. Not a gating signal.
    pub current_day: u32,
}

impl Default for UserProgress {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            is_authenticated: false,
            selected_path_id: None,
            completed_days: Vec::new(),
            current_streak: 0,
            longest_streak: 0,
            last_active_date: None,
            start_date: None,
            current_day: 1,
        }
    }
}

impl UserProgress {
    pub fn is_completed(&self, key: &TaskKey) -> bool {
        self.completed_days.contains(key)
    }

    /// Number of completed days scoped to one path. This count defines
    /// that path's unlock frontier; the global count never gates.
    pub fn completed_count_for_path(&self, path_id: &str) -> usize {
        self.completed_days
            .iter()
            .filter(|k| k.path_id == path_id)
            .count()
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::task::{SubtaskPart, TaskKey};

/// Every state change in the tracker produces an Event.
/// The CLI prints them as JSON; hooks consume them fire-and-forget.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    LoggedIn {
        name: String,
        email: String,
        at: DateTime<Utc>,
    },
    LoggedOut {
        at: DateTime<Utc>,
    },
    PathSelected {
        path_id: String,
        at: DateTime<Utc>,
    },
    /// Path deselected after the confirmation prompt. Progress on the
    /// old path is retained, scoped by its keys.
    PathCleared {
        at: DateTime<Utc>,
    },
    DayViewed {
        task: TaskKey,
        locked: bool,
        completed: bool,
        at: DateTime<Utc>,
    },
    SubtaskMarked {
        task: TaskKey,
        part: SubtaskPart,
        at: DateTime<Utc>,
    },
    /// All three sub-tasks done and the day entered the completed set.
    DayCompleted {
        task: TaskKey,
        new_streak: u32,
        longest_streak: u32,
        at: DateTime<Utc>,
    },
    /// Full progress snapshot for status-style commands.
    ProgressSnapshot {
        selected_path_id: Option<String>,
        current_day: u32,
        completed_for_path: usize,
        completed_total: usize,
        current_streak: u32,
        longest_streak: u32,
        at: DateTime<Utc>,
    },
}

//! Transient per-session view state for the displayed day.

use serde::{Deserialize, Serialize};

use crate::task::{SubtaskPart, TaskKey};

/// Ephemeral sub-task flags for the day currently on screen.
///
/// Deliberately a separate structure from [`super::UserProgress`]:
/// these flags are session state, never persisted per sub-task, and
/// they reset whenever the displayed day changes. Viewing an
/// already-completed day pre-marks all three so the page reads as
/// done without re-counting anything.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayView {
    pub key: TaskKey,
    pub input: bool,
    pub output: bool,
    pub synthesis: bool,
}

impl DayView {
    /// Fresh view state for a day. `already_completed` pre-marks all
    /// three flags.
    pub fn for_day(key: TaskKey, already_completed: bool) -> Self {
        Self {
            key,
            input: already_completed,
            output: already_completed,
            synthesis: already_completed,
        }
    }

    pub fn is_marked(&self, part: SubtaskPart) -> bool {
        match part {
            SubtaskPart::Input => self.input,
            SubtaskPart::Output => self.output,
            SubtaskPart::Synthesis => self.synthesis,
        }
    }

    /// Set one flag. Returns false if it was already set (idempotent).
    pub fn mark(&mut self, part: SubtaskPart) -> bool {
        let flag = match part {
            SubtaskPart::Input => &mut self.input,
            SubtaskPart::Output => &mut self.output,
            SubtaskPart::Synthesis => &mut self.synthesis,
        };
        if *flag {
            return false;
        }
        *flag = true;
        true
    }

    pub fn all_marked(&self) -> bool {
        self.input && self.output && self.synthesis
    }
}

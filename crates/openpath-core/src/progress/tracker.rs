//! The progress state machine.
//!
//! [`ProgressTracker`] owns the persisted [`UserProgress`] record plus
//! the transient [`DayView`] for the displayed day, and exposes every
//! mutation the interface is allowed to perform. Invalid transitions
//! (locked day, already-completed day, missing path) are no-ops, not
//! errors: they are only reachable through stale or tampered UI state.
//!
//! Every mutating operation has an `*_at` variant taking an explicit
//! wall-clock instant, with a thin `Utc::now()` wrapper -- the caller
//! decides the clock, tests decide the date.

use chrono::{DateTime, Utc};

use crate::events::Event;
use crate::hooks::ConfirmPrompt;
use crate::navigation::{clamp_day, frontier, is_locked, TOTAL_DAYS};
use crate::task::{SubtaskPart, TaskKey};

use super::streak::next_streak;
use super::{DayView, UserProgress};

pub struct ProgressTracker {
    progress: UserProgress,
    view: Option<DayView>,
}

impl ProgressTracker {
    /// Build a tracker from a loaded record and (optionally) the view
    /// state a previous session left behind.
    ///
    /// A stale view -- wrong path, or pointing at a different day than
    /// the record's cursor -- is discarded and rebuilt, which is the
    /// reset-on-day-change rule applied at the load boundary.
    pub fn new(progress: UserProgress, view: Option<DayView>) -> Self {
        let mut tracker = Self {
            progress,
            view: None,
        };
        if let Some(path_id) = tracker.progress.selected_path_id.clone() {
            let key = TaskKey::new(path_id, clamp_day(tracker.progress.current_day));
            tracker.view = match view {
                Some(v) if v.key == key => Some(v),
                _ => Some(DayView::for_day(
                    key.clone(),
                    tracker.progress.is_completed(&key),
                )),
            };
        }
        tracker
    }

    pub fn from_record(progress: UserProgress) -> Self {
        Self::new(progress, None)
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn progress(&self) -> &UserProgress {
        &self.progress
    }

    pub fn view(&self) -> Option<&DayView> {
        self.view.as_ref()
    }

    pub fn into_parts(self) -> (UserProgress, Option<DayView>) {
        (self.progress, self.view)
    }

    /// Lock state of a day under the currently selected path.
    /// Without a selected path every day reads as locked.
    pub fn is_day_locked(&self, day: u32) -> bool {
        match &self.progress.selected_path_id {
            Some(path_id) => is_locked(day, self.progress.completed_count_for_path(path_id)),
            None => true,
        }
    }

    /// Highest unlocked day for the selected path.
    pub fn unlock_frontier(&self) -> u32 {
        match &self.progress.selected_path_id {
            Some(path_id) => frontier(self.progress.completed_count_for_path(path_id)),
            None => 1,
        }
    }

    pub fn snapshot_at(&self, now: DateTime<Utc>) -> Event {
        let completed_for_path = self
            .progress
            .selected_path_id
            .as_deref()
            .map(|p| self.progress.completed_count_for_path(p))
            .unwrap_or(0);
        Event::ProgressSnapshot {
            selected_path_id: self.progress.selected_path_id.clone(),
            current_day: self.progress.current_day,
            completed_for_path,
            completed_total: self.progress.completed_days.len(),
            current_streak: self.progress.current_streak,
            longest_streak: self.progress.longest_streak,
            at: now,
        }
    }

    pub fn snapshot(&self) -> Event {
        self.snapshot_at(Utc::now())
    }

    // ── Identity ─────────────────────────────────────────────────────

    pub fn login_at(&mut self, name: &str, email: &str, now: DateTime<Utc>) -> Event {
        self.progress.name = name.to_string();
        self.progress.email = email.to_string();
        self.progress.is_authenticated = true;
        Event::LoggedIn {
            name: name.to_string(),
            email: email.to_string(),
            at: now,
        }
    }

    pub fn login(&mut self, name: &str, email: &str) -> Event {
        self.login_at(name, email, Utc::now())
    }

    /// Clears only the authentication flag; the record survives.
    pub fn logout_at(&mut self, now: DateTime<Utc>) -> Event {
        self.progress.is_authenticated = false;
        Event::LoggedOut { at: now }
    }

    pub fn logout(&mut self) -> Event {
        self.logout_at(Utc::now())
    }

    // ── Path selection ───────────────────────────────────────────────

    /// Select (or switch to) a path. Fully overwrites the start date,
    /// last-active date and day cursor; never touches completed days
    /// or streaks, so progress on a prior path is retained.
    pub fn select_path_at(&mut self, path_id: &str, now: DateTime<Utc>) -> Event {
        self.progress.selected_path_id = Some(path_id.to_string());
        self.progress.start_date = Some(now);
        self.progress.last_active_date = Some(now.date_naive());
        self.progress.current_day = 1;
        let key = TaskKey::new(path_id, 1);
        self.view = Some(DayView::for_day(
            key.clone(),
            self.progress.is_completed(&key),
        ));
        Event::PathSelected {
            path_id: path_id.to_string(),
            at: now,
        }
    }

    pub fn select_path(&mut self, path_id: &str) -> Event {
        self.select_path_at(path_id, Utc::now())
    }

    /// Clear the selected path, guarded by an external confirmation.
    /// Declining aborts with no field changed.
    pub fn deselect_path_at(
        &mut self,
        confirm: &dyn ConfirmPrompt,
        now: DateTime<Utc>,
    ) -> Option<Event> {
        self.progress.selected_path_id.as_ref()?;
        if !confirm.confirm(
            "Change your learning path? Progress on the current path is saved, \
             but your streak may break if you don't complete a task today.",
        ) {
            return None;
        }
        self.progress.selected_path_id = None;
        self.view = None;
        Some(Event::PathCleared { at: now })
    }

    pub fn deselect_path(&mut self, confirm: &dyn ConfirmPrompt) -> Option<Event> {
        self.deselect_path_at(confirm, Utc::now())
    }

    // ── Navigation ───────────────────────────────────────────────────

    /// Display a day. The requested number is clamped into 1..=200,
    /// the day cursor moves, and the sub-task flags reset (pre-marked
    /// when the day is already completed). Locked days may be viewed
    /// read-only.
    pub fn view_day_at(&mut self, day: u32, now: DateTime<Utc>) -> Option<Event> {
        let path_id = self.progress.selected_path_id.clone()?;
        let day = clamp_day(day);
        let key = TaskKey::new(path_id, day);
        let completed = self.progress.is_completed(&key);
        self.progress.current_day = day;
        self.view = Some(DayView::for_day(key.clone(), completed));
        Some(Event::DayViewed {
            task: key,
            locked: self.is_day_locked(day),
            completed,
            at: now,
        })
    }

    pub fn view_day(&mut self, day: u32) -> Option<Event> {
        self.view_day_at(day, Utc::now())
    }

    /// Advance one day. Refused when the current day is incomplete and
    /// the next would pass the unlock frontier -- re-viewing completed
    /// days going forward is fine, skipping past the frontier is not.
    pub fn go_to_next_day_at(&mut self, now: DateTime<Utc>) -> Option<Event> {
        let path_id = self.progress.selected_path_id.clone()?;
        let day = self.progress.current_day;
        if day >= TOTAL_DAYS {
            return None;
        }
        let completed = self.progress.is_completed(&TaskKey::new(&path_id, day));
        if !completed && day >= self.unlock_frontier() {
            return None;
        }
        self.view_day_at(day + 1, now)
    }

    pub fn go_to_next_day(&mut self) -> Option<Event> {
        self.go_to_next_day_at(Utc::now())
    }

    /// Backward navigation is always free.
    pub fn go_to_previous_day_at(&mut self, now: DateTime<Utc>) -> Option<Event> {
        self.progress.selected_path_id.as_ref()?;
        if self.progress.current_day <= 1 {
            return None;
        }
        self.view_day_at(self.progress.current_day - 1, now)
    }

    pub fn go_to_previous_day(&mut self) -> Option<Event> {
        self.go_to_previous_day_at(Utc::now())
    }

    pub fn jump_to_day_at(&mut self, day: u32, now: DateTime<Utc>) -> Option<Event> {
        self.view_day_at(day, now)
    }

    pub fn jump_to_day(&mut self, day: u32) -> Option<Event> {
        self.jump_to_day_at(day, Utc::now())
    }

    // ── Completion ───────────────────────────────────────────────────

    /// Mark one sub-task of the displayed day. Ephemeral state only;
    /// idempotent; refused on a locked day.
    pub fn mark_subtask_at(&mut self, part: SubtaskPart, now: DateTime<Utc>) -> Option<Event> {
        self.progress.selected_path_id.as_ref()?;
        let locked = self.is_day_locked(self.progress.current_day);
        let view = self.view.as_mut()?;
        if locked || !view.mark(part) {
            return None;
        }
        Some(Event::SubtaskMarked {
            task: view.key.clone(),
            part,
            at: now,
        })
    }

    pub fn mark_subtask(&mut self, part: SubtaskPart) -> Option<Event> {
        self.mark_subtask_at(part, Utc::now())
    }

    /// Promote the displayed day into the completed set once all three
    /// sub-task flags are up. Repeat calls on an already-completed day
    /// are no-ops, so streaks can never be double-counted.
    pub fn finalize_day_if_complete_at(&mut self, now: DateTime<Utc>) -> Option<Event> {
        let view = self.view.as_ref()?;
        if !view.all_marked() || self.progress.is_completed(&view.key) {
            return None;
        }
        let key = view.key.clone();
        // A completion always leaves at least a one-day streak, even
        // when the path was selected earlier the same day.
        let new_streak = next_streak(
            self.progress.last_active_date,
            self.progress.current_streak,
            now.date_naive(),
        )
        .max(1);
        self.progress.completed_days.push(key.clone());
        self.progress.current_streak = new_streak;
        self.progress.longest_streak = self.progress.longest_streak.max(new_streak);
        self.progress.last_active_date = Some(now.date_naive());
        self.progress.current_day = key.day_number;
        Some(Event::DayCompleted {
            task: key,
            new_streak,
            longest_streak: self.progress.longest_streak,
            at: now,
        })
    }

    pub fn finalize_day_if_complete(&mut self) -> Option<Event> {
        self.finalize_day_if_complete_at(Utc::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hooks::AutoConfirm;
    use chrono::TimeZone;

    fn at(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap()
    }

    fn complete_day(tracker: &mut ProgressTracker, now: DateTime<Utc>) -> Option<Event> {
        tracker.mark_subtask_at(SubtaskPart::Input, now);
        tracker.mark_subtask_at(SubtaskPart::Output, now);
        tracker.mark_subtask_at(SubtaskPart::Synthesis, now);
        tracker.finalize_day_if_complete_at(now)
    }

    #[test]
    fn fresh_user_completes_day_one() {
        let mut tracker = ProgressTracker::from_record(UserProgress::default());
        let now = at(2026, 8, 27);
        tracker.select_path_at("p1", now);
        assert!(!tracker.is_day_locked(1));
        assert!(tracker.is_day_locked(2));

        let event = complete_day(&mut tracker, now).expect("day should finalize");
        match event {
            Event::DayCompleted { new_streak, .. } => assert_eq!(new_streak, 1),
            other => panic!("expected DayCompleted, got {other:?}"),
        }
        assert_eq!(
            tracker.progress().completed_days,
            vec![TaskKey::new("p1", 1)]
        );
        assert_eq!(tracker.progress().current_streak, 1);
        assert!(!tracker.is_day_locked(2));
        assert!(tracker.is_day_locked(3));
    }

    #[test]
    fn finalize_is_idempotent() {
        let mut tracker = ProgressTracker::from_record(UserProgress::default());
        let now = at(2026, 8, 27);
        tracker.select_path_at("p1", now);
        complete_day(&mut tracker, now).unwrap();

        let before = tracker.progress().clone();
        assert!(tracker.finalize_day_if_complete_at(now).is_none());
        assert_eq!(tracker.progress(), &before);
    }

    #[test]
    fn finalize_requires_all_three_flags() {
        let mut tracker = ProgressTracker::from_record(UserProgress::default());
        let now = at(2026, 8, 27);
        tracker.select_path_at("p1", now);
        tracker.mark_subtask_at(SubtaskPart::Input, now);
        tracker.mark_subtask_at(SubtaskPart::Synthesis, now);
        assert!(tracker.finalize_day_if_complete_at(now).is_none());
        assert!(tracker.progress().completed_days.is_empty());
    }

    #[test]
    fn next_day_streak_increments_and_tracks_longest() {
        let mut tracker = ProgressTracker::from_record(UserProgress::default());
        tracker.select_path_at("p1", at(2026, 8, 26));
        complete_day(&mut tracker, at(2026, 8, 26)).unwrap();
        tracker.go_to_next_day_at(at(2026, 8, 27)).unwrap();
        complete_day(&mut tracker, at(2026, 8, 27)).unwrap();
        assert_eq!(tracker.progress().current_streak, 2);
        assert_eq!(tracker.progress().longest_streak, 2);
    }

    #[test]
    fn gap_resets_streak_but_not_longest() {
        let mut tracker = ProgressTracker::from_record(UserProgress::default());
        let mut day = at(2026, 8, 1);
        tracker.select_path_at("p1", day);
        for _ in 0..4 {
            complete_day(&mut tracker, day).unwrap();
            tracker.go_to_next_day_at(day).unwrap();
            day += chrono::Duration::days(1);
        }
        assert_eq!(tracker.progress().current_streak, 4);

        // Three days off.
        let later = day + chrono::Duration::days(3);
        complete_day(&mut tracker, later).unwrap();
        assert_eq!(tracker.progress().current_streak, 1);
        assert_eq!(tracker.progress().longest_streak, 4);
    }

    #[test]
    fn marking_is_refused_on_locked_day() {
        let mut tracker = ProgressTracker::from_record(UserProgress::default());
        let now = at(2026, 8, 27);
        tracker.select_path_at("p1", now);
        tracker.jump_to_day_at(5, now);
        assert!(tracker.is_day_locked(5));
        assert!(tracker.mark_subtask_at(SubtaskPart::Input, now).is_none());
        assert!(tracker.finalize_day_if_complete_at(now).is_none());
    }

    #[test]
    fn next_day_is_refused_at_the_frontier() {
        let mut tracker = ProgressTracker::from_record(UserProgress::default());
        let now = at(2026, 8, 27);
        tracker.select_path_at("p1", now);
        // Day 1 incomplete, day 2 would pass the frontier.
        assert!(tracker.go_to_next_day_at(now).is_none());
        complete_day(&mut tracker, now).unwrap();
        assert!(tracker.go_to_next_day_at(now).is_some());
        assert_eq!(tracker.progress().current_day, 2);
    }

    #[test]
    fn backward_navigation_is_free_and_stops_at_one() {
        let mut tracker = ProgressTracker::from_record(UserProgress::default());
        let now = at(2026, 8, 27);
        tracker.select_path_at("p1", now);
        complete_day(&mut tracker, now).unwrap();
        tracker.go_to_next_day_at(now).unwrap();
        assert!(tracker.go_to_previous_day_at(now).is_some());
        assert_eq!(tracker.progress().current_day, 1);
        assert!(tracker.go_to_previous_day_at(now).is_none());
    }

    #[test]
    fn jump_clamps_out_of_range_days() {
        let mut tracker = ProgressTracker::from_record(UserProgress::default());
        let now = at(2026, 8, 27);
        tracker.select_path_at("p1", now);
        tracker.jump_to_day_at(500, now).unwrap();
        assert_eq!(tracker.progress().current_day, 200);
        tracker.jump_to_day_at(0, now).unwrap();
        assert_eq!(tracker.progress().current_day, 1);
    }

    #[test]
    fn switching_paths_keeps_completed_days_but_isolates_frontiers() {
        let mut tracker = ProgressTracker::from_record(UserProgress::default());
        let mut day = at(2026, 8, 1);
        tracker.select_path_at("p1", day);
        for _ in 0..3 {
            complete_day(&mut tracker, day).unwrap();
            tracker.go_to_next_day_at(day).unwrap();
            day += chrono::Duration::days(1);
        }

        tracker.select_path_at("p2", day);
        assert_eq!(tracker.progress().current_day, 1);
        assert_eq!(tracker.progress().completed_days.len(), 3);
        // p1 progress must not unlock p2 days.
        assert!(!tracker.is_day_locked(1));
        assert!(tracker.is_day_locked(2));
    }

    #[test]
    fn switching_back_restores_the_old_frontier() {
        let mut tracker = ProgressTracker::from_record(UserProgress::default());
        let now = at(2026, 8, 27);
        tracker.select_path_at("p1", now);
        complete_day(&mut tracker, now).unwrap();
        tracker.select_path_at("p2", now);
        tracker.select_path_at("p1", now);
        assert!(!tracker.is_day_locked(2));
        assert!(tracker.is_day_locked(3));
    }

    #[test]
    fn deselect_requires_confirmation() {
        let mut tracker = ProgressTracker::from_record(UserProgress::default());
        let now = at(2026, 8, 27);
        tracker.select_path_at("p1", now);

        assert!(tracker
            .deselect_path_at(&AutoConfirm(false), now)
            .is_none());
        assert_eq!(tracker.progress().selected_path_id.as_deref(), Some("p1"));

        assert!(tracker.deselect_path_at(&AutoConfirm(true), now).is_some());
        assert!(tracker.progress().selected_path_id.is_none());
    }

    #[test]
    fn logout_clears_only_the_auth_flag() {
        let mut tracker = ProgressTracker::from_record(UserProgress::default());
        let now = at(2026, 8, 27);
        tracker.login_at("Asha", "asha@example.com", now);
        tracker.select_path_at("p1", now);
        complete_day(&mut tracker, now).unwrap();

        tracker.logout_at(now);
        assert!(!tracker.progress().is_authenticated);
        assert_eq!(tracker.progress().name, "Asha");
        assert_eq!(tracker.progress().completed_days.len(), 1);
    }

    #[test]
    fn stale_view_from_another_path_is_rebuilt_on_load() {
        let mut progress = UserProgress::default();
        progress.selected_path_id = Some("p2".into());
        progress.current_day = 1;
        let stale = DayView {
            key: TaskKey::new("p1", 1),
            input: true,
            output: true,
            synthesis: true,
        };
        let tracker = ProgressTracker::new(progress, Some(stale));
        let view = tracker.view().unwrap();
        assert_eq!(view.key, TaskKey::new("p2", 1));
        assert!(!view.all_marked());
    }
}

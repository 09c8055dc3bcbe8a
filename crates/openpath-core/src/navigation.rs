//! Day unlock gating and range clamping.
//!
//! One rule decides locking everywhere (main viewer, quick jump,
//! curriculum map): day N is unlocked iff N <= completed-for-path + 1.

/// Fixed length of every career path.
pub const TOTAL_DAYS: u32 = 200;

/// The single unlock rule. `completed_for_path` must be the count of
/// completed days scoped to the selected path, never the global count.
pub fn is_locked(day: u32, completed_for_path: usize) -> bool {
    day as u64 > completed_for_path as u64 + 1
}

/// Highest unlocked day for a path.
pub fn frontier(completed_for_path: usize) -> u32 {
    (completed_for_path as u64 + 1).min(TOTAL_DAYS as u64) as u32
}

/// Clamp a requested day number into 1..=200. The UI must never be
/// able to land on day 0 or day 201.
pub fn clamp_day(day: u32) -> u32 {
    day.clamp(1, TOTAL_DAYS)
}

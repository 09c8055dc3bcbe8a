//! Daily streak arithmetic.

use chrono::NaiveDate;

/// Compute the streak value a completion recorded on `today` produces.
///
/// Comparison is calendar-date only; both dates must come from the
/// same reference frame (the tracker truncates its wall-clock reads
/// with [`chrono::DateTime::date_naive`] before calling in).
///
/// - never active before -> 1
/// - same day -> unchanged (repeat completions do not inflate it)
/// - exactly one day later -> +1
/// - a gap of two or more days -> back to 1
pub fn next_streak(last_active: Option<NaiveDate>, current_streak: u32, today: NaiveDate) -> u32 {
    let Some(last) = last_active else {
        return 1;
    };
    match (today - last).num_days().unsigned_abs() {
        0 => current_streak,
        1 => current_streak + 1,
        _ => 1,
    }
}

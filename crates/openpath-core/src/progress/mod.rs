//! Progress tracking: the persisted record, the transient day view,
//! streak arithmetic, and the state machine tying them together.

mod record;
mod streak;
mod tracker;
mod view;

pub use record::UserProgress;
pub use streak::next_streak;
pub use tracker::ProgressTracker;
pub use view::DayView;

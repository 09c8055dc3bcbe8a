//! Seams for external collaborators.
//!
//! The tracker depends on a yes/no confirmation before clearing the
//! selected path, and emits a celebratory cue on day completion.
//! Both are modeled as traits so the CLI can plug in stdin/stdout
//! implementations and tests can plug in fakes.

use crate::events::Event;

/// External yes/no confirmation. A declined prompt fully aborts the
/// guarded operation.
pub trait ConfirmPrompt {
    fn confirm(&self, message: &str) -> bool;
}

/// Fixed answer, for tests and `--yes` flags.
pub struct AutoConfirm(pub bool);

impl ConfirmPrompt for AutoConfirm {
    fn confirm(&self, _message: &str) -> bool {
        self.0
    }
}

/// Celebratory cue on day completion. Fire-and-forget: no return
/// value is consumed and failures are never retried, so state
/// mutation can never depend on it.
pub trait Celebration {
    fn on_day_completed(&self, _event: &Event) {} // default no-op
}

/// Celebration that does nothing.
pub struct NoCelebration;

impl Celebration for NoCelebration {}

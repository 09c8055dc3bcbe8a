//! # OpenPath Core Library
//!
//! Core business logic for OpenPath, a self-paced learning-progress
//! tracker: a user commits to a 200-day career curriculum, works
//! through one three-part task per day (Input / Output / Synthesis),
//! and the library persists completion state, streaks, and navigation
//! position locally. All operations are available through the
//! standalone CLI binary, which is a thin layer over this crate.
//!
//! ## Architecture
//!
//! - **Catalog**: static career path definitions and the pure
//!   `(path_id, day)` -> task resolution function
//! - **Progress**: the persisted record, the transient day view, and
//!   the state machine applying completion events
//! - **Navigation**: the unlock frontier rule and day clamping
//! - **Storage**: SQLite-backed kv persistence and TOML configuration
//! - **Tutor**: client for the external tutoring assistant, fully
//!   decoupled from progress state
//!
//! ## Key Components
//!
//! - [`ProgressTracker`]: the progress state machine
//! - [`catalog::resolve`]: deterministic day-content resolution
//! - [`Database`]: progress and view persistence
//! - [`TutorClient`]: degrading wrapper over the chat endpoint

pub mod catalog;
pub mod error;
pub mod events;
pub mod hooks;
pub mod navigation;
pub mod progress;
pub mod storage;
pub mod task;
pub mod tutor;

pub use catalog::{career_paths, find_path, CareerPath, PathCategory, Phase};
pub use error::{ConfigError, CoreError, DatabaseError, TutorError};
pub use events::Event;
pub use hooks::{AutoConfirm, Celebration, ConfirmPrompt, NoCelebration};
pub use progress::{next_streak, DayView, ProgressTracker, UserProgress};
pub use storage::{Config, Database, TutorConfig};
pub use task::{DayTask, SubtaskPart, TaskKey};
pub use tutor::TutorClient;

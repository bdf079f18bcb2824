//! # cg-goal
//!
//! In-memory course-goal list for a single screen.
//!
//! A [`GoalListManager`] owns the ordered list of [`Goal`]s, the pending
//! entry text and the last validation message. A presentation layer calls
//! its commands in response to user gestures and re-renders from its
//! queries after each change. Nothing is persisted.
//!
//! ## Key components
//!
//! - [`GoalListManager`] — add (with validation), toggle, remove, entry form state
//! - [`Goal`] / [`GoalView`] — the entry and its render-ready projection
//! - [`GoalIdGenerator`] — counter or UUID v4 identifiers
//! - [`ScreenConfig`] — TOML configuration with serde defaults
//! - [`GoalEvent`] — emitted on every state change
//! - [`EventDispatcher`] — fans events out to [`NotificationSink`]s

pub mod config;
pub mod error;
pub mod events;
pub mod goal;
pub mod id;
pub mod manager;

pub use config::{DEFAULT_VALIDATION_MESSAGE, ScreenConfig};
pub use error::GoalError;
pub use events::{EventDispatcher, GoalEvent, MemorySink, NotificationSink, TracingSink};
pub use goal::{Goal, GoalSummary, GoalView};
pub use id::{GoalId, GoalIdGenerator, IdStrategy};
pub use manager::GoalListManager;

// events.rs — Event model and notification dispatch.
//
// The manager emits a GoalEvent after every state change. A presentation
// layer subscribes through a NotificationSink to know when to re-render;
// the TracingSink turns the same stream into log records.
//
// Dispatch is synchronous. A failing sink is logged and skipped, it never
// fails the command that produced the event.

use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::GoalError;
use crate::id::GoalId;

/// Events emitted by the goal list manager.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event_type", rename_all = "snake_case")]
pub enum GoalEvent {
    /// A goal was appended to the list.
    GoalAdded {
        goal_id: GoalId,
        value: String,
        timestamp: DateTime<Utc>,
    },

    /// A goal's completion flag flipped.
    GoalToggled {
        goal_id: GoalId,
        completed: bool,
        timestamp: DateTime<Utc>,
    },

    /// A goal was removed from the list.
    GoalRemoved {
        goal_id: GoalId,
        timestamp: DateTime<Utc>,
    },

    /// A submit was rejected because the input was empty.
    ValidationFailed {
        message: String,
        timestamp: DateTime<Utc>,
    },

    /// The entry form was shown.
    EntryOpened { timestamp: DateTime<Utc> },

    /// The entry form was dismissed without adding a goal.
    EntryCancelled { timestamp: DateTime<Utc> },
}

impl GoalEvent {
    /// Get the event type name as a string.
    pub fn event_type(&self) -> &str {
        match self {
            GoalEvent::GoalAdded { .. } => "goal_added",
            GoalEvent::GoalToggled { .. } => "goal_toggled",
            GoalEvent::GoalRemoved { .. } => "goal_removed",
            GoalEvent::ValidationFailed { .. } => "validation_failed",
            GoalEvent::EntryOpened { .. } => "entry_opened",
            GoalEvent::EntryCancelled { .. } => "entry_cancelled",
        }
    }

    /// The goal this event concerns, if any.
    pub fn goal_id(&self) -> Option<&GoalId> {
        match self {
            GoalEvent::GoalAdded { goal_id, .. }
            | GoalEvent::GoalToggled { goal_id, .. }
            | GoalEvent::GoalRemoved { goal_id, .. } => Some(goal_id),
            _ => None,
        }
    }

    pub fn goal_added(goal_id: &GoalId, value: &str) -> Self {
        GoalEvent::GoalAdded {
            goal_id: goal_id.clone(),
            value: value.to_string(),
            timestamp: Utc::now(),
        }
    }

    pub fn goal_toggled(goal_id: &GoalId, completed: bool) -> Self {
        GoalEvent::GoalToggled {
            goal_id: goal_id.clone(),
            completed,
            timestamp: Utc::now(),
        }
    }

    pub fn goal_removed(goal_id: &GoalId) -> Self {
        GoalEvent::GoalRemoved {
            goal_id: goal_id.clone(),
            timestamp: Utc::now(),
        }
    }

    pub fn validation_failed(message: &str) -> Self {
        GoalEvent::ValidationFailed {
            message: message.to_string(),
            timestamp: Utc::now(),
        }
    }

    pub fn entry_opened() -> Self {
        GoalEvent::EntryOpened {
            timestamp: Utc::now(),
        }
    }

    pub fn entry_cancelled() -> Self {
        GoalEvent::EntryCancelled {
            timestamp: Utc::now(),
        }
    }
}

/// Trait for receiving goal events.
pub trait NotificationSink: Send {
    /// Handle an event. Errors are logged but don't stop the manager.
    fn send(&self, event: &GoalEvent) -> Result<(), GoalError>;
}

/// Logs every event through `tracing` at debug level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl NotificationSink for TracingSink {
    fn send(&self, event: &GoalEvent) -> Result<(), GoalError> {
        let json = serde_json::to_string(event)?;
        tracing::debug!(event_type = event.event_type(), payload = %json, "goal event");
        Ok(())
    }
}

/// Collects events in memory.
///
/// Clones share the same buffer, so a caller can keep one handle and give
/// the other to the dispatcher.
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    events: Arc<Mutex<Vec<GoalEvent>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything received so far.
    pub fn events(&self) -> Vec<GoalEvent> {
        match self.events.lock() {
            Ok(events) => events.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// The most recent event, if any.
    pub fn last(&self) -> Option<GoalEvent> {
        self.events().pop()
    }

    /// Remove and return everything received so far.
    pub fn drain(&self) -> Vec<GoalEvent> {
        match self.events.lock() {
            Ok(mut events) => std::mem::take(&mut *events),
            Err(poisoned) => std::mem::take(&mut *poisoned.into_inner()),
        }
    }
}

impl NotificationSink for MemorySink {
    fn send(&self, event: &GoalEvent) -> Result<(), GoalError> {
        self.events
            .lock()
            .map_err(|e| GoalError::NotificationError(e.to_string()))?
            .push(event.clone());
        Ok(())
    }
}

/// Dispatches events to multiple sinks.
///
/// Errors from individual sinks are logged (via tracing) but don't
/// prevent other sinks from receiving the event.
pub struct EventDispatcher {
    sinks: Vec<Box<dyn NotificationSink>>,
}

impl EventDispatcher {
    /// Create a new dispatcher with no sinks.
    pub fn new() -> Self {
        Self { sinks: Vec::new() }
    }

    /// Add a notification sink.
    pub fn add_sink(&mut self, sink: Box<dyn NotificationSink>) {
        self.sinks.push(sink);
    }

    pub fn sink_count(&self) -> usize {
        self.sinks.len()
    }

    /// Dispatch an event to all sinks.
    pub fn dispatch(&self, event: &GoalEvent) {
        for sink in &self.sinks {
            if let Err(e) = sink.send(event) {
                tracing::warn!("notification sink error: {}", e);
            }
        }
    }
}

impl Default for EventDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for EventDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventDispatcher")
            .field("sinks", &self.sinks.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingSink;

    impl NotificationSink for FailingSink {
        fn send(&self, _event: &GoalEvent) -> Result<(), GoalError> {
            Err(GoalError::NotificationError("boom".to_string()))
        }
    }

    #[test]
    fn events_serialize_with_type_tag() {
        let event = GoalEvent::goal_added(&GoalId::from("1"), "Learn Rust");
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"event_type\":\"goal_added\""));
        assert!(json.contains("\"goal_id\":\"1\""));
    }

    #[test]
    fn memory_sink_clones_share_buffer() {
        let sink = MemorySink::new();
        let handle = sink.clone();

        sink.send(&GoalEvent::entry_opened()).unwrap();
        sink.send(&GoalEvent::entry_cancelled()).unwrap();

        assert_eq!(handle.events().len(), 2);
        assert_eq!(handle.last().unwrap().event_type(), "entry_cancelled");
        assert_eq!(handle.drain().len(), 2);
        assert!(sink.events().is_empty());
    }

    #[test]
    fn dispatcher_sends_to_all_sinks() {
        let a = MemorySink::new();
        let b = MemorySink::new();

        let mut dispatcher = EventDispatcher::new();
        dispatcher.add_sink(Box::new(a.clone()));
        dispatcher.add_sink(Box::new(b.clone()));
        assert_eq!(dispatcher.sink_count(), 2);

        dispatcher.dispatch(&GoalEvent::goal_removed(&GoalId::from("3")));

        assert_eq!(a.events().len(), 1);
        assert_eq!(b.events().len(), 1);
    }

    #[test]
    fn failing_sink_does_not_block_others() {
        let good = MemorySink::new();

        let mut dispatcher = EventDispatcher::new();
        dispatcher.add_sink(Box::new(FailingSink));
        dispatcher.add_sink(Box::new(TracingSink));
        dispatcher.add_sink(Box::new(good.clone()));

        dispatcher.dispatch(&GoalEvent::validation_failed("empty"));
        assert_eq!(good.events().len(), 1);
    }

    #[test]
    fn event_type_names_and_goal_ids() {
        let id = GoalId::from("9");
        assert_eq!(GoalEvent::goal_toggled(&id, true).event_type(), "goal_toggled");
        assert_eq!(GoalEvent::goal_toggled(&id, true).goal_id(), Some(&id));
        assert_eq!(GoalEvent::entry_opened().event_type(), "entry_opened");
        assert_eq!(GoalEvent::entry_opened().goal_id(), None);
        assert_eq!(
            GoalEvent::validation_failed("x").event_type(),
            "validation_failed"
        );
    }
}

// manager.rs — GoalListManager: the state behind one goal screen.
//
// Owns the ordered goal list, the pending entry text, the last validation
// message and whether the entry form is shown. All commands take `&mut self`
// and run to completion; there is no shared or global state.
//
// Entry form:
//   hidden --open_entry--> shown
//   shown  --submit_goal (ok) | cancel_entry--> hidden
//   shown  --submit_goal (empty)--> shown (validation message set)

use crate::config::ScreenConfig;
use crate::error::GoalError;
use crate::events::{EventDispatcher, GoalEvent, NotificationSink};
use crate::goal::{Goal, GoalSummary, GoalView};
use crate::id::{GoalId, GoalIdGenerator};

/// Goal list plus pending-input state for a single screen.
#[derive(Debug)]
pub struct GoalListManager {
    goals: Vec<Goal>,
    pending_input: String,
    validation_message: String,
    entry_open: bool,
    ids: GoalIdGenerator,
    config: ScreenConfig,
    dispatcher: EventDispatcher,
}

impl GoalListManager {
    /// Empty manager with default configuration.
    pub fn new() -> Self {
        Self::with_config(ScreenConfig::default())
    }

    pub fn with_config(config: ScreenConfig) -> Self {
        let config = config.normalized();
        Self {
            goals: Vec::new(),
            pending_input: String::new(),
            validation_message: String::new(),
            entry_open: false,
            ids: GoalIdGenerator::new(config.id_strategy),
            config,
            dispatcher: EventDispatcher::new(),
        }
    }

    /// Subscribe a sink to every subsequent state change.
    pub fn add_sink(&mut self, sink: Box<dyn NotificationSink>) {
        self.dispatcher.add_sink(sink);
    }

    pub fn config(&self) -> &ScreenConfig {
        &self.config
    }

    // --- Queries ---

    /// Goals in insertion order.
    pub fn goals(&self) -> &[Goal] {
        &self.goals
    }

    pub fn goal(&self, id: &GoalId) -> Option<&Goal> {
        self.goals.iter().find(|g| g.id() == id)
    }

    pub fn pending_input(&self) -> &str {
        &self.pending_input
    }

    /// Empty when the last submit succeeded or nothing was submitted yet.
    pub fn validation_message(&self) -> &str {
        &self.validation_message
    }

    pub fn is_entry_open(&self) -> bool {
        self.entry_open
    }

    pub fn views(&self) -> Vec<GoalView> {
        self.goals.iter().map(GoalView::from).collect()
    }

    pub fn summary(&self) -> GoalSummary {
        GoalSummary::of(&self.goals)
    }

    pub fn len(&self) -> usize {
        self.goals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.goals.is_empty()
    }

    // --- Commands ---

    /// Replace the pending input verbatim. No validation happens here.
    pub fn set_pending_input(&mut self, text: impl Into<String>) {
        self.pending_input = text.into();
    }

    /// Show the entry form. Pending input and validation message are kept.
    pub fn open_entry(&mut self) {
        if self.entry_open {
            return;
        }
        self.entry_open = true;
        tracing::debug!("entry form opened");
        self.dispatcher.dispatch(&GoalEvent::entry_opened());
    }

    /// Validate the pending input and append it as a new goal.
    ///
    /// On empty input the list and pending input are left untouched, the
    /// validation message is set and `GoalError::Validation` is returned.
    /// On success the pending input and validation message are cleared and
    /// the entry form is closed.
    pub fn submit_goal(&mut self) -> Result<GoalId, GoalError> {
        if self.input_is_empty() {
            let message = self.config.validation_message.clone();
            tracing::debug!(pending_len = self.pending_input.len(), "rejected empty goal");
            self.validation_message = message.clone();
            self.dispatcher
                .dispatch(&GoalEvent::validation_failed(&message));
            return Err(GoalError::Validation { message });
        }

        let id = self.fresh_id();
        let value = std::mem::take(&mut self.pending_input);
        let event = GoalEvent::goal_added(&id, &value);
        self.goals.push(Goal::new(id.clone(), value));
        self.validation_message.clear();
        self.entry_open = false;

        tracing::debug!(goal_id = %id, total = self.goals.len(), "goal added");
        self.dispatcher.dispatch(&event);
        Ok(id)
    }

    /// Discard the pending input and validation message, close the form.
    ///
    /// Only emits `EntryCancelled` when there was something to dismiss.
    pub fn cancel_entry(&mut self) {
        let changed = self.entry_open
            || !self.pending_input.is_empty()
            || !self.validation_message.is_empty();
        self.pending_input.clear();
        self.validation_message.clear();
        self.entry_open = false;
        if !changed {
            return;
        }
        tracing::debug!("entry cancelled");
        self.dispatcher.dispatch(&GoalEvent::entry_cancelled());
    }

    /// Remove the goal with `id`. Unknown ids are a no-op.
    ///
    /// Returns whether a goal was removed.
    pub fn remove_goal(&mut self, id: &GoalId) -> bool {
        let before = self.goals.len();
        self.goals.retain(|g| g.id() != id);
        if self.goals.len() == before {
            tracing::debug!(goal_id = %id, "remove: no such goal");
            return false;
        }
        tracing::debug!(goal_id = %id, total = self.goals.len(), "goal removed");
        self.dispatcher.dispatch(&GoalEvent::goal_removed(id));
        true
    }

    /// Flip the completion flag of the goal with `id`. Unknown ids are a no-op.
    ///
    /// Returns the new flag, or `None` if no goal matched.
    pub fn toggle_completed(&mut self, id: &GoalId) -> Option<bool> {
        let Some(goal) = self.goals.iter_mut().find(|g| g.id() == id) else {
            tracing::debug!(goal_id = %id, "toggle: no such goal");
            return None;
        };
        let completed = goal.toggle();
        tracing::debug!(goal_id = %id, completed, "goal toggled");
        self.dispatcher
            .dispatch(&GoalEvent::goal_toggled(id, completed));
        Some(completed)
    }

    fn input_is_empty(&self) -> bool {
        if self.config.trim_input {
            self.pending_input.trim().is_empty()
        } else {
            self.pending_input.is_empty()
        }
    }

    /// Next generated id that is not already in the list.
    fn fresh_id(&mut self) -> GoalId {
        loop {
            let id = self.ids.next_id();
            if self.goal(&id).is_none() {
                return id;
            }
            tracing::warn!(goal_id = %id, "generated id already in use, retrying");
        }
    }
}

impl Default for GoalListManager {
    fn default() -> Self {
        Self::new()
    }
}

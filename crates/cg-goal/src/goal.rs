// goal.rs — Goal: a single course goal, plus the derived views used to render it.

use serde::{Deserialize, Serialize};

use crate::id::GoalId;

/// A single to-do entry.
///
/// `id` and `value` are fixed at creation; only `completed` ever changes,
/// and only through [`crate::GoalListManager::toggle_completed`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Goal {
    id: GoalId,
    value: String,
    completed: bool,
}

impl Goal {
    pub(crate) fn new(id: GoalId, value: impl Into<String>) -> Self {
        Self {
            id,
            value: value.into(),
            completed: false,
        }
    }

    pub fn id(&self) -> &GoalId {
        &self.id
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Flip the completion flag, returning the new value.
    pub(crate) fn toggle(&mut self) -> bool {
        self.completed = !self.completed;
        self.completed
    }

    /// Render-ready projection of this goal.
    pub fn view(&self) -> GoalView {
        GoalView::from(self)
    }
}

/// What a presentation layer needs to draw one row.
///
/// Pure function of a [`Goal`]; holds no state of its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GoalView {
    pub id: GoalId,
    pub value: String,
    pub completed: bool,
    /// `[x]` when completed, `[ ]` otherwise.
    pub marker: &'static str,
    /// Label for the toggle affordance: `undo` when completed, `done` otherwise.
    pub action: &'static str,
}

impl From<&Goal> for GoalView {
    fn from(goal: &Goal) -> Self {
        let (marker, action) = if goal.completed {
            ("[x]", "undo")
        } else {
            ("[ ]", "done")
        };
        Self {
            id: goal.id.clone(),
            value: goal.value.clone(),
            completed: goal.completed,
            marker,
            action,
        }
    }
}

/// Counts over the current list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct GoalSummary {
    pub total: usize,
    pub completed: usize,
    pub remaining: usize,
}

impl GoalSummary {
    pub fn of(goals: &[Goal]) -> Self {
        let completed = goals.iter().filter(|g| g.completed).count();
        Self {
            total: goals.len(),
            completed,
            remaining: goals.len() - completed,
        }
    }
}

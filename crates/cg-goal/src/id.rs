// id.rs — Goal identifiers and how new ones are minted.
//
// Two strategies are available:
//   counter — monotonic u64 starting at 1 ("1", "2", ...). Collision-free for
//             the lifetime of one generator.
//   uuid    — random UUID v4. Collision probability is about n^2 / 2^123 for
//             n goals, i.e. negligible, but not zero.
//
// The manager additionally rejects any candidate already present in the list,
// so list uniqueness never rests on probability alone.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque identifier of a goal. Assigned once at creation, never changed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GoalId(String);

impl GoalId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GoalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for GoalId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for GoalId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<u64> for GoalId {
    fn from(n: u64) -> Self {
        Self(n.to_string())
    }
}

/// Which scheme [`GoalIdGenerator`] uses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdStrategy {
    #[default]
    Counter,
    Uuid,
}

impl fmt::Display for IdStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdStrategy::Counter => write!(f, "counter"),
            IdStrategy::Uuid => write!(f, "uuid"),
        }
    }
}

/// Mints fresh [`GoalId`]s.
#[derive(Debug, Clone)]
pub struct GoalIdGenerator {
    strategy: IdStrategy,
    next: u64,
}

impl GoalIdGenerator {
    pub fn new(strategy: IdStrategy) -> Self {
        Self { strategy, next: 1 }
    }

    pub fn strategy(&self) -> IdStrategy {
        self.strategy
    }

    /// Produce the next candidate identifier.
    pub fn next_id(&mut self) -> GoalId {
        match self.strategy {
            IdStrategy::Counter => {
                let id = GoalId::from(self.next);
                self.next += 1;
                id
            }
            IdStrategy::Uuid => GoalId(Uuid::new_v4().to_string()),
        }
    }
}

impl Default for GoalIdGenerator {
    fn default() -> Self {
        Self::new(IdStrategy::default())
    }
}

// render.rs — Plain-text rendering of the goal screen.
//
// Everything here is a pure function of manager state, so the shell can
// redraw after each command and tests can compare strings.

use cg_goal::{GoalEvent, GoalId, GoalListManager};

pub const TITLE: &str = "C O U R S E G O A L S";
pub const ENTRY_TITLE: &str = "Add New";
pub const PLACEHOLDER: &str = "Nhập tên ...";

const WIDTH: usize = 60;

/// The list screen: title, one row per goal, summary line.
pub fn screen(manager: &GoalListManager) -> String {
    let mut out = String::new();
    out.push('\n');
    out.push_str(&format!("{:^width$}\n", TITLE, width = WIDTH));
    out.push_str(&"-".repeat(WIDTH));
    out.push('\n');

    if manager.is_empty() {
        out.push_str("  No goals yet. Press 'a' to add one.\n");
    } else {
        for (i, view) in manager.views().iter().enumerate() {
            out.push_str(&format!("  {:>2}. {} {}\n", i + 1, view.marker, view.value));
        }
    }

    out.push_str(&"-".repeat(WIDTH));
    out.push('\n');
    let s = manager.summary();
    out.push_str(&format!(
        "  {} goal(s), {} done, {} remaining\n",
        s.total, s.completed, s.remaining
    ));
    out
}

/// The entry form, including the validation message when one is set.
pub fn entry_form(manager: &GoalListManager) -> String {
    let mut out = String::new();
    out.push('\n');
    out.push_str(&format!("  {}\n", ENTRY_TITLE));
    out.push_str(&format!("  {}  (Enter to add, :cancel to go back)\n", PLACEHOLDER));
    if !manager.validation_message().is_empty() {
        out.push_str(&format!("  ! {}\n", manager.validation_message()));
    }
    out
}

pub fn help() -> String {
    [
        "",
        "  a, add          add a new goal",
        "  t, toggle <n>   mark goal n done / not done",
        "  d, delete <n>   delete goal n",
        "  l, list         show the list",
        "  h, help         this help",
        "  q, quit         exit",
        "",
    ]
    .join("\n")
}

/// One-line status for the most recent event.
pub fn describe(event: &GoalEvent, manager: &GoalListManager) -> String {
    let value_of = |id: &GoalId| {
        manager
            .goal(id)
            .map(|g| g.value().to_string())
            .unwrap_or_else(|| id.to_string())
    };
    match event {
        GoalEvent::GoalAdded { value, .. } => format!("Added: {}", value),
        GoalEvent::GoalToggled {
            goal_id, completed, ..
        } => {
            if *completed {
                format!("Done: {}", value_of(goal_id))
            } else {
                format!("Reopened: {}", value_of(goal_id))
            }
        }
        GoalEvent::GoalRemoved { .. } => "Deleted.".to_string(),
        GoalEvent::ValidationFailed { message, .. } => message.clone(),
        GoalEvent::EntryOpened { .. } => ENTRY_TITLE.to_string(),
        GoalEvent::EntryCancelled { .. } => "Cancelled.".to_string(),
    }
}

// goal_list_flow.rs — End-to-end flows through the goal list manager.
//
// Drives the manager the way a screen does: open the entry form, type,
// submit or cancel, then toggle and remove from the rendered list.

use std::collections::HashSet;

use cg_goal::{GoalEvent, GoalId, GoalListManager, IdStrategy, MemorySink, ScreenConfig};

fn completed_flags(m: &GoalListManager) -> Vec<bool> {
    m.goals().iter().map(|g| g.is_completed()).collect()
}

#[test]
fn add_first_goal() {
    let mut m = GoalListManager::new();
    m.set_pending_input("Learn Rust");
    m.submit_goal().unwrap();

    assert_eq!(m.len(), 1);
    assert_eq!(m.goals()[0].value(), "Learn Rust");
    assert!(!m.goals()[0].is_completed());
    assert_eq!(m.pending_input(), "");
}

#[test]
fn empty_submission_is_rejected_with_message() {
    let mut m = GoalListManager::new();
    m.set_pending_input("");
    let err = m.submit_goal().unwrap_err();

    assert!(err.is_validation());
    assert!(m.is_empty());
    assert_eq!(m.validation_message(), "Không được để trống");
    assert_eq!(m.pending_input(), "");
}

#[test]
fn toggle_then_remove() {
    let mut m = GoalListManager::new();
    m.set_pending_input("A");
    let a = m.submit_goal().unwrap();
    m.set_pending_input("B");
    let b = m.submit_goal().unwrap();
    assert_eq!(a, GoalId::from("1"));
    assert_eq!(b, GoalId::from("2"));

    m.toggle_completed(&GoalId::from("1"));
    assert_eq!(completed_flags(&m), vec![true, false]);

    m.remove_goal(&GoalId::from("2"));
    assert_eq!(m.len(), 1);
    assert_eq!(m.goals()[0].value(), "A");
    assert!(m.goals()[0].is_completed());
}

#[test]
fn entry_form_lifecycle() {
    let mut m = GoalListManager::new();

    m.open_entry();
    assert!(m.is_entry_open());

    // Failed submit keeps the form up so the user can correct the input.
    m.set_pending_input("   ");
    assert!(m.submit_goal().is_err());
    assert!(m.is_entry_open());
    assert_eq!(m.pending_input(), "   ");

    m.set_pending_input("Finish chapter 3");
    m.submit_goal().unwrap();
    assert!(!m.is_entry_open());

    m.open_entry();
    m.set_pending_input("never mind");
    m.cancel_entry();
    assert!(!m.is_entry_open());
    assert_eq!(m.len(), 1);
}

/// Mixed command sequence; ids stay unique and invariants hold at every step.
#[test]
fn long_mixed_sequence_keeps_invariants() {
    for strategy in [IdStrategy::Counter, IdStrategy::Uuid] {
        let config = ScreenConfig {
            id_strategy: strategy,
            ..ScreenConfig::default()
        };
        let mut m = GoalListManager::with_config(config);

        for step in 0..200usize {
            match step % 7 {
                0 | 1 | 2 => {
                    m.set_pending_input(format!("goal {}", step));
                    let before = m.len();
                    m.submit_goal().unwrap();
                    assert_eq!(m.len(), before + 1);
                    assert!(!m.goals().last().unwrap().is_completed());
                    assert_eq!(m.pending_input(), "");
                    assert_eq!(m.validation_message(), "");
                }
                3 => {
                    let snapshot: Vec<_> = m.goals().to_vec();
                    m.set_pending_input("");
                    assert!(m.submit_goal().is_err());
                    assert_eq!(m.goals(), snapshot.as_slice());
                    assert!(!m.validation_message().is_empty());
                }
                4 => {
                    if let Some(g) = m.goals().get(step % m.len().max(1)) {
                        let id = g.id().clone();
                        let before = completed_flags(&m);
                        m.toggle_completed(&id);
                        m.toggle_completed(&id);
                        assert_eq!(completed_flags(&m), before);
                        m.toggle_completed(&id);
                    }
                }
                5 => {
                    if let Some(g) = m.goals().first() {
                        let id = g.id().clone();
                        m.remove_goal(&id);
                        let once: Vec<_> = m.goals().to_vec();
                        m.remove_goal(&id);
                        assert_eq!(m.goals(), once.as_slice());
                    }
                }
                _ => m.cancel_entry(),
            }

            let ids: HashSet<&GoalId> = m.goals().iter().map(|g| g.id()).collect();
            assert_eq!(ids.len(), m.len(), "duplicate id at step {}", step);
            assert!(m.goals().iter().all(|g| !g.value().trim().is_empty()));
        }
    }
}

#[test]
fn sink_observes_added_goal_payload() {
    let sink = MemorySink::new();
    let mut m = GoalListManager::new();
    m.add_sink(Box::new(sink.clone()));

    m.set_pending_input("Learn Rust");
    let id = m.submit_goal().unwrap();

    match sink.last() {
        Some(GoalEvent::GoalAdded { goal_id, value, .. }) => {
            assert_eq!(goal_id, id);
            assert_eq!(value, "Learn Rust");
        }
        other => panic!("expected GoalAdded, got {:?}", other),
    }
}

#[test]
fn config_file_drives_manager() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        "validation_message = \"input must not be empty\"\ntrim_input = false\n",
    )
    .unwrap();

    let mut m = GoalListManager::with_config(ScreenConfig::load_or_default(&path));
    assert!(m.submit_goal().is_err());
    assert_eq!(m.validation_message(), "input must not be empty");

    m.set_pending_input("  ");
    assert!(m.submit_goal().is_ok());
}

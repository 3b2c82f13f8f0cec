//! Roster domain: tests for selection toggling and roster loading.

use super::SelectionState;
use super::registry::{builtin_roster, parse_roster};

// -----------------------------------------------------------------------------
// Selection toggle
// -----------------------------------------------------------------------------

#[test]
fn test_default_picks() {
    let selection = SelectionState::default();
    assert_eq!(selection.pick(0), Some(0));
    assert_eq!(selection.pick(1), Some(3));
}

#[test]
fn test_player_one_cycles_between_slots_0_and_1() {
    let mut selection = SelectionState::default();
    assert_eq!(selection.toggle(0), Some(1));
    assert_eq!(selection.toggle(0), Some(0));
    assert_eq!(selection.toggle(0), Some(1));
}

#[test]
fn test_player_two_cycles_between_slots_2_and_3() {
    // Player 2 starts on slot 3, away from their column base of 2.
    let mut selection = SelectionState::default();
    assert_eq!(selection.toggle(1), Some(2));
    assert_eq!(selection.toggle(1), Some(3));
    assert_eq!(selection.toggle(1), Some(2));
}

#[test]
fn test_toggle_unknown_player_is_noop() {
    let mut selection = SelectionState::default();
    assert_eq!(selection.toggle(7), None);
    assert_eq!(selection.pick(0), Some(0));
    assert_eq!(selection.pick(1), Some(3));
}

// -----------------------------------------------------------------------------
// Roster loading
// -----------------------------------------------------------------------------

#[test]
fn test_shipped_roster_parses() {
    let fighters = parse_roster(include_str!("../../assets/fighters.ron"))
        .expect("shipped roster must parse");
    assert_eq!(fighters.len(), 4);

    let mut ids: Vec<&str> = fighters.iter().map(|f| f.id.as_str()).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 4, "fighter ids must be unique");
}

#[test]
fn test_garbage_roster_is_an_error() {
    assert!(parse_roster("not ron at all").is_err());
    assert!(parse_roster("RosterFile(fighters: [])").is_err());
}

#[test]
fn test_builtin_roster_covers_both_columns() {
    let fighters = builtin_roster();
    assert_eq!(fighters.len(), 4);
}

use super::*;

fn visited(ids: &[i64]) -> DetailHistory {
    let mut history = DetailHistory::default();
    for id in ids {
        history.visit(*id);
    }
    history
}

// =============================================================
// visit / back / forward
// =============================================================

#[test]
fn empty_history_has_no_navigation() {
    let mut history = DetailHistory::default();
    assert_eq!(history.current(), None);
    assert!(!history.can_go_back());
    assert!(!history.can_go_forward());
    assert_eq!(history.back(), None);
    assert_eq!(history.forward(), None);
}

#[test]
fn visit_appends_and_moves_cursor() {
    let history = visited(&[1, 2, 3]);
    assert_eq!(history.entries(), &[1, 2, 3]);
    assert_eq!(history.current(), Some(3));
    assert!(history.can_go_back());
    assert!(!history.can_go_forward());
}

#[test]
fn visiting_current_entry_is_noop() {
    let mut history = visited(&[1, 2]);
    assert!(!history.visit(2));
    assert_eq!(history.entries(), &[1, 2]);
}

#[test]
fn back_and_forward_walk_the_trail() {
    let mut history = visited(&[1, 2, 3]);
    assert_eq!(history.back(), Some(2));
    assert_eq!(history.back(), Some(1));
    assert_eq!(history.back(), None);
    assert_eq!(history.current(), Some(1));
    assert_eq!(history.forward(), Some(2));
    assert_eq!(history.forward(), Some(3));
    assert_eq!(history.forward(), None);
}

#[test]
fn visit_after_back_truncates_forward_entries() {
    let mut history = visited(&[1, 2, 3]);
    history.back();
    history.back();
    history.visit(9);
    assert_eq!(history.entries(), &[1, 9]);
    assert!(!history.can_go_forward());
}

#[test]
fn visit_evicts_oldest_at_capacity() {
    let ids: Vec<i64> = (1..=HISTORY_CAP as i64 + 5).collect();
    let history = visited(&ids);
    assert_eq!(history.len(), HISTORY_CAP);
    assert_eq!(history.entries()[0], 6);
    assert_eq!(history.current(), Some(HISTORY_CAP as i64 + 5));
}

// =============================================================
// remove
// =============================================================

#[test]
fn remove_current_falls_back_to_previous_entry() {
    let mut history = visited(&[1, 2, 3]);
    history.remove(3);
    assert_eq!(history.entries(), &[1, 2]);
    assert_eq!(history.current(), Some(2));
}

#[test]
fn remove_collapses_adjacent_duplicates() {
    let mut history = visited(&[1, 2, 1, 4]);
    history.back();
    history.remove(2);
    assert_eq!(history.entries(), &[1, 4]);
    assert_eq!(history.current(), Some(1));
    assert!(history.can_go_forward());
}

#[test]
fn remove_first_entry_keeps_cursor_on_first_survivor() {
    let mut history = visited(&[1, 2, 3]);
    history.back();
    history.back();
    history.remove(1);
    assert_eq!(history.current(), Some(2));
}

#[test]
fn remove_last_remaining_clears() {
    let mut history = visited(&[5]);
    history.remove(5);
    assert!(history.is_empty());
    assert_eq!(history.current(), None);
}

// =============================================================
// serialize / deserialize
// =============================================================

#[test]
fn json_round_trip_keeps_cursor() {
    let mut history = visited(&[1, 2, 3]);
    history.back();
    let restored = DetailHistory::from_json(&history.to_json());
    assert_eq!(restored, history);
    assert_eq!(restored.current(), Some(2));
}

#[test]
fn from_json_rejects_garbage() {
    assert_eq!(DetailHistory::from_json("not json"), DetailHistory::default());
    assert_eq!(DetailHistory::from_json(r#"{"entries": "x"}"#), DetailHistory::default());
}

#[test]
fn from_json_clamps_out_of_range_cursor() {
    let restored = DetailHistory::from_json(r#"{"entries": [4, 5], "cursor": 17}"#);
    assert_eq!(restored.current(), Some(5));
    let restored = DetailHistory::from_json(r#"{"entries": [4, 5]}"#);
    assert_eq!(restored.current(), Some(5));
    let restored = DetailHistory::from_json(r#"{"entries": [], "cursor": 3}"#);
    assert_eq!(restored.current(), None);
}

#[test]
fn from_json_trims_over_capacity_from_the_front() {
    let entries: Vec<i64> = (0..60).collect();
    let raw = serde_json::json!({"entries": entries, "cursor": 59}).to_string();
    let restored = DetailHistory::from_json(&raw);
    assert_eq!(restored.len(), HISTORY_CAP);
    assert_eq!(restored.entries()[0], 10);
    assert_eq!(restored.current(), Some(59));
}

#[test]
fn load_without_browser_is_empty() {
    assert!(DetailHistory::load().is_empty());
}

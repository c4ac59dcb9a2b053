use super::*;

use crate::net::types::{ObjectField, ObjectTypeRef};

fn record() -> ObjectRecord {
    ObjectRecord {
        id: 7,
        auto_id: Some("BYG-0007".to_owned()),
        object_type: Some(ObjectTypeRef {
            id: Some(1),
            name: "Byggdel".to_owned(),
            fields: vec![
                ObjectField {
                    field_name: "namn".to_owned(),
                    display_name: Some("Namn".to_owned()),
                    ..ObjectField::default()
                },
                ObjectField {
                    field_name: "bärande".to_owned(),
                    display_name: Some("Bärande".to_owned()),
                    field_type: FieldType::Boolean,
                    ..ObjectField::default()
                },
            ],
            ..ObjectTypeRef::default()
        }),
        created_at: Some("2025-03-01T10:00:00".to_owned()),
        data: serde_json::json!({"namn": "Vägg", "bärande": true, "saknas": null, "övrigt": 3})
            .as_object()
            .cloned()
            .unwrap(),
        ..ObjectRecord::default()
    }
}

// =============================================================
// Tabs
// =============================================================

#[test]
fn tab_labels_are_swedish() {
    let labels: Vec<_> = DetailTab::ALL.iter().map(|t| t.label()).collect();
    assert_eq!(labels, vec!["Grunddata", "Relationer", "Dokument"]);
}

#[test]
fn lazy_tabs_load_once_per_object() {
    let mut state = DetailState::default();
    state.open(1);
    assert_eq!(state.tab, DetailTab::Details);
    assert!(!state.switch_tab(DetailTab::Details));
    assert!(state.switch_tab(DetailTab::Relations));
    state.mark_loaded(DetailTab::Relations);
    assert!(!state.switch_tab(DetailTab::Relations));
    assert!(state.switch_tab(DetailTab::Documents));
}

#[test]
fn opening_another_object_resets_loaded_tabs() {
    let mut state = DetailState::default();
    state.open(1);
    state.switch_tab(DetailTab::Relations);
    state.mark_loaded(DetailTab::Relations);

    state.open(1);
    assert_eq!(state.tab, DetailTab::Details);
    assert!(!state.needs_load(DetailTab::Relations));

    state.open(2);
    assert!(state.needs_load(DetailTab::Relations));
}

#[test]
fn closed_panel_needs_nothing() {
    let mut state = DetailState::default();
    state.open(3);
    state.close();
    assert_eq!(state.object_id, None);
    assert!(!state.needs_load(DetailTab::Documents));
}

// =============================================================
// Rendering helpers
// =============================================================

#[test]
fn header_rows_fall_back_to_na_and_auto_id() {
    let rows = header_rows(&record());
    assert_eq!(rows[0][0].value, "BYG-0007");
    assert_eq!(rows[0][1].value, "Byggdel");
    assert_eq!(rows[0][2].value, "1 mars 2025");
    assert_eq!(rows[1][0].value, "N/A");
    assert_eq!(rows[1][2].label, "ID (Full)");
    assert_eq!(rows[1][2].value, "BYG-0007");
}

#[test]
fn detail_entries_skip_null_and_use_display_names() {
    let entries = detail_entries(&record(), PanelLayout::Detail);
    assert_eq!(
        entries,
        vec![
            ("Namn".to_owned(), "Vägg".to_owned()),
            ("Bärande".to_owned(), "Ja".to_owned()),
            ("övrigt".to_owned(), "3".to_owned()),
        ]
    );
}

#[test]
fn side_layout_shows_raw_text() {
    let entries = detail_entries(&record(), PanelLayout::Side);
    assert_eq!(entries[1], ("Bärande".to_owned(), "true".to_owned()));
}

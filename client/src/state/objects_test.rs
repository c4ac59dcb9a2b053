use super::*;

use crate::net::types::{ObjectField, ObjectTypeRef};
use crate::state::app::{AppAction, AppState};

fn byggdel_type() -> ObjectType {
    ObjectType {
        id: 1,
        name: "Byggdel".to_owned(),
        fields: vec![
            ObjectField {
                field_name: "tjocklek".to_owned(),
                display_name: Some("Tjocklek".to_owned()),
                field_type: FieldType::Decimal,
                display_order: Some(2),
                ..ObjectField::default()
            },
            ObjectField {
                field_name: "namn".to_owned(),
                display_name: Some("Namn".to_owned()),
                display_order: Some(1),
                ..ObjectField::default()
            },
            ObjectField {
                field_name: "intern".to_owned(),
                is_table_visible: Some(false),
                ..ObjectField::default()
            },
        ],
        ..ObjectType::default()
    }
}

fn record() -> ObjectRecord {
    let ty = byggdel_type();
    ObjectRecord {
        id: 3,
        auto_id: Some("BYG-3".to_owned()),
        object_type: Some(ObjectTypeRef { name: ty.name.clone(), fields: ty.fields, ..ObjectTypeRef::default() }),
        created_at: Some("2025-03-01T10:00:00".to_owned()),
        data: serde_json::json!({"namn": "Vägg", "tjocklek": 1250.5}).as_object().cloned().unwrap(),
        ..ObjectRecord::default()
    }
}

#[test]
fn columns_include_visible_fields_in_order() {
    let ty = byggdel_type();
    let keys: Vec<String> = object_columns(Some(&ty)).into_iter().map(|c| c.key).collect();
    assert_eq!(keys, vec!["auto_id", "display_name", "type", "data.namn", "data.tjocklek", "created_at"]);
    let columns = object_columns(None);
    assert_eq!(columns.len(), 4);
    assert!(columns[2].type_badge);
    assert_eq!(columns[3].sort_kind, SortKind::Date);
}

#[test]
fn number_fields_sort_numerically() {
    let ty = byggdel_type();
    let columns = object_columns(Some(&ty));
    let thickness = columns.iter().find(|c| c.key == "data.tjocklek").unwrap();
    assert_eq!(thickness.sort_kind, SortKind::Number);
}

#[test]
fn row_text_and_display_differ_for_formatted_cells() {
    let row = ObjectRow::new(record(), &DisplayFieldMap::new());
    assert_eq!(row.cell_text("display_name"), "BYG-3");
    assert_eq!(row.cell_text("data.tjocklek"), "1250.5");
    assert_eq!(row.cell_display("data.tjocklek"), "1\u{a0}250,5");
    assert_eq!(row.cell_text("created_at"), "2025-03-01T10:00:00");
    assert_eq!(row.cell_display("created_at"), "1 mars 2025");
    assert_eq!(row.cell_display("data.saknas"), "-");
    assert_eq!(row.cell_text("okänd"), "");
}

#[test]
fn display_name_follows_configured_field() {
    let fields = DisplayFieldMap::from([("byggdel".to_owned(), "namn".to_owned())]);
    let row = ObjectRow::new(record(), &fields);
    assert_eq!(row.display_name, "Vägg");
}

#[test]
fn relation_targets_exclude_self() {
    let mut other = record();
    other.id = 4;
    let options = relation_target_options(&[record(), other], 3, &DisplayFieldMap::new());
    assert_eq!(options, vec![(4, "BYG-3 (Byggdel)".to_owned())]);
}

#[test]
fn columns_unchanged_by_unrelated_app_actions() {
    let state = AppState::default()
        .apply(AppAction::SetObjectTypes(vec![byggdel_type()]))
        .apply(AppAction::SelectType(Some("Byggdel".to_owned())));
    let before = object_columns(state.selected_object_type());
    let state = state.apply(AppAction::OpenObject(3)).apply(AppAction::DataChanged);
    assert_eq!(object_columns(state.selected_object_type()), before);

    let state = state.apply(AppAction::SelectType(None));
    assert_ne!(object_columns(state.selected_object_type()), before);
}

use super::*;

use crate::net::types::TreeDisplayConfig;

fn types() -> Vec<ObjectType> {
    vec![
        ObjectType { id: 1, name: "Byggdel".to_owned(), ..ObjectType::default() },
        ObjectType { id: 2, name: "Egen".to_owned(), color: Some("#123456".to_owned()), ..ObjectType::default() },
    ]
}

#[test]
fn switching_view_closes_panel_and_modal() {
    let state = AppState::default()
        .apply(AppAction::OpenObject(4))
        .apply(AppAction::OpenModal(Modal::DuplicateObject(4)))
        .apply(AppAction::SwitchView(View::Admin));
    assert_eq!(state.view, View::Admin);
    assert_eq!(state.current_object_id, None);
    assert_eq!(state.modal, None);
    assert_eq!(state.duplicate_source, None);
}

#[test]
fn duplicate_modal_records_source() {
    let state = AppState::default().apply(AppAction::OpenModal(Modal::DuplicateObject(9)));
    assert_eq!(state.duplicate_source, Some(9));
    let state = state.apply(AppAction::OpenModal(Modal::CreateObject));
    assert_eq!(state.duplicate_source, None);
    let state = state.apply(AppAction::OpenModal(Modal::DuplicateObject(9))).apply(AppAction::CloseModal);
    assert_eq!(state.modal, None);
    assert_eq!(state.duplicate_source, None);
}

#[test]
fn toggling_tree_view_closes_detail_panel() {
    let state = AppState::default().apply(AppAction::OpenObject(1)).apply(AppAction::ToggleTreeView);
    assert!(state.tree_view_active);
    assert_eq!(state.current_object_id, None);
    assert!(!state.apply(AppAction::ToggleTreeView).tree_view_active);
}

#[test]
fn only_tree_toggle_reports_persisted_change() {
    let state = AppState::default().apply(AppAction::ToggleTreeView);
    assert_eq!(tree_toggle_change(false, &state), Some(true));
    let state = state.apply(AppAction::OpenObject(3));
    assert_eq!(tree_toggle_change(true, &state), None);
    let state = state.apply(AppAction::ToggleTreeView);
    assert_eq!(tree_toggle_change(true, &state), Some(false));
}

#[test]
fn deleting_open_object_clears_references() {
    let state = AppState::default()
        .apply(AppAction::OpenObject(5))
        .apply(AppAction::OpenModal(Modal::EditObject(5)))
        .apply(AppAction::ObjectDeleted(5));
    assert_eq!(state.current_object_id, None);
    assert_eq!(state.modal, None);
    assert_eq!(state.data_version, 1);

    let state = state.apply(AppAction::OpenObject(6)).apply(AppAction::ObjectDeleted(5));
    assert_eq!(state.current_object_id, Some(6));
}

#[test]
fn select_type_drops_blank_and_vanished_types() {
    let state = AppState::default()
        .apply(AppAction::SetObjectTypes(types()))
        .apply(AppAction::SelectType(Some("Byggdel".to_owned())));
    assert_eq!(state.selected_object_type().map(|t| t.id), Some(1));

    let state = state.apply(AppAction::SetObjectTypes(vec![]));
    assert_eq!(state.selected_type, None);
    assert_eq!(AppState::default().apply(AppAction::SelectType(Some(" ".to_owned()))).selected_type, None);
}

#[test]
fn type_color_uses_custom_then_default() {
    let state = AppState::default().apply(AppAction::SetObjectTypes(types()));
    assert_eq!(state.type_color("Egen"), "#123456");
    assert_eq!(state.type_color("Byggdel"), "#3498db");
}

#[test]
fn tree_display_config_feeds_display_fields() {
    let mut config = TreeDisplayMap::new();
    config.insert(
        "Byggdel".to_owned(),
        TreeDisplayConfig {
            object_type_name: Some("Byggdel".to_owned()),
            tree_view_name_field: Some("namn".to_owned()),
            ..TreeDisplayConfig::default()
        },
    );
    let state = AppState::default().apply(AppAction::SetTreeDisplay(config));
    assert_eq!(state.display_fields.get("byggdel").map(String::as_str), Some("namn"));
}

#[test]
fn restore_without_browser_defaults() {
    assert_eq!(AppState::restore(), AppState::default());
}

#[test]
fn views_have_paths() {
    let paths: Vec<_> = View::ALL.iter().map(|v| v.path()).collect();
    assert_eq!(paths, vec!["/", "/admin", "/products"]);
}

use super::*;

// =============================================================
// FieldType
// =============================================================

#[test]
fn field_type_decodes_known_tags() {
    let parsed: FieldType = serde_json::from_str("\"datetime\"").unwrap();
    assert_eq!(parsed, FieldType::Datetime);
    let parsed: FieldType = serde_json::from_str("\"richtext\"").unwrap();
    assert_eq!(parsed, FieldType::Richtext);
}

#[test]
fn field_type_unknown_tag_falls_back() {
    let parsed: FieldType = serde_json::from_str("\"colorpicker\"").unwrap();
    assert_eq!(parsed, FieldType::Unknown);
    assert_eq!(parsed.as_str(), "text");
}

#[test]
fn field_label_falls_back_to_field_name() {
    let field = ObjectField { field_name: "kravtext".into(), display_name: Some("  ".into()), ..ObjectField::default() };
    assert_eq!(field.label(), "kravtext");
    let field = ObjectField { field_name: "kravtext".into(), display_name: Some("Kravtext".into()), ..ObjectField::default() };
    assert_eq!(field.label(), "Kravtext");
}

#[test]
fn ordered_fields_puts_unordered_last() {
    let ty = ObjectType {
        id: 1,
        name: "Byggdel".into(),
        fields: vec![
            ObjectField { field_name: "c".into(), ..ObjectField::default() },
            ObjectField { field_name: "b".into(), display_order: Some(2), ..ObjectField::default() },
            ObjectField { field_name: "a".into(), display_order: Some(1), ..ObjectField::default() },
        ],
        ..ObjectType::default()
    };
    let names: Vec<_> = ty.ordered_fields().into_iter().map(|f| f.field_name).collect();
    assert_eq!(names, vec!["a", "b", "c"]);
}

// =============================================================
// ObjectRecord
// =============================================================

#[test]
fn object_record_decodes_backend_payload() {
    let raw = r#"{
        "id": 7,
        "auto_id": "BYG-0007",
        "object_type": {"id": 2, "name": "Byggdel"},
        "created_at": "2025-03-01T10:00:00",
        "updated_at": null,
        "created_by": null,
        "data": {"namn": "Yttervägg", "tjocklek": 240.0, "bärande": true}
    }"#;
    let obj: ObjectRecord = serde_json::from_str(raw).unwrap();
    assert_eq!(obj.id, 7);
    assert_eq!(obj.auto_id.as_deref(), Some("BYG-0007"));
    assert_eq!(obj.type_name(), "Byggdel");
    assert_eq!(obj.data.get("namn").and_then(|v| v.as_str()), Some("Yttervägg"));
}

#[test]
fn object_record_version_accepts_numbers() {
    let obj: ObjectRecord = serde_json::from_str(r#"{"id": 1, "version": 2}"#).unwrap();
    assert_eq!(obj.version.as_deref(), Some("2"));
    let obj: ObjectRecord = serde_json::from_str(r#"{"id": 1, "version": "003"}"#).unwrap();
    assert_eq!(obj.version.as_deref(), Some("003"));
}

#[test]
fn object_meta_prefers_top_level_then_data() {
    let obj: ObjectRecord =
        serde_json::from_str(r#"{"id": 1, "status": "Released", "data": {"status": "In work", "main_id": "M-1"}}"#)
            .unwrap();
    assert_eq!(obj.meta("status").as_deref(), Some("Released"));
    assert_eq!(obj.meta("main_id").as_deref(), Some("M-1"));
    assert_eq!(obj.meta("version"), None);
}

// =============================================================
// Relations / tree
// =============================================================

#[test]
fn relation_direction_decodes_lowercase() {
    let rel: Relation = serde_json::from_str(
        r#"{"id": 3, "source_object_id": 1, "target_object_id": 2, "relation_type": "består_av", "direction": "incoming"}"#,
    )
    .unwrap();
    assert_eq!(rel.direction, RelationDirection::Incoming);
}

#[test]
fn tree_node_accepts_numeric_and_string_ids() {
    let node: TreeNode = serde_json::from_str(
        r#"{"id": "group-1", "name": "Väggar", "type": "group", "children": [{"id": 12, "name": "Yttervägg"}]}"#,
    )
    .unwrap();
    assert!(node.is_group());
    assert_eq!(node.object_id(), None);
    assert_eq!(node.children[0].id, "12");
    assert_eq!(node.children[0].object_id(), Some(12));
}

#[test]
fn tree_file_label_prefers_description() {
    let file = TreeFile { id: 1, description: Some("Ritning".into()), filename: Some("a.pdf".into()), ..TreeFile::default() };
    assert_eq!(file.label(), "Ritning");
    let file = TreeFile { id: 1, original_filename: Some("plan.pdf".into()), ..TreeFile::default() };
    assert_eq!(file.label(), "plan.pdf");
}

#[test]
fn managed_list_items_default_active() {
    let item: ManagedListItem = serde_json::from_str(r#"{"id": 1, "value": "Betong"}"#).unwrap();
    assert!(item.is_active);
}

#[test]
fn field_payload_serializes_type_tag() {
    let payload = FieldPayload {
        field_name: "kategori".into(),
        display_name: "Kategori".into(),
        field_type: FieldType::Select,
        is_required: false,
        is_table_visible: true,
        help_text: None,
        field_options: Some(serde_json::json!({"source": "building_part_categories"})),
    };
    let json = serde_json::to_value(&payload).unwrap();
    assert_eq!(json["field_type"], "select");
    assert!(json.get("help_text").is_none());
}

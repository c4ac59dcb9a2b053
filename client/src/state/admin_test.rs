use super::*;

fn category_field() -> ObjectField {
    ObjectField {
        id: 4,
        field_name: "kategori".to_owned(),
        display_name: Some("Kategori".to_owned()),
        field_type: FieldType::Select,
        field_options: Some(serde_json::json!({"source": "building_part_categories"})),
        ..ObjectField::default()
    }
}

// =============================================================
// Field types
// =============================================================

#[test]
fn pseudo_type_maps_to_select() {
    assert_eq!(parse_field_type(CATEGORY_PSEUDO_TYPE), Some(FieldType::Select));
    assert_eq!(parse_field_type("decimal"), Some(FieldType::Decimal));
    assert_eq!(parse_field_type("color"), None);
    assert!(FIELD_TYPE_CHOICES.iter().all(|(value, _)| parse_field_type(value).is_some()));
}

#[test]
fn category_fields_are_labelled_and_round_trip() {
    let field = category_field();
    assert_eq!(field_type_label(&field), "byggdelskategori");

    let draft = FieldDraft::from_field(&field);
    assert_eq!(draft.field_type, CATEGORY_PSEUDO_TYPE);
    assert!(draft.options_locked());
    assert_eq!(draft.options_placeholder(), CATEGORY_OPTIONS_PLACEHOLDER);

    let payload = draft.to_payload().unwrap();
    assert_eq!(payload.field_type, FieldType::Select);
    assert_eq!(payload.field_options, Some(serde_json::json!({"source": "building_part_categories"})));
}

#[test]
fn plain_select_keeps_raw_options_text() {
    let field = ObjectField {
        field_name: "material".to_owned(),
        field_type: FieldType::Select,
        field_options: Some(serde_json::json!("Trä, Stål")),
        is_table_visible: Some(false),
        ..ObjectField::default()
    };
    assert_eq!(field_type_label(&field), "select");
    let draft = FieldDraft::from_field(&field);
    assert_eq!(draft.options_text, "Trä, Stål");
    assert!(!draft.is_table_visible);

    let payload = draft.to_payload().unwrap();
    assert_eq!(payload.field_options, Some(serde_json::json!("Trä, Stål")));
    assert_eq!(payload.display_name, "material");
}

#[test]
fn field_draft_defaults_to_visible_text() {
    let draft = FieldDraft::default();
    assert!(draft.is_table_visible);
    assert_eq!(draft.field_type, "text");
    assert_eq!(draft.to_payload(), Err(AdminError::MissingFieldName));
}

#[test]
fn unknown_field_type_is_rejected() {
    let draft = FieldDraft { field_name: "x".to_owned(), field_type: "color".to_owned(), ..FieldDraft::default() };
    assert_eq!(draft.to_payload(), Err(AdminError::UnknownFieldType("color".to_owned())));
}

// =============================================================
// Types / categories
// =============================================================

#[test]
fn type_draft_requires_name_and_uppercases_prefix() {
    assert_eq!(TypeDraft::default().to_payload(), Err(AdminError::MissingName));
    let draft = TypeDraft { name: " Byggdel ".to_owned(), description: String::new(), id_prefix: "byg".to_owned() };
    let payload = draft.to_payload().unwrap();
    assert_eq!(payload.name, "Byggdel");
    assert_eq!(payload.description, None);
    assert_eq!(payload.id_prefix.as_deref(), Some("BYG"));
}

#[test]
fn type_card_subtitle_falls_back_to_auto() {
    let mut ty = ObjectType { name: "Byggdel".to_owned(), fields: vec![category_field()], ..ObjectType::default() };
    assert_eq!(type_card_subtitle(&ty), "1 fält • AUTO-001");
    ty.id_prefix = Some("BYG".to_owned());
    assert_eq!(type_card_subtitle(&ty), "1 fält • BYG-001");
}

#[test]
fn category_name_rejects_blank() {
    assert_eq!(category_name("  "), Err(AdminError::EmptyCategoryName));
    assert_eq!(category_name(" Stomme "), Ok("Stomme".to_owned()));
}

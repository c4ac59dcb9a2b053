use super::*;

use crate::net::types::{ManagedListItem, ObjectTypeRef};

fn field(name: &str, field_type: FieldType, required: bool) -> ObjectField {
    ObjectField {
        field_name: name.to_owned(),
        display_name: Some(name.to_uppercase()),
        field_type,
        is_required: required,
        ..ObjectField::default()
    }
}

fn object_type(name: &str, fields: Vec<ObjectField>) -> ObjectType {
    ObjectType { id: 9, name: name.to_owned(), fields, ..ObjectType::default() }
}

// =============================================================
// Input mapping
// =============================================================

#[test]
fn input_kinds_follow_field_types() {
    assert_eq!(input_kind(FieldType::Textarea), InputKind::Textarea(4));
    assert_eq!(input_kind(FieldType::Number), InputKind::Number("any"));
    assert_eq!(input_kind(FieldType::Decimal), InputKind::Number("0.01"));
    assert_eq!(input_kind(FieldType::Datetime), InputKind::DatetimeLocal);
    assert_eq!(input_kind(FieldType::Unknown), InputKind::Text);
}

#[test]
fn layout_class_widens_long_inputs() {
    assert_eq!(layout_class(FieldType::Richtext), "form-group-full");
    assert_eq!(layout_class(FieldType::Textarea), "form-group-full");
    assert_eq!(layout_class(FieldType::Select), "form-group-compact");
}

#[test]
fn field_label_marks_required() {
    assert_eq!(field_label(&field("namn", FieldType::Text, true)), "NAMN *");
    assert_eq!(field_label(&field("namn", FieldType::Text, false)), "NAMN");
}

#[test]
fn checkbox_caption_defaults() {
    let mut f = field("aktiv", FieldType::Boolean, false);
    assert_eq!(checkbox_caption(&f), "Aktivera");
    f.help_text = Some("Bärande konstruktion".to_owned());
    assert_eq!(checkbox_caption(&f), "Bärande konstruktion");
}

// =============================================================
// Options
// =============================================================

#[test]
fn parse_options_accepts_every_shape() {
    assert_eq!(parse_options(&serde_json::json!(["A", "B"])), vec!["A", "B"]);
    assert_eq!(parse_options(&serde_json::json!({"values": ["X"]})), vec!["X"]);
    assert_eq!(parse_options(&serde_json::json!({"a": "Ett", "b": null})), vec!["Ett"]);
    assert_eq!(parse_options(&serde_json::json!("[\"Trä\", \"Stål\"]")), vec!["Trä", "Stål"]);
    assert_eq!(parse_options(&serde_json::json!("Trä, Stål ,, Betong")), vec!["Trä", "Stål", "Betong"]);
    assert!(parse_options(&serde_json::json!({"source": "building_part_categories"})).is_empty());
    assert!(parse_options(&serde_json::Value::Null).is_empty());
}

#[test]
fn option_source_detects_dynamic_sources() {
    let mut f = field("kategori", FieldType::Select, false);
    f.field_options = Some(serde_json::json!({"source": "building_part_categories"}));
    assert_eq!(option_source(&f), OptionSource::BuildingPartCategories);

    f.field_options = Some(serde_json::json!("{\"source\": \"managed_list\", \"list_id\": \"4\"}"));
    assert_eq!(option_source(&f), OptionSource::ManagedList(4));

    f.field_options = Some(serde_json::json!({"source": "managed_list", "list_id": 0}));
    assert_eq!(option_source(&f), OptionSource::Invalid);

    f.field_options = Some(serde_json::json!("Ja,Nej"));
    assert_eq!(option_source(&f), OptionSource::Static(vec!["Ja".to_owned(), "Nej".to_owned()]));
}

#[test]
fn required_lookups_collects_sources() {
    let mut a = field("kategori", FieldType::Select, false);
    a.field_options = Some(serde_json::json!({"source": "building_part_categories"}));
    let mut b = field("material", FieldType::Select, false);
    b.field_options = Some(serde_json::json!({"source": "managed_list", "list_id": 2}));
    let mut c = field("text", FieldType::Text, false);
    c.field_options = Some(serde_json::json!({"source": "managed_list", "list_id": 7}));

    let (categories, lists) = required_lookups(&[a, b, c]);
    assert!(categories);
    assert_eq!(lists.into_iter().collect::<Vec<_>>(), vec![2]);
}

#[test]
fn managed_list_values_are_active_and_sorted() {
    let list = ManagedList {
        id: 2,
        name: "Material".to_owned(),
        items: vec![
            ManagedListItem { id: 1, value: "Stål".to_owned(), sort_order: Some(2), is_active: true, ..Default::default() },
            ManagedListItem { id: 2, value: "Trä".to_owned(), sort_order: Some(1), is_active: true, ..Default::default() },
            ManagedListItem { id: 3, value: "Asbest".to_owned(), sort_order: Some(0), is_active: false, ..Default::default() },
        ],
        ..ManagedList::default()
    };
    assert_eq!(managed_list_values(&list), vec!["Trä", "Stål"]);
}

#[test]
fn select_options_resolve_lookups() {
    let mut f = field("kategori", FieldType::Select, false);
    f.field_options = Some(serde_json::json!({"source": "building_part_categories"}));
    let lookups = OptionLookups {
        categories: vec![
            BuildingPartCategory { id: 1, name: "Stomme".to_owned(), is_active: true, ..Default::default() },
            BuildingPartCategory { id: 2, name: "Gammal".to_owned(), is_active: false, ..Default::default() },
        ],
        managed_lists: BTreeMap::from([(5, vec!["Röd".to_owned()])]),
    };
    assert_eq!(select_options(&f, &lookups), vec!["Stomme"]);

    f.field_options = Some(serde_json::json!({"source": "managed_list", "list_id": 5}));
    assert_eq!(select_options(&f, &lookups), vec!["Röd"]);
}

// =============================================================
// Connection naming
// =============================================================

#[test]
fn connection_type_detection_normalizes_name() {
    assert!(is_connection_type("Anslutning"));
    assert!(is_connection_type("Vägg-anslutning 2"));
    assert!(!is_connection_type("Byggdel"));
}

#[test]
fn connection_name_orders_parts() {
    assert_eq!(connection_name("Vägg", "Bjälklag"), "Bjälklag - Vägg");
    assert_eq!(connection_name(" Ö-del ", "Z-del"), "Z-del - Ö-del");
    assert_eq!(connection_name("Vägg", "  "), "");
}

#[test]
fn connection_form_generates_read_only_name() {
    let ty = object_type(
        "Anslutning",
        vec![
            field("namn", FieldType::Text, true),
            field("del_a", FieldType::Text, true),
            field("Del B", FieldType::Text, true),
        ],
    );
    let mut form = FormState::new(&ty, None, FormMode::Create);
    assert!(form.is_read_only("namn"));

    form.set_text("del_a", "Vägg".to_owned());
    assert_eq!(form.text("namn"), "");
    form.set_text("Del B", "Bjälklag".to_owned());
    assert_eq!(form.text("namn"), "Bjälklag - Vägg");

    form.set_text("namn", "Manuellt".to_owned());
    assert_eq!(form.text("namn"), "Bjälklag - Vägg");
}

// =============================================================
// FormState
// =============================================================

#[test]
fn new_form_prefills_existing_values() {
    let ty = object_type(
        "Byggdel",
        vec![
            field("namn", FieldType::Text, true),
            field("datum", FieldType::Date, false),
            field("bärande", FieldType::Boolean, false),
            field("tjocklek", FieldType::Number, false),
        ],
    );
    let existing = ObjectRecord {
        id: 3,
        object_type: Some(ObjectTypeRef { name: "Byggdel".to_owned(), ..ObjectTypeRef::default() }),
        status: Some("Released".to_owned()),
        data: serde_json::json!({
            "namn": "Yttervägg",
            "datum": "2025-02-03T00:00:00",
            "bärande": true,
            "tjocklek": 240.0
        })
        .as_object()
        .cloned()
        .unwrap(),
        ..ObjectRecord::default()
    };
    let form = FormState::new(&ty, Some(&existing), FormMode::Edit);
    assert_eq!(form.text("namn"), "Yttervägg");
    assert_eq!(form.text("datum"), "2025-02-03");
    assert!(form.checked("bärande"));
    assert_eq!(form.text("tjocklek"), "240");
    assert_eq!(form.status, "Released");
    assert_eq!(form.version, DEFAULT_VERSION);
}

#[test]
fn validate_rejects_empty_schema() {
    let mut form = FormState::new(&object_type("Tom", vec![]), None, FormMode::Create);
    assert_eq!(form.validate(), Err(FormError::NoFields));
}

#[test]
fn validate_reports_blank_required_fields() {
    let ty = object_type(
        "Byggdel",
        vec![
            field("namn", FieldType::Text, true),
            field("beskrivning", FieldType::Richtext, true),
            field("aktiv", FieldType::Boolean, true),
            field("notering", FieldType::Text, false),
        ],
    );
    let mut form = FormState::new(&ty, None, FormMode::Create);
    form.set_text("namn", "   ".to_owned());
    form.set_text("beskrivning", "<p> </p>".to_owned());

    let err = form.validate().unwrap_err();
    assert_eq!(err, FormError::MissingRequired(vec!["NAMN".to_owned(), "BESKRIVNING".to_owned()]));
    assert!(form.errors.contains("namn"));
    assert!(!form.errors.contains("aktiv"));

    form.set_text("namn", "Vägg".to_owned());
    assert!(!form.errors.contains("namn"));
    form.set_text("beskrivning", "<p>Text</p>".to_owned());
    assert_eq!(form.validate(), Ok(()));
    assert!(form.errors.is_empty());
}

#[test]
fn to_data_converts_types_and_metadata() {
    let ty = object_type(
        "Byggdel",
        vec![
            field("namn", FieldType::Text, false),
            field("tjocklek", FieldType::Decimal, false),
            field("antal", FieldType::Number, false),
            field("aktiv", FieldType::Boolean, false),
            field("notering", FieldType::Textarea, false),
        ],
    );
    let mut form = FormState::new(&ty, None, FormMode::Create);
    form.set_text("namn", "Vägg".to_owned());
    form.set_text("tjocklek", "12.5".to_owned());
    form.set_text("antal", "abc".to_owned());
    form.set_checked("aktiv", true);

    let data = form.to_data();
    assert_eq!(data["status"], "In work");
    assert_eq!(data["version"], "001");
    assert!(data.get("main_id").is_none());
    assert_eq!(data["namn"], "Vägg");
    assert_eq!(data["tjocklek"], 12.5);
    assert_eq!(data["antal"], serde_json::Value::Null);
    assert_eq!(data["aktiv"], true);
    assert_eq!(data["notering"], serde_json::Value::Null);
}

#[test]
fn edit_mode_omits_creation_metadata() {
    let ty = object_type("Byggdel", vec![field("namn", FieldType::Text, false)]);
    let form = FormState::new(&ty, None, FormMode::Edit);
    let data = form.to_data();
    assert!(data.get("version").is_none());
    assert_eq!(data["status"], "In work");
}

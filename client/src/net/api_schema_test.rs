use super::*;

#[test]
fn object_type_endpoints_format_expected_paths() {
    assert_eq!(object_type_endpoint(4), "/object-types/4");
    assert_eq!(fields_endpoint(4), "/object-types/4/fields");
    assert_eq!(field_endpoint(4, 17), "/object-types/4/fields/17");
}

#[test]
fn lookup_endpoints_format_expected_paths() {
    assert_eq!(managed_list_endpoint(2), "/managed-lists/2");
    assert_eq!(category_endpoint(8), "/building-part-categories/8");
}

#[test]
fn tree_display_config_decodes_by_type_name() {
    let raw = r#"{
        "Dörr": {
            "object_type_id": 3,
            "object_type_name": "Dörr",
            "tree_view_name_field": "benamning",
            "available_fields": [{"field_name": "benamning", "display_name": "Benämning"}]
        },
        "Vägg": {"object_type_id": 4, "object_type_name": "Vägg", "tree_view_name_field": null}
    }"#;
    let map: TreeDisplayMap = serde_json::from_str(raw).unwrap();
    assert_eq!(map["Dörr"].tree_view_name_field.as_deref(), Some("benamning"));
    assert_eq!(map["Vägg"].tree_view_name_field, None);
}

#[test]
fn stats_decodes_counts_by_type() {
    let raw = r#"{"total_objects": 5, "objects_by_type": {"Byggdel": 3, "Produkt": 2}, "recent_objects": []}"#;
    let stats: Stats = serde_json::from_str(raw).unwrap();
    assert_eq!(stats.total_objects, 5);
    assert_eq!(stats.objects_by_type.get("Byggdel"), Some(&3));
}

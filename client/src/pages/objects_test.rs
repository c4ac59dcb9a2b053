use super::*;

#[test]
fn list_query_filters_by_selected_type() {
    assert_eq!(list_query(Some("Byggdel")).object_type.as_deref(), Some("Byggdel"));
    assert_eq!(list_query(None), ObjectQuery::default());
}

#[test]
fn wrapper_class_tracks_panel() {
    assert_eq!(list_wrapper_class(false), "objects-container-wrapper");
    assert!(list_wrapper_class(true).ends_with("panel-open"));
}

#[test]
fn type_filter_marks_current_type() {
    let types = vec![
        ObjectType { id: 1, name: "Byggdel".to_owned(), ..ObjectType::default() },
        ObjectType { id: 2, name: "Produkt".to_owned(), ..ObjectType::default() },
    ];
    assert_eq!(
        type_filter_options(&types, "Produkt"),
        vec![("Byggdel".to_owned(), false), ("Produkt".to_owned(), true)]
    );
    assert!(type_filter_options(&types, "").iter().all(|(_, selected)| !selected));
}

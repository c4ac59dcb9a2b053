use super::*;

#[test]
fn object_endpoints_format_expected_paths() {
    assert_eq!(object_endpoint(12), "/objects/12");
    assert_eq!(duplicate_endpoint(12), "/objects/12/duplicate");
    assert_eq!(linked_files_endpoint(12), "/objects/12/linked-file-objects");
}

#[test]
fn relation_endpoints_format_expected_paths() {
    assert_eq!(relations_endpoint(5), "/objects/5/relations");
    assert_eq!(relation_endpoint(5, 9), "/objects/5/relations/9");
}

#[test]
fn document_endpoints_format_expected_paths() {
    assert_eq!(documents_endpoint(3), "/objects/3/documents");
    assert_eq!(document_endpoint(44), "/objects/documents/44");
}

#[test]
fn document_download_url_toggles_attachment_flag() {
    assert_eq!(document_download_url(44, true), "/api/objects/documents/44/download?download=1");
    assert_eq!(document_download_url(44, false), "/api/objects/documents/44/download");
}

#[test]
fn object_query_pairs_only_include_set_filters() {
    let query = ObjectQuery {
        object_type: Some("Byggdel".to_owned()),
        search: Some(String::new()),
        page: Some(2),
        per_page: None,
        minimal: true,
    };
    let pairs = object_query_pairs(&query);
    assert_eq!(
        pairs,
        vec![
            ("type".to_owned(), "Byggdel".to_owned()),
            ("page".to_owned(), "2".to_owned()),
            ("minimal".to_owned(), "true".to_owned()),
        ]
    );
    assert!(object_query_pairs(&ObjectQuery::default()).is_empty());
}

#[test]
fn search_query_pairs_include_optional_type() {
    assert_eq!(search_query_pairs("vägg", None), vec![("q".to_owned(), "vägg".to_owned())]);
    assert_eq!(
        search_query_pairs("vägg", Some("Byggdel")),
        vec![("q".to_owned(), "vägg".to_owned()), ("type".to_owned(), "Byggdel".to_owned())]
    );
}

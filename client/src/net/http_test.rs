use super::*;

fn raw(status: u16, content_type: Option<&str>, body: &str) -> RawResponse {
    RawResponse {
        status,
        status_text: match status {
            404 => "NOT FOUND".to_owned(),
            500 => "INTERNAL SERVER ERROR".to_owned(),
            _ => "OK".to_owned(),
        },
        content_type: content_type.map(str::to_owned),
        body: body.to_owned(),
    }
}

// =============================================================
// URLs
// =============================================================

#[test]
fn api_url_joins_base() {
    assert_eq!(api_url("/objects"), "/api/objects");
    assert_eq!(api_url("objects/3"), "/api/objects/3");
}

#[test]
fn query_pairs_skips_empty_values() {
    let pairs = query_pairs(&[
        ("type", Some("Byggdel".to_owned())),
        ("search", Some("   ".to_owned())),
        ("page", None),
        ("minimal", Some("true".to_owned())),
    ]);
    assert_eq!(
        pairs,
        vec![("type".to_owned(), "Byggdel".to_owned()), ("minimal".to_owned(), "true".to_owned())]
    );
}

#[test]
fn json_content_type_detection() {
    assert!(is_json_content_type(Some("application/json")));
    assert!(is_json_content_type(Some("Application/JSON; charset=utf-8")));
    assert!(!is_json_content_type(Some("text/html")));
    assert!(!is_json_content_type(None));
}

// =============================================================
// decode_response
// =============================================================

#[test]
fn decode_success_body() {
    let value: serde_json::Value = decode_response(&raw(200, Some("application/json"), r#"{"id": 4}"#)).unwrap();
    assert_eq!(value["id"], 4);
}

#[test]
fn decode_non_json_reports_status_line() {
    let err = decode_response::<serde_json::Value>(&raw(404, Some("text/html"), "<h1>nope</h1>")).unwrap_err();
    assert_eq!(err, ApiError::NotJson { status: 404, status_text: "NOT FOUND".to_owned() });
    assert_eq!(err.to_string(), "Server error: 404 NOT FOUND");
}

#[test]
fn decode_error_uses_error_and_details() {
    let body = r#"{"error": "Validation failed", "details": ["Namn är obligatoriskt", "Kategori saknas"]}"#;
    let err = decode_response::<serde_json::Value>(&raw(400, Some("application/json"), body)).unwrap_err();
    assert_eq!(
        err,
        ApiError::Status {
            status: 400,
            message: "Validation failed".to_owned(),
            details: vec!["Namn är obligatoriskt".to_owned(), "Kategori saknas".to_owned()],
        }
    );
    assert_eq!(err.user_message("Kunde inte spara"), "Namn är obligatoriskt, Kategori saknas");
}

#[test]
fn decode_error_without_message_uses_default() {
    let err = decode_response::<serde_json::Value>(&raw(500, Some("application/json"), "{}")).unwrap_err();
    assert_eq!(err.to_string(), DEFAULT_ERROR_MESSAGE);
    assert_eq!(err.status(), Some(500));
}

#[test]
fn decode_error_accepts_string_details() {
    let body = r#"{"error": "Failed to create object", "details": "duplicate key"}"#;
    let err = decode_response::<serde_json::Value>(&raw(500, Some("application/json"), body)).unwrap_err();
    assert_eq!(err.user_message("x"), "duplicate key");
}

#[test]
fn decode_shape_mismatch_is_decode_error() {
    let err = decode_response::<Vec<i64>>(&raw(200, Some("application/json"), r#"{"id": 1}"#)).unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

#[test]
fn user_message_falls_back_for_transport_errors() {
    assert_eq!(ApiError::Network("offline".into()).user_message("Kunde inte ladda objekt"), "Kunde inte ladda objekt");
    assert_eq!(ApiError::Unavailable.user_message("fallback"), "fallback");
}

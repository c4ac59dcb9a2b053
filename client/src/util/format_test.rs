use super::*;

// =============================================================
// Dates
// =============================================================

#[test]
fn format_date_uses_swedish_short_month() {
    assert_eq!(format_date(Some("2025-03-01T10:00:00")), "1 mars 2025");
    assert_eq!(format_date(Some("2024-12-24")), "24 dec. 2024");
}

#[test]
fn format_date_handles_missing_and_garbage() {
    assert_eq!(format_date(None), "-");
    assert_eq!(format_date(Some("  ")), "-");
    assert_eq!(format_date(Some("igår")), "igår");
}

#[test]
fn format_datetime_includes_hours_and_minutes() {
    assert_eq!(format_datetime(Some("2025-06-07T08:05:59.123456")), "7 juni 2025 08:05");
    assert_eq!(format_datetime(Some("2025-06-07")), "7 juni 2025 00:00");
}

#[test]
fn input_values_match_html_formats() {
    assert_eq!(date_input_value("2025-03-01T10:00:00"), "2025-03-01");
    assert_eq!(datetime_input_value("2025-03-01 10:30:00"), "2025-03-01T10:30");
    assert_eq!(datetime_input_value("not a date"), "");
}

// =============================================================
// Numbers
// =============================================================

#[test]
fn format_number_groups_thousands_with_nbsp() {
    assert_eq!(format_number_sv(1_234_567.0), "1\u{a0}234\u{a0}567");
    assert_eq!(format_number_sv(1234.5), "1\u{a0}234,5");
    assert_eq!(format_number_sv(0.125_4), "0,125");
}

#[test]
fn format_number_uses_minus_sign() {
    assert_eq!(format_number_sv(-42.0), "\u{2212}42");
    assert_eq!(format_number_sv(-0.0001), "0");
}

#[test]
fn format_file_size_scales_units() {
    assert_eq!(format_file_size(512), "512 B");
    assert_eq!(format_file_size(1536), "1.5 KB");
    assert_eq!(format_file_size(2 * 1024 * 1024), "2.0 MB");
}

// =============================================================
// Field values
// =============================================================

#[test]
fn field_value_booleans_are_swedish() {
    assert_eq!(format_field_value(Some(&serde_json::json!(true)), FieldType::Boolean), "Ja");
    assert_eq!(format_field_value(Some(&serde_json::json!(false)), FieldType::Boolean), "Nej");
}

#[test]
fn field_value_numeric_booleans_follow_truthiness() {
    assert_eq!(format_field_value(Some(&serde_json::json!(1)), FieldType::Boolean), "Ja");
    assert_eq!(format_field_value(Some(&serde_json::json!(0)), FieldType::Boolean), "Nej");
    assert_eq!(format_field_value(Some(&serde_json::json!("on")), FieldType::Boolean), "Ja");
}

#[test]
fn field_value_datetime_shows_date_only() {
    let value = serde_json::json!("2025-03-01T10:05:00");
    assert_eq!(format_field_value(Some(&value), FieldType::Datetime), "1 mars 2025");
}

#[test]
fn field_value_empty_is_dash() {
    assert_eq!(format_field_value(None, FieldType::Text), "-");
    assert_eq!(format_field_value(Some(&serde_json::Value::Null), FieldType::Number), "-");
    assert_eq!(format_field_value(Some(&serde_json::json!("")), FieldType::Text), "-");
}

#[test]
fn field_value_numbers_and_dates() {
    assert_eq!(format_field_value(Some(&serde_json::json!(2400.0)), FieldType::Decimal), "2\u{a0}400");
    assert_eq!(format_field_value(Some(&serde_json::json!("12.5")), FieldType::Number), "12,5");
    assert_eq!(format_field_value(Some(&serde_json::json!("2025-01-15")), FieldType::Date), "15 jan. 2025");
}

#[test]
fn field_value_richtext_is_plain_text() {
    let html = serde_json::json!("<p>Bärande <strong>vägg</strong></p><p>&amp; stomme</p>");
    assert_eq!(format_field_value(Some(&html), FieldType::Richtext), "Bärande vägg & stomme");
}

#[test]
fn strip_html_tags_collapses_whitespace() {
    assert_eq!(strip_html_tags("<p>  </p>"), "");
    assert_eq!(strip_html_tags("a<br>b"), "a b");
}

// =============================================================
// Labels / colors / files
// =============================================================

#[test]
fn status_class_defaults_to_koncept() {
    assert_eq!(status_class("Godkänd"), "godkand");
    assert_eq!(status_class("Okänd"), "koncept");
}

#[test]
fn relation_type_label_translates_known_tags() {
    assert_eq!(relation_type_label("består_av"), "Består av");
    assert_eq!(relation_type_label("ingår_i"), "Ingår i");
    assert_eq!(relation_type_label("ansluter_till"), "ansluter_till");
    assert!(RELATION_TYPES.iter().all(|t| relation_type_label(t) != *t));
}

#[test]
fn type_color_prefers_custom_then_default() {
    assert_eq!(type_color("Byggdel", Some("#000000")), "#000000");
    assert_eq!(type_color("Byggdel", Some("  ")), "#3498db");
    assert_eq!(type_color("Okänd", None), DEFAULT_TYPE_COLOR);
}

#[test]
fn pdf_detection_and_inline_url() {
    assert!(is_pdf(Some("application/pdf"), "ritning"));
    assert!(is_pdf(None, "Ritning.PDF?x=1"));
    assert!(!is_pdf(Some("image/png"), "bild.png"));
    assert_eq!(pdf_open_url("/api/objects/documents/4/download"), "/api/objects/documents/4/download?inline=1");
    assert_eq!(pdf_open_url("/files/a.pdf?v=2#page=3"), "/files/a.pdf?v=2&inline=1#page=3");
}

#[test]
fn file_icon_by_extension() {
    assert_eq!(file_icon("Ritning.DWG"), "📐");
    assert_eq!(file_icon("offert.xlsx"), "📊");
    assert_eq!(file_icon("README"), "📎");
}

#[test]
fn upload_percent_is_bounded() {
    assert_eq!(upload_percent(1, 4), 25);
    assert_eq!(upload_percent(3, 3), 100);
    assert_eq!(upload_percent(5, 3), 100);
    assert_eq!(upload_percent(0, 0), 0);
}

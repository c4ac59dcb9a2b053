//! Presentation formatting: dates, numbers, labels and badge colors.
//!
//! DESIGN
//! ======
//! Output follows Swedish (`sv-SE`) conventions: `1 mars 2025` dates,
//! non-breaking-space digit groups and a decimal comma. Timestamps from the
//! backend are naive ISO strings and are shown as sent, without timezone
//! conversion.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use time::macros::format_description;
use time::{Date, PrimitiveDateTime, Time};

use crate::net::types::FieldType;
use crate::util::display_name::value_text;

/// Placeholder for absent values.
pub const EMPTY_VALUE: &str = "-";

/// Badge color for types without a configured or built-in color.
pub const DEFAULT_TYPE_COLOR: &str = "#95a5a6";

const SV_SHORT_MONTHS: [&str; 12] =
    ["jan.", "feb.", "mars", "apr.", "maj", "juni", "juli", "aug.", "sep.", "okt.", "nov.", "dec."];

const DEFAULT_TYPE_COLORS: [(&str, &str); 8] = [
    ("Byggdel", "#3498db"),
    ("Produkt", "#2ecc71"),
    ("Kravställning", "#e74c3c"),
    ("Anslutning", "#f39c12"),
    ("Ritningsobjekt", "#9b59b6"),
    ("Filobjekt", "#9b59b6"),
    ("Egenskap", "#1abc9c"),
    ("Anvisning", "#34495e"),
];

/// Colors offered when an admin picks a custom type color.
pub const TYPE_COLOR_PALETTE: [&str; 20] = [
    "#0EA5E9", "#14B8A6", "#22C55E", "#84CC16", "#EAB308", "#F97316", "#EF4444", "#EC4899", "#8B5CF6", "#6366F1",
    "#06B6D4", "#64748B", "#3498db", "#2ecc71", "#e74c3c", "#f39c12", "#9b59b6", "#1abc9c", "#34495e", "#95a5a6",
];

// =============================================================================
// DATES
// =============================================================================

/// Parse `YYYY-MM-DD` with an optional `THH:MM[:SS...]` (or space) suffix.
/// Seconds, fractions and offsets are ignored.
pub fn parse_timestamp(raw: &str) -> Option<PrimitiveDateTime> {
    let raw = raw.trim();
    let date = Date::parse(raw.get(..10)?, format_description!("[year]-[month]-[day]")).ok()?;
    let time = raw
        .get(11..16)
        .filter(|_| matches!(raw.as_bytes().get(10), Some(b'T' | b' ')))
        .and_then(|hm| Time::parse(hm, format_description!("[hour]:[minute]")).ok())
        .unwrap_or(Time::MIDNIGHT);
    Some(PrimitiveDateTime::new(date, time))
}

fn sv_date(date: Date) -> String {
    let month = SV_SHORT_MONTHS[usize::from(u8::from(date.month())) - 1];
    format!("{} {month} {}", date.day(), date.year())
}

/// `2025-03-01T10:00:00` → `1 mars 2025`. Empty input gives `-`.
pub fn format_date(raw: Option<&str>) -> String {
    let Some(raw) = raw.filter(|r| !r.trim().is_empty()) else {
        return EMPTY_VALUE.to_owned();
    };
    parse_timestamp(raw).map_or_else(|| raw.to_owned(), |dt| sv_date(dt.date()))
}

/// `2025-03-01T10:05:00` → `1 mars 2025 10:05`.
pub fn format_datetime(raw: Option<&str>) -> String {
    let Some(raw) = raw.filter(|r| !r.trim().is_empty()) else {
        return EMPTY_VALUE.to_owned();
    };
    parse_timestamp(raw).map_or_else(
        || raw.to_owned(),
        |dt| format!("{} {:02}:{:02}", sv_date(dt.date()), dt.hour(), dt.minute()),
    )
}

/// Value for `<input type="date">`.
pub fn date_input_value(raw: &str) -> String {
    parse_timestamp(raw).map_or_else(String::new, |dt| {
        format!("{:04}-{:02}-{:02}", dt.year(), u8::from(dt.month()), dt.day())
    })
}

/// Value for `<input type="datetime-local">`.
pub fn datetime_input_value(raw: &str) -> String {
    parse_timestamp(raw).map_or_else(String::new, |dt| {
        format!(
            "{:04}-{:02}-{:02}T{:02}:{:02}",
            dt.year(),
            u8::from(dt.month()),
            dt.day(),
            dt.hour(),
            dt.minute()
        )
    })
}

// =============================================================================
// NUMBERS
// =============================================================================

/// Swedish number formatting with up to three decimals.
pub fn format_number_sv(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let rounded = format!("{:.3}", value.abs());
    let (int_part, frac_part) = rounded.split_once('.').unwrap_or((rounded.as_str(), ""));
    let frac = frac_part.trim_end_matches('0');

    let digits: Vec<char> = int_part.chars().collect();
    let mut out = String::new();
    if value < 0.0 && (int_part != "0" || !frac.is_empty()) {
        out.push('\u{2212}');
    }
    for (i, c) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('\u{a0}');
        }
        out.push(*c);
    }
    if !frac.is_empty() {
        out.push(',');
        out.push_str(frac);
    }
    out
}

/// Human file size: `512 B`, `1.5 KB`, `2.0 MB`.
#[allow(clippy::cast_precision_loss)]
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["KB", "MB", "GB", "TB"];
    if bytes < 1024 {
        return format!("{bytes} B");
    }
    let mut size = bytes as f64 / 1024.0;
    let mut unit = 0;
    while size >= 1024.0 && unit < UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }
    format!("{size:.1} {}", UNITS[unit])
}

// =============================================================================
// FIELD VALUES
// =============================================================================

/// Boolean in Swedish.
pub fn format_bool(value: bool) -> &'static str {
    if value { "Ja" } else { "Nej" }
}

/// Checkbox state of a stored value: `true`, `"true"`, `"1"`, `"on"` or a non-zero number.
pub fn is_truthy(value: &serde_json::Value) -> bool {
    match value {
        serde_json::Value::Bool(b) => *b,
        serde_json::Value::String(s) => matches!(s.as_str(), "true" | "1" | "on"),
        serde_json::Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        _ => false,
    }
}

/// Format a data value for read-only display according to its field type.
pub fn format_field_value(value: Option<&serde_json::Value>, field_type: FieldType) -> String {
    let Some(value) = value.filter(|v| !v.is_null()) else {
        return EMPTY_VALUE.to_owned();
    };
    let text = match field_type {
        FieldType::Boolean => match value {
            serde_json::Value::Bool(_) | serde_json::Value::String(_) | serde_json::Value::Number(_) => {
                format_bool(is_truthy(value)).to_owned()
            }
            other => value_text(other).unwrap_or_default(),
        },
        FieldType::Date | FieldType::Datetime => format_date(value.as_str()),
        FieldType::Number | FieldType::Decimal => {
            let number = value.as_f64().or_else(|| value.as_str().and_then(|s| s.trim().parse().ok()));
            number.map_or_else(|| value_text(value).unwrap_or_default(), format_number_sv)
        }
        FieldType::Richtext => strip_html_tags(value.as_str().unwrap_or_default()),
        _ => value_text(value).unwrap_or_default(),
    };
    if text.trim().is_empty() { EMPTY_VALUE.to_owned() } else { text }
}

/// Remove tags and decode the common entities, leaving trimmed text.
pub fn strip_html_tags(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut in_tag = false;
    for c in html.chars() {
        match c {
            '<' => in_tag = true,
            '>' if in_tag => {
                in_tag = false;
                out.push(' ');
            }
            _ if !in_tag => out.push(c),
            _ => {}
        }
    }
    let decoded = out
        .replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#039;", "'")
        .replace("&amp;", "&");
    decoded.split_whitespace().collect::<Vec<_>>().join(" ")
}

// =============================================================================
// LABELS / COLORS
// =============================================================================

/// CSS modifier for a product status badge.
pub fn status_class(status: &str) -> &'static str {
    match status {
        "Under utveckling" => "under-utveckling",
        "Godkänd" => "godkand",
        "Obsolete" => "obsolete",
        _ => "koncept",
    }
}

/// Relation type tags offered when linking objects.
pub const RELATION_TYPES: [&str; 9] = [
    "består_av",
    "variant_av",
    "ersätter",
    "ersätts_av",
    "kopplas_till",
    "dokumenterar",
    "specificerar",
    "relaterad_till",
    "ingår_i",
];

/// Swedish label for a relation type tag; unknown tags are shown as-is.
pub fn relation_type_label(relation_type: &str) -> String {
    let label = match relation_type {
        "består_av" => "Består av",
        "variant_av" => "Variant av",
        "ersätter" => "Ersätter",
        "ersätts_av" => "Ersätts av",
        "kopplas_till" => "Kopplas till",
        "dokumenterar" => "Dokumenterar",
        "specificerar" => "Specificerar",
        "relaterad_till" => "Relaterad till",
        "ingår_i" => "Ingår i",
        other => other,
    };
    label.to_owned()
}

/// Badge color for a type: custom color, then built-in default, then gray.
pub fn type_color(type_name: &str, custom: Option<&str>) -> String {
    if let Some(color) = custom.map(str::trim).filter(|c| !c.is_empty()) {
        return color.to_owned();
    }
    DEFAULT_TYPE_COLORS
        .iter()
        .find(|(name, _)| *name == type_name)
        .map_or(DEFAULT_TYPE_COLOR, |(_, color)| color)
        .to_owned()
}

// =============================================================================
// FILES
// =============================================================================

/// Whether a file is a PDF, by mime type or extension.
pub fn is_pdf(mime_type: Option<&str>, filename: &str) -> bool {
    if mime_type.is_some_and(|m| m.eq_ignore_ascii_case("application/pdf")) {
        return true;
    }
    let clean = filename.split(['?', '#']).next().unwrap_or_default();
    clean.to_ascii_lowercase().ends_with(".pdf")
}

/// Icon for a document list row, by file extension.
pub fn file_icon(filename: &str) -> &'static str {
    let ext = filename.rsplit_once('.').map(|(_, ext)| ext.to_ascii_lowercase()).unwrap_or_default();
    match ext.as_str() {
        "pdf" => "📄",
        "doc" | "docx" => "📝",
        "xls" | "xlsx" => "📊",
        "jpg" | "jpeg" | "png" | "gif" | "webp" => "🖼️",
        "dwg" | "dxf" => "📐",
        "rvt" => "🏗️",
        _ => "📎",
    }
}

/// Percent done after `finished` of `total` sequential uploads.
pub fn upload_percent(finished: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    u32::try_from(finished.min(total) * 100 / total).unwrap_or(100)
}

/// Ask the backend to serve a PDF inline so it opens in the browser.
pub fn pdf_open_url(url: &str) -> String {
    let (base, fragment) = url.split_once('#').map_or((url, None), |(b, f)| (b, Some(f)));
    let separator = if base.contains('?') { '&' } else { '?' };
    let mut out = format!("{base}{separator}inline=1");
    if let Some(fragment) = fragment {
        out.push('#');
        out.push_str(fragment);
    }
    out
}

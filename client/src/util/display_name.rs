//! Display-name resolution for objects in lists, panels and pickers.
//!
//! DESIGN
//! ======
//! Each object type may configure which data field names its objects
//! (`tree_view_name_field`). Resolution tries that field, then a fixed
//! fallback list, then the backend `auto_id`. Key lookup is case-insensitive
//! because field names are user-entered and drift in casing between types.

#[cfg(test)]
#[path = "display_name_test.rs"]
mod display_name_test;

use std::collections::BTreeMap;

use crate::net::types::{DataMap, ObjectRecord, TreeDisplayMap};

/// Data fields tried, in order, when no configured field yields a value.
pub const DISPLAY_FALLBACK_FIELDS: [&str; 3] = ["name", "title", "label"];

/// Configured display field per normalized type name.
pub type DisplayFieldMap = BTreeMap<String, String>;

/// Lowercase and trim a type name for map lookups.
pub fn normalize_type_name(type_name: &str) -> String {
    type_name.trim().to_lowercase()
}

/// Look up `field_name` in `data`, preferring an exact key match and falling
/// back to a case-insensitive one.
pub fn value_by_field<'a>(data: &'a DataMap, field_name: &str) -> Option<&'a serde_json::Value> {
    if field_name.is_empty() {
        return None;
    }
    if let Some(value) = data.get(field_name) {
        return Some(value);
    }
    let lower = field_name.to_lowercase();
    data.iter().find(|(key, _)| key.to_lowercase() == lower).map(|(_, value)| value)
}

/// Text form of a data value. `null` has none.
pub fn value_text(value: &serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::Null => None,
        serde_json::Value::String(s) => Some(s.clone()),
        serde_json::Value::Bool(b) => Some(b.to_string()),
        serde_json::Value::Number(n) => Some(match n.as_f64() {
            Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 1e15 => format!("{f:.0}"),
            _ => n.to_string(),
        }),
        other => Some(other.to_string()),
    }
}

/// Whether a value is present and has non-blank text.
pub fn is_non_empty(value: Option<&serde_json::Value>) -> bool {
    value.and_then(value_text).is_some_and(|text| !text.trim().is_empty())
}

fn trimmed_text(value: Option<&serde_json::Value>) -> Option<String> {
    let text = value.and_then(value_text)?;
    let trimmed = text.trim();
    if trimmed.is_empty() { None } else { Some(trimmed.to_owned()) }
}

/// Resolve the human-facing name of an object.
///
/// Order: the field configured for the object's type, then
/// [`DISPLAY_FALLBACK_FIELDS`], then `auto_id`, then `""`.
pub fn resolve_object_display_name(obj: &ObjectRecord, display_fields: &DisplayFieldMap) -> String {
    let type_name = normalize_type_name(obj.type_name());
    if let Some(field) = display_fields.get(&type_name).filter(|f| !f.is_empty()) {
        if let Some(text) = trimmed_text(value_by_field(&obj.data, field)) {
            return text;
        }
    }
    DISPLAY_FALLBACK_FIELDS
        .iter()
        .find_map(|field| trimmed_text(value_by_field(&obj.data, field)))
        .or_else(|| obj.auto_id.clone())
        .unwrap_or_default()
}

/// Build the display-field map from the tree-display view config.
///
/// Types without a configured field, or configured to show the `ID`, are
/// left out so resolution falls through to the defaults.
pub fn display_field_map(config: &TreeDisplayMap) -> DisplayFieldMap {
    config
        .iter()
        .filter_map(|(type_name, cfg)| {
            let field = cfg.tree_view_name_field.as_deref()?.trim();
            if field.is_empty() || field.eq_ignore_ascii_case("id") {
                return None;
            }
            let name = cfg.object_type_name.as_deref().unwrap_or(type_name);
            Some((normalize_type_name(name), field.to_owned()))
        })
        .collect()
}

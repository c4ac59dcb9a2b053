//! Dynamic object form model: schema → inputs → data map.
//!
//! SYSTEM CONTEXT
//! ==============
//! Object types carry their own field schema, so the create/edit form is
//! generated at runtime. This module holds the pure half of that: which
//! input each field type gets, current input values, select option
//! resolution, collecting a data map and required-field validation. The
//! `object_form` component renders a [`FormState`] and feeds edits back.
//!
//! DESIGN
//! ======
//! Values are kept as raw input strings (booleans as flags) until
//! [`FormState::to_data`], mirroring what the browser inputs hold. Connection
//! types derive their name from the two joined parts on every edit.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use std::collections::{BTreeMap, BTreeSet};

use crate::net::types::{BuildingPartCategory, DataMap, FieldType, ManagedList, ObjectField, ObjectRecord, ObjectType};
use crate::util::collate::swedish_cmp;
use crate::util::display_name::value_text;
use crate::util::format::{date_input_value, datetime_input_value, is_truthy, strip_html_tags};

/// Status choices offered in the metadata section.
pub const STATUS_OPTIONS: [&str; 4] = ["In work", "Released", "Obsolete", "Canceled"];
/// Status of newly created objects.
pub const DEFAULT_STATUS: &str = "In work";
/// Version of newly created objects.
pub const DEFAULT_VERSION: &str = "001";
/// Placeholder option for selects.
pub const SELECT_PLACEHOLDER: &str = "Välj...";
/// Checkbox caption when a boolean field has no help text.
pub const BOOLEAN_DEFAULT_CAPTION: &str = "Aktivera";

// =============================================================================
// INPUT MAPPING
// =============================================================================

/// HTML control used for a field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputKind {
    Text,
    /// Plain textarea with the given row count.
    Textarea(u32),
    /// HTML source textarea.
    Richtext,
    /// Number input with the given `step` attribute.
    Number(&'static str),
    Date,
    DatetimeLocal,
    Checkbox,
    Select,
}

/// Map a schema field type to its input control.
pub fn input_kind(field_type: FieldType) -> InputKind {
    match field_type {
        FieldType::Text | FieldType::Unknown => InputKind::Text,
        FieldType::Textarea => InputKind::Textarea(4),
        FieldType::Richtext => InputKind::Richtext,
        FieldType::Number => InputKind::Number("any"),
        FieldType::Decimal => InputKind::Number("0.01"),
        FieldType::Date => InputKind::Date,
        FieldType::Datetime => InputKind::DatetimeLocal,
        FieldType::Boolean => InputKind::Checkbox,
        FieldType::Select => InputKind::Select,
    }
}

/// Grid class: long-form inputs span the full width.
pub fn layout_class(field_type: FieldType) -> &'static str {
    match field_type {
        FieldType::Richtext | FieldType::Textarea => "form-group-full",
        _ => "form-group-compact",
    }
}

/// Label text with a required marker.
pub fn field_label(field: &ObjectField) -> String {
    if field.is_required { format!("{} *", field.label()) } else { field.label().to_owned() }
}

/// Caption shown next to a boolean checkbox.
pub fn checkbox_caption(field: &ObjectField) -> String {
    field
        .help_text
        .as_deref()
        .filter(|h| !h.trim().is_empty())
        .unwrap_or(BOOLEAN_DEFAULT_CAPTION)
        .to_owned()
}

// =============================================================================
// SELECT OPTIONS
// =============================================================================

/// Where a select field takes its options from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OptionSource {
    /// Options written into the schema.
    Static(Vec<String>),
    /// Active building-part category names.
    BuildingPartCategories,
    /// Active items of a managed list, by list id.
    ManagedList(i64),
    /// Managed-list source without a usable id.
    Invalid,
}

fn option_text(value: &serde_json::Value) -> Option<String> {
    value_text(value).filter(|s| !s.is_empty())
}

/// Decode `field_options` that may be a JSON document inside a string.
pub fn normalize_field_options(options: &serde_json::Value) -> Option<serde_json::Value> {
    match options {
        serde_json::Value::Null => None,
        serde_json::Value::String(raw) => serde_json::from_str(raw).ok(),
        other => Some(other.clone()),
    }
}

/// Static options from an array, object, JSON string or comma list.
pub fn parse_options(options: &serde_json::Value) -> Vec<String> {
    match options {
        serde_json::Value::Array(items) => items.iter().filter_map(option_text).collect(),
        serde_json::Value::Object(map) => {
            if map.contains_key("source") || map.get("values").is_some_and(serde_json::Value::is_array) {
                return map.get("values").and_then(serde_json::Value::as_array).map_or_else(Vec::new, |items| {
                    items.iter().filter_map(option_text).collect()
                });
            }
            map.values().filter_map(option_text).collect()
        }
        serde_json::Value::String(raw) => match serde_json::from_str::<serde_json::Value>(raw) {
            Ok(parsed @ (serde_json::Value::Array(_) | serde_json::Value::Object(_))) => parse_options(&parsed),
            Ok(_) => Vec::new(),
            Err(_) => raw.split(',').map(str::trim).filter(|s| !s.is_empty()).map(str::to_owned).collect(),
        },
        _ => Vec::new(),
    }
}

/// Classify a field's option source.
pub fn option_source(field: &ObjectField) -> OptionSource {
    let Some(raw) = field.field_options.as_ref() else {
        return OptionSource::Static(Vec::new());
    };
    let normalized = normalize_field_options(raw);
    match normalized.as_ref().and_then(|o| o.get("source")).and_then(serde_json::Value::as_str) {
        Some("building_part_categories") => OptionSource::BuildingPartCategories,
        Some("managed_list") => {
            let list_id = normalized
                .as_ref()
                .and_then(|o| o.get("list_id"))
                .and_then(|id| id.as_i64().or_else(|| id.as_str().and_then(|s| s.trim().parse().ok())));
            match list_id {
                Some(id) if id > 0 => OptionSource::ManagedList(id),
                _ => OptionSource::Invalid,
            }
        }
        _ => OptionSource::Static(parse_options(raw)),
    }
}

/// Lookup data for dynamic select sources.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OptionLookups {
    pub categories: Vec<BuildingPartCategory>,
    pub managed_lists: BTreeMap<i64, Vec<String>>,
}

/// Which lookups a schema needs before the form can render its selects.
pub fn required_lookups(fields: &[ObjectField]) -> (bool, BTreeSet<i64>) {
    let mut categories = false;
    let mut lists = BTreeSet::new();
    for field in fields.iter().filter(|f| f.field_type == FieldType::Select) {
        match option_source(field) {
            OptionSource::BuildingPartCategories => categories = true,
            OptionSource::ManagedList(id) => {
                lists.insert(id);
            }
            _ => {}
        }
    }
    (categories, lists)
}

/// Active item values of a managed list in `sort_order`.
pub fn managed_list_values(list: &ManagedList) -> Vec<String> {
    let mut items: Vec<_> = list.items.iter().filter(|i| i.is_active && !i.value.is_empty()).collect();
    items.sort_by_key(|i| i.sort_order.unwrap_or(0));
    items.into_iter().map(|i| i.value.clone()).collect()
}

/// Resolve the options a select field offers.
pub fn select_options(field: &ObjectField, lookups: &OptionLookups) -> Vec<String> {
    match option_source(field) {
        OptionSource::Static(options) => options,
        OptionSource::BuildingPartCategories => lookups
            .categories
            .iter()
            .filter(|c| c.is_active && !c.name.is_empty())
            .map(|c| c.name.clone())
            .collect(),
        OptionSource::ManagedList(id) => lookups.managed_lists.get(&id).cloned().unwrap_or_default(),
        OptionSource::Invalid => Vec::new(),
    }
}

// =============================================================================
// CONNECTION NAMES
// =============================================================================

/// Lowercase and keep only `[a-z0-9]`.
pub fn normalize_field_key(value: &str) -> String {
    value.to_lowercase().chars().filter(char::is_ascii_alphanumeric).collect()
}

/// Connection types name themselves after the two parts they join.
pub fn is_connection_type(type_name: &str) -> bool {
    normalize_field_key(type_name).contains("anslutning")
}

/// `"A - B"` with the parts in Swedish order, or empty if one is missing.
pub fn connection_name(part_a: &str, part_b: &str) -> String {
    let (a, b) = (part_a.trim(), part_b.trim());
    if a.is_empty() || b.is_empty() {
        return String::new();
    }
    let mut parts = [a, b];
    parts.sort_by(|x, y| swedish_cmp(x, y));
    format!("{} - {}", parts[0], parts[1])
}

fn find_field_by_aliases<'a>(fields: &'a [ObjectField], aliases: &[&str]) -> Option<&'a str> {
    let keys: Vec<String> = aliases.iter().map(|a| normalize_field_key(a)).collect();
    fields
        .iter()
        .find(|f| keys.contains(&normalize_field_key(&f.field_name)))
        .map(|f| f.field_name.as_str())
}

/// Field names taking part in the connection naming rule.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConnectionFields {
    pub name: String,
    pub part_a: String,
    pub part_b: String,
}

impl ConnectionFields {
    fn detect(type_name: &str, fields: &[ObjectField]) -> Option<Self> {
        if !is_connection_type(type_name) {
            return None;
        }
        Some(Self {
            name: find_field_by_aliases(fields, &["namn", "name"])?.to_owned(),
            part_a: find_field_by_aliases(fields, &["del_a", "dela", "del a"])?.to_owned(),
            part_b: find_field_by_aliases(fields, &["del_b", "delb", "del b"])?.to_owned(),
        })
    }
}

// =============================================================================
// FORM STATE
// =============================================================================

/// Why a form cannot be submitted.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("object type has no fields")]
    NoFields,
    #[error("required fields missing: {}", .0.join(", "))]
    MissingRequired(Vec<String>),
}

/// What the form is being used for.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormMode {
    #[default]
    Create,
    Edit,
    /// Create a copy prefilled from an existing object.
    Duplicate,
}

impl FormMode {
    /// Version and main id are only shown, and submitted, on creation.
    #[must_use]
    pub fn shows_creation_metadata(self) -> bool {
        matches!(self, Self::Create)
    }
}

/// Current input values of a generated form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormState {
    pub object_type_id: i64,
    pub type_name: String,
    pub fields: Vec<ObjectField>,
    pub mode: FormMode,
    pub status: String,
    pub version: String,
    pub main_id: String,
    text: BTreeMap<String, String>,
    flags: BTreeMap<String, bool>,
    /// Field names that failed the last validation.
    pub errors: BTreeSet<String>,
    connection: Option<ConnectionFields>,
}

impl FormState {
    /// Build the form for `object_type`, prefilled from `existing` if given.
    #[must_use]
    pub fn new(object_type: &ObjectType, existing: Option<&ObjectRecord>, mode: FormMode) -> Self {
        let fields = object_type.ordered_fields();
        let mut text = BTreeMap::new();
        let mut flags = BTreeMap::new();
        for field in &fields {
            let value = existing.and_then(|o| o.data.get(&field.field_name)).filter(|v| !v.is_null());
            if field.field_type == FieldType::Boolean {
                flags.insert(field.field_name.clone(), value.is_some_and(is_truthy));
                continue;
            }
            let raw = value.and_then(value_text).unwrap_or_default();
            let input = match field.field_type {
                FieldType::Date => date_input_value(&raw),
                FieldType::Datetime => datetime_input_value(&raw),
                _ => raw,
            };
            text.insert(field.field_name.clone(), input);
        }

        let meta = |key: &str, default: &str| {
            existing
                .and_then(|o| o.meta(key))
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| default.to_owned())
        };
        let mut state = Self {
            object_type_id: object_type.id,
            type_name: object_type.name.clone(),
            connection: ConnectionFields::detect(&object_type.name, &fields),
            fields,
            mode,
            status: meta("status", DEFAULT_STATUS),
            version: meta("version", DEFAULT_VERSION),
            main_id: meta("main_id", ""),
            text,
            flags,
            errors: BTreeSet::new(),
        };
        state.refresh_connection_name();
        state
    }

    /// Current text of a non-boolean field.
    #[must_use]
    pub fn text(&self, field_name: &str) -> String {
        self.text.get(field_name).cloned().unwrap_or_default()
    }

    /// Current state of a boolean field.
    #[must_use]
    pub fn checked(&self, field_name: &str) -> bool {
        self.flags.get(field_name).copied().unwrap_or(false)
    }

    /// Whether the input for `field_name` is generated and read-only.
    #[must_use]
    pub fn is_read_only(&self, field_name: &str) -> bool {
        self.connection.as_ref().is_some_and(|c| c.name == field_name)
    }

    /// Update a text-like input. Edits to read-only fields are ignored.
    pub fn set_text(&mut self, field_name: &str, value: String) {
        if self.is_read_only(field_name) {
            return;
        }
        self.text.insert(field_name.to_owned(), value);
        self.errors.remove(field_name);
        self.refresh_connection_name();
    }

    /// Update a checkbox.
    pub fn set_checked(&mut self, field_name: &str, checked: bool) {
        self.flags.insert(field_name.to_owned(), checked);
    }

    fn refresh_connection_name(&mut self) {
        let Some(conn) = self.connection.clone() else {
            return;
        };
        let name = connection_name(&self.text(&conn.part_a), &self.text(&conn.part_b));
        self.text.insert(conn.name, name);
    }

    fn comparable(&self, field: &ObjectField) -> String {
        let raw = self.text(&field.field_name);
        if field.field_type == FieldType::Richtext { strip_html_tags(&raw) } else { raw }
    }

    /// Check required fields, recording failures in [`FormState::errors`].
    ///
    /// # Errors
    ///
    /// [`FormError::NoFields`] for an empty schema and
    /// [`FormError::MissingRequired`] listing labels of blank required fields.
    pub fn validate(&mut self) -> Result<(), FormError> {
        if self.fields.is_empty() {
            return Err(FormError::NoFields);
        }
        let missing: Vec<&ObjectField> = self
            .fields
            .iter()
            .filter(|f| f.is_required && f.field_type != FieldType::Boolean)
            .filter(|f| self.comparable(f).trim().is_empty())
            .collect();
        let labels: Vec<String> = missing.iter().map(|f| f.label().to_owned()).collect();
        self.errors = missing.iter().map(|f| f.field_name.clone()).collect();
        if labels.is_empty() { Ok(()) } else { Err(FormError::MissingRequired(labels)) }
    }

    /// Collect the data map submitted to the backend.
    #[must_use]
    pub fn to_data(&self) -> DataMap {
        let mut data = DataMap::new();
        data.insert("status".to_owned(), serde_json::Value::String(self.status.clone()));
        if self.mode.shows_creation_metadata() {
            data.insert("version".to_owned(), serde_json::Value::String(self.version.clone()));
            if !self.main_id.is_empty() {
                data.insert("main_id".to_owned(), serde_json::Value::String(self.main_id.clone()));
            }
        }
        for field in &self.fields {
            let value = match field.field_type {
                FieldType::Boolean => serde_json::Value::Bool(self.checked(&field.field_name)),
                FieldType::Number | FieldType::Decimal => self
                    .text(&field.field_name)
                    .trim()
                    .parse::<f64>()
                    .ok()
                    .and_then(serde_json::Number::from_f64)
                    .map_or(serde_json::Value::Null, serde_json::Value::Number),
                _ => {
                    let raw = self.text(&field.field_name);
                    if raw.is_empty() { serde_json::Value::Null } else { serde_json::Value::String(raw) }
                }
            };
            data.insert(field.field_name.clone(), value);
        }
        data
    }
}

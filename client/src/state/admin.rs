//! Admin panel drafts: object types, their fields and building-part
//! categories.
//!
//! DESIGN
//! ======
//! The field editor offers a "byggdelskategori" pseudo type. It is not a
//! backend field type: it is stored as a `select` whose options point at the
//! category list, and is recognised again when the field is edited.

#[cfg(test)]
#[path = "admin_test.rs"]
mod admin_test;

use crate::net::types::{FieldPayload, FieldType, ObjectField, ObjectType, ObjectTypePayload};
use crate::util::form::{OptionSource, option_source};

/// Editor value of the category pseudo type.
pub const CATEGORY_PSEUDO_TYPE: &str = "building_part_category";

/// Field type choices in the field editor, as `(value, label)`.
pub const FIELD_TYPE_CHOICES: [(&str, &str); 10] = [
    ("text", "Text"),
    ("textarea", "Textområde"),
    ("richtext", "Formaterad text"),
    ("number", "Nummer"),
    ("decimal", "Decimal"),
    ("date", "Datum"),
    ("datetime", "Datum och tid"),
    ("boolean", "Ja/Nej"),
    ("select", "Lista"),
    (CATEGORY_PSEUDO_TYPE, "Byggdelskategori"),
];

pub const OPTIONS_PLACEHOLDER: &str = "Alt1, Alt2, Alt3 eller JSON array";
pub const CATEGORY_OPTIONS_PLACEHOLDER: &str = "Hämtas automatiskt från admin-listan Byggdelskategorier";

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AdminError {
    #[error("Namn måste anges")]
    MissingName,
    #[error("Fältnamn måste anges")]
    MissingFieldName,
    #[error("Okänd fälttyp: {0}")]
    UnknownFieldType(String),
    #[error("Namn kan inte vara tomt")]
    EmptyCategoryName,
}

/// Backend field type for an editor value. The pseudo type maps to `select`.
pub fn parse_field_type(value: &str) -> Option<FieldType> {
    Some(match value {
        "text" => FieldType::Text,
        "textarea" => FieldType::Textarea,
        "richtext" => FieldType::Richtext,
        "number" => FieldType::Number,
        "decimal" => FieldType::Decimal,
        "date" => FieldType::Date,
        "datetime" => FieldType::Datetime,
        "boolean" => FieldType::Boolean,
        "select" | CATEGORY_PSEUDO_TYPE => FieldType::Select,
        _ => return None,
    })
}

fn is_category_field(field: &ObjectField) -> bool {
    field.field_type == FieldType::Select && option_source(field) == OptionSource::BuildingPartCategories
}

/// Type label in the field list.
pub fn field_type_label(field: &ObjectField) -> &'static str {
    if is_category_field(field) { "byggdelskategori" } else { field.field_type.as_str() }
}

/// Secondary line on a type card, e.g. `3 fält • BYG-001`.
pub fn type_card_subtitle(object_type: &ObjectType) -> String {
    let prefix = object_type.id_prefix.as_deref().filter(|p| !p.trim().is_empty()).unwrap_or("AUTO");
    format!("{} fält • {prefix}-001", object_type.fields.len())
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() { None } else { Some(trimmed.to_owned()) }
}

/// Object type editor contents.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TypeDraft {
    pub name: String,
    pub description: String,
    pub id_prefix: String,
}

impl TypeDraft {
    pub fn from_type(object_type: &ObjectType) -> Self {
        Self {
            name: object_type.name.clone(),
            description: object_type.description.clone().unwrap_or_default(),
            id_prefix: object_type.id_prefix.clone().unwrap_or_default(),
        }
    }

    /// # Errors
    ///
    /// [`AdminError::MissingName`] when the name is blank.
    pub fn to_payload(&self) -> Result<ObjectTypePayload, AdminError> {
        let name = non_blank(&self.name).ok_or(AdminError::MissingName)?;
        Ok(ObjectTypePayload {
            name,
            description: non_blank(&self.description),
            id_prefix: non_blank(&self.id_prefix).map(|p| p.to_uppercase()),
        })
    }
}

/// Field editor contents.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldDraft {
    pub field_name: String,
    pub display_name: String,
    /// One of the [`FIELD_TYPE_CHOICES`] values.
    pub field_type: String,
    pub is_required: bool,
    pub is_table_visible: bool,
    pub help_text: String,
    pub options_text: String,
}

impl Default for FieldDraft {
    fn default() -> Self {
        Self {
            field_name: String::new(),
            display_name: String::new(),
            field_type: FieldType::Text.as_str().to_owned(),
            is_required: false,
            is_table_visible: true,
            help_text: String::new(),
            options_text: String::new(),
        }
    }
}

impl FieldDraft {
    pub fn from_field(field: &ObjectField) -> Self {
        let field_type =
            if is_category_field(field) { CATEGORY_PSEUDO_TYPE } else { field.field_type.as_str() }.to_owned();
        let options_text = match &field.field_options {
            Some(serde_json::Value::String(raw)) => raw.clone(),
            Some(serde_json::Value::Null) | None => String::new(),
            Some(other) => other.to_string(),
        };
        Self {
            field_name: field.field_name.clone(),
            display_name: field.display_name.clone().unwrap_or_default(),
            field_type,
            is_required: field.is_required,
            is_table_visible: field.table_visible(),
            help_text: field.help_text.clone().unwrap_or_default(),
            options_text,
        }
    }

    /// The options input is locked for category fields.
    #[must_use]
    pub fn options_locked(&self) -> bool {
        self.field_type == CATEGORY_PSEUDO_TYPE
    }

    #[must_use]
    pub fn options_placeholder(&self) -> &'static str {
        if self.options_locked() { CATEGORY_OPTIONS_PLACEHOLDER } else { OPTIONS_PLACEHOLDER }
    }

    /// # Errors
    ///
    /// Blank field name or a type outside [`FIELD_TYPE_CHOICES`].
    pub fn to_payload(&self) -> Result<FieldPayload, AdminError> {
        let field_name = non_blank(&self.field_name).ok_or(AdminError::MissingFieldName)?;
        let field_type =
            parse_field_type(&self.field_type).ok_or_else(|| AdminError::UnknownFieldType(self.field_type.clone()))?;
        let field_options = if self.options_locked() {
            Some(serde_json::json!({"source": "building_part_categories"}))
        } else {
            non_blank(&self.options_text).map(serde_json::Value::String)
        };
        Ok(FieldPayload {
            display_name: non_blank(&self.display_name).unwrap_or_else(|| field_name.clone()),
            field_name,
            field_type,
            is_required: self.is_required,
            is_table_visible: self.is_table_visible,
            help_text: non_blank(&self.help_text),
            field_options,
        })
    }
}

/// Validate a category name typed by the admin.
///
/// # Errors
///
/// [`AdminError::EmptyCategoryName`] for blank input.
pub fn category_name(input: &str) -> Result<String, AdminError> {
    non_blank(input).ok_or(AdminError::EmptyCategoryName)
}

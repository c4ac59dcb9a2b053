//! Object list rows and columns.
//!
//! Rows pre-resolve the display name so sorting and searching see the same
//! text the user reads. Data columns are keyed `data.<field_name>`.

#[cfg(test)]
#[path = "objects_test.rs"]
mod objects_test;

use crate::net::types::{FieldType, ObjectRecord, ObjectType};
use crate::state::table::{ColumnDef, SortKind, TableRow};
use crate::util::display_name::{DisplayFieldMap, resolve_object_display_name, value_by_field, value_text};
use crate::util::format::{format_date, format_field_value};

pub const OBJECTS_EMPTY_TEXT: &str = "Inga objekt hittades";

const DATA_PREFIX: &str = "data.";

/// Column key for a data field.
pub fn data_column_key(field_name: &str) -> String {
    format!("{DATA_PREFIX}{field_name}")
}

/// Columns for the object list: ID, name, type, the selected type's visible
/// fields, created.
pub fn object_columns(selected_type: Option<&ObjectType>) -> Vec<ColumnDef> {
    let mut columns = vec![
        ColumnDef::new("auto_id", "ID").class("col-id"),
        ColumnDef::new("display_name", "Namn"),
        ColumnDef::new("type", "Typ").type_badge(),
    ];
    if let Some(object_type) = selected_type {
        for field in object_type.ordered_fields().iter().filter(|f| f.table_visible()) {
            let kind = match field.field_type {
                FieldType::Number | FieldType::Decimal => SortKind::Number,
                FieldType::Date | FieldType::Datetime => SortKind::Date,
                _ => SortKind::Text,
            };
            let mut column = ColumnDef::new(data_column_key(&field.field_name), field.label()).sort_kind(kind);
            if matches!(field.field_type, FieldType::Richtext | FieldType::Textarea) {
                column = column.class("col-text");
            }
            columns.push(column);
        }
    }
    columns.push(ColumnDef::new("created_at", "Skapad").sort_kind(SortKind::Date).unsearchable());
    columns
}

/// An object as shown in the list.
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectRow {
    pub record: ObjectRecord,
    pub display_name: String,
}

impl ObjectRow {
    pub fn new(record: ObjectRecord, display_fields: &DisplayFieldMap) -> Self {
        let display_name = resolve_object_display_name(&record, display_fields);
        Self { record, display_name }
    }

    fn field_type(&self, field_name: &str) -> FieldType {
        self.record
            .object_type
            .as_ref()
            .and_then(|t| t.fields.iter().find(|f| f.field_name == field_name))
            .map_or(FieldType::Unknown, |f| f.field_type)
    }
}

impl TableRow for ObjectRow {
    fn cell_text(&self, key: &str) -> String {
        match key {
            "auto_id" => self.record.auto_id.clone().unwrap_or_default(),
            "display_name" => self.display_name.clone(),
            "type" => self.record.type_name().to_owned(),
            "created_at" => self.record.created_at.clone().unwrap_or_default(),
            _ => key
                .strip_prefix(DATA_PREFIX)
                .and_then(|field| value_by_field(&self.record.data, field))
                .and_then(value_text)
                .unwrap_or_default(),
        }
    }

    fn cell_display(&self, key: &str) -> String {
        match key {
            "created_at" => format_date(self.record.created_at.as_deref()),
            _ => match key.strip_prefix(DATA_PREFIX) {
                Some(field) => format_field_value(value_by_field(&self.record.data, field), self.field_type(field)),
                None => self.cell_text(key),
            },
        }
    }
}

/// Options for the object picker in the add-relation modal, excluding the
/// object itself: `(id, "name (type)")`.
pub fn relation_target_options(
    objects: &[ObjectRecord],
    exclude_id: i64,
    display_fields: &DisplayFieldMap,
) -> Vec<(i64, String)> {
    objects
        .iter()
        .filter(|o| o.id != exclude_id)
        .map(|o| (o.id, format!("{} ({})", resolve_object_display_name(o, display_fields), o.type_name())))
        .collect()
}

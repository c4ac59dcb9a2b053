//! Wire DTOs for the `/api` REST contract.
//!
//! DESIGN
//! ======
//! Types mirror the backend JSON payloads. Every optional field carries
//! `#[serde(default)]` so older or trimmed responses (for example the
//! `minimal` object list) still decode. Ids that the backend has been seen to
//! send both as numbers and strings use the lenient helpers at the bottom.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::collections::BTreeMap;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Free-form object data keyed by field name.
pub type DataMap = serde_json::Map<String, serde_json::Value>;

// =============================================================================
// OBJECT TYPES
// =============================================================================

/// Field input kind as declared by the object-type schema.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    #[default]
    Text,
    Textarea,
    Richtext,
    Number,
    Decimal,
    Date,
    Datetime,
    Boolean,
    Select,
    /// Any tag this client does not know; rendered as plain text.
    #[serde(other)]
    Unknown,
}

impl FieldType {
    /// Wire tag for this kind.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text | Self::Unknown => "text",
            Self::Textarea => "textarea",
            Self::Richtext => "richtext",
            Self::Number => "number",
            Self::Decimal => "decimal",
            Self::Date => "date",
            Self::Datetime => "datetime",
            Self::Boolean => "boolean",
            Self::Select => "select",
        }
    }
}

/// One field definition in an object-type schema.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ObjectField {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub object_type_id: Option<i64>,
    /// Key in the object's data map.
    pub field_name: String,
    /// Label shown in forms and tables.
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub field_type: FieldType,
    /// Select options: array, JSON string, comma list or `{source: ...}`.
    #[serde(default)]
    pub field_options: Option<serde_json::Value>,
    #[serde(default)]
    pub is_required: bool,
    #[serde(default)]
    pub is_table_visible: Option<bool>,
    #[serde(default)]
    pub help_text: Option<String>,
    #[serde(default)]
    pub display_order: Option<i64>,
    /// Width hint for the detail grid (`"full"`, `"half"`, ...).
    #[serde(default)]
    pub detail_width: Option<String>,
}

impl ObjectField {
    /// Display label, falling back to the raw field name.
    #[must_use]
    pub fn label(&self) -> &str {
        self.display_name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(&self.field_name)
    }

    /// Fields are table-visible unless explicitly switched off.
    #[must_use]
    pub fn table_visible(&self) -> bool {
        self.is_table_visible.unwrap_or(true)
    }
}

/// A user-defined object schema.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ObjectType {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    /// Custom badge color (hex), overriding the built-in palette.
    #[serde(default)]
    pub color: Option<String>,
    /// Prefix used when the backend generates `auto_id`s.
    #[serde(default)]
    pub id_prefix: Option<String>,
    /// Next auto-id number, when reported.
    #[serde(default)]
    pub id_counter: Option<i64>,
    #[serde(default)]
    pub is_system: bool,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub fields: Vec<ObjectField>,
}

impl ObjectType {
    /// Fields in display order. Fields without an order sort last.
    #[must_use]
    pub fn ordered_fields(&self) -> Vec<ObjectField> {
        let mut fields = self.fields.clone();
        fields.sort_by_key(|f| f.display_order.unwrap_or(999));
        fields
    }

    /// Look up a field definition by name.
    #[must_use]
    pub fn field(&self, field_name: &str) -> Option<&ObjectField> {
        self.fields.iter().find(|f| f.field_name == field_name)
    }
}

/// Embedded type reference on objects. Full field lists are optional.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ObjectTypeRef {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub fields: Vec<ObjectField>,
}

// =============================================================================
// OBJECTS
// =============================================================================

/// A typed object instance.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ObjectRecord {
    pub id: i64,
    /// Human-facing id generated by the backend (e.g. `BYG-0012`).
    #[serde(default)]
    pub auto_id: Option<String>,
    #[serde(default)]
    pub object_type: Option<ObjectTypeRef>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "deserialize_opt_string_lenient")]
    pub version: Option<String>,
    #[serde(default)]
    pub main_id: Option<String>,
    #[serde(default)]
    pub id_full: Option<String>,
    #[serde(default)]
    pub data: DataMap,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub created_by: Option<String>,
}

impl ObjectRecord {
    /// Type name or empty when the embedded type is missing.
    #[must_use]
    pub fn type_name(&self) -> &str {
        self.object_type.as_ref().map_or("", |t| t.name.as_str())
    }

    /// Metadata value from the top-level field or, failing that, the data map.
    #[must_use]
    pub fn meta(&self, key: &str) -> Option<String> {
        let top = match key {
            "status" => self.status.clone(),
            "version" => self.version.clone(),
            "main_id" => self.main_id.clone(),
            "id_full" => self.id_full.clone(),
            _ => None,
        };
        top.or_else(|| match self.data.get(key) {
            Some(serde_json::Value::String(s)) => Some(s.clone()),
            Some(serde_json::Value::Number(n)) => Some(n.to_string()),
            _ => None,
        })
    }
}

/// Create/update payload for objects.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ObjectPayload {
    pub object_type_id: i64,
    pub data: DataMap,
}

/// Optional filters for `GET /objects`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ObjectQuery {
    pub object_type: Option<String>,
    pub search: Option<String>,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub minimal: bool,
}

// =============================================================================
// RELATIONS
// =============================================================================

/// Direction of a relation relative to the object it was fetched for.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RelationDirection {
    Incoming,
    #[default]
    Outgoing,
}

/// A typed directed link between two objects.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Relation {
    pub id: i64,
    pub source_object_id: i64,
    pub target_object_id: i64,
    pub relation_type: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub metadata: Option<serde_json::Value>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub direction: RelationDirection,
    #[serde(default)]
    pub source_object: Option<ObjectRecord>,
    #[serde(default)]
    pub target_object: Option<ObjectRecord>,
}

/// Body for `POST /objects/{id}/relations`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RelationPayload {
    pub target_object_id: i64,
    pub relation_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Body for `POST /relations/batch`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BatchRelationPayload {
    pub source_object_ids: Vec<i64>,
    pub target_object_ids: Vec<i64>,
    pub relation_type: String,
}

/// Summary returned by the batch endpoint.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct BatchRelationResult {
    #[serde(default)]
    pub created: Vec<Relation>,
    #[serde(default)]
    pub skipped: Vec<serde_json::Value>,
    #[serde(default)]
    pub errors: Vec<serde_json::Value>,
}

// =============================================================================
// DOCUMENTS
// =============================================================================

/// A file attached to an object.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: i64,
    #[serde(default)]
    pub object_id: Option<i64>,
    #[serde(default)]
    pub filename: String,
    #[serde(default)]
    pub original_filename: Option<String>,
    #[serde(default)]
    pub file_size: Option<u64>,
    #[serde(default)]
    pub mime_type: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub document_type: Option<String>,
    #[serde(default)]
    pub uploaded_at: Option<String>,
    #[serde(default)]
    pub uploaded_by: Option<String>,
}

impl Document {
    /// Name the user uploaded the file under.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.original_filename.as_deref().unwrap_or(&self.filename)
    }
}

// =============================================================================
// PRODUCTS / COMPONENTS / BOM
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(default)]
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub article_number: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Component {
    #[serde(default)]
    pub id: i64,
    pub name: String,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub specifications: Option<String>,
    #[serde(default)]
    pub unit: Option<String>,
}

/// One line of a product's bill of materials.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BomItem {
    pub id: i64,
    #[serde(default)]
    pub product_id: Option<i64>,
    pub component_id: i64,
    pub quantity: f64,
    #[serde(default)]
    pub position: Option<i64>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub component: Option<Component>,
}

/// Body for `POST /products/{id}/bom` and `PUT /bom/{id}`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BomPayload {
    pub component_id: i64,
    pub quantity: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Parent/child link between products.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductRelation {
    pub id: i64,
    #[serde(default)]
    pub parent_product_id: Option<i64>,
    #[serde(default)]
    pub child_product_id: Option<i64>,
    pub relation_type: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub parent_product: Option<Product>,
    #[serde(default)]
    pub child_product: Option<Product>,
}

/// Both sides of a product's relations from `GET /products/{id}/relations`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ProductRelations {
    #[serde(default)]
    pub as_parent: Vec<ProductRelation>,
    #[serde(default)]
    pub as_child: Vec<ProductRelation>,
}

/// Body for `POST /products/{id}/relations`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ProductRelationPayload {
    pub child_product_id: i64,
    pub relation_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

// =============================================================================
// TREE
// =============================================================================

/// File reference carried on tree nodes.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TreeFile {
    pub id: i64,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub original_filename: Option<String>,
    #[serde(default)]
    pub filename: Option<String>,
    #[serde(default)]
    pub mime_type: Option<String>,
}

impl TreeFile {
    #[must_use]
    pub fn label(&self) -> &str {
        self.description
            .as_deref()
            .filter(|d| !d.trim().is_empty())
            .or(self.original_filename.as_deref())
            .or(self.filename.as_deref())
            .unwrap_or("Dokument")
    }
}

/// Node in the `/objects/tree` hierarchy. Group nodes have `kind == "group"`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TreeNode {
    #[serde(deserialize_with = "deserialize_string_lenient")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub auto_id: Option<String>,
    #[serde(default)]
    pub kravtext: Option<String>,
    #[serde(default)]
    pub beskrivning: Option<String>,
    #[serde(default)]
    pub files: Vec<TreeFile>,
    #[serde(default)]
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    #[must_use]
    pub fn is_group(&self) -> bool {
        self.kind.as_deref() == Some("group")
    }

    /// Numeric object id for object nodes.
    #[must_use]
    pub fn object_id(&self) -> Option<i64> {
        if self.is_group() {
            return None;
        }
        self.id.parse().ok()
    }
}

// =============================================================================
// LOOKUPS / CONFIG
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ManagedListItem {
    pub id: i64,
    #[serde(default)]
    pub list_id: Option<i64>,
    pub value: String,
    #[serde(default)]
    pub sort_order: Option<i64>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ManagedList {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub items: Vec<ManagedListItem>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BuildingPartCategory {
    #[serde(default)]
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub sort_order: Option<i64>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

/// Per-type tree/list naming config from `/view-config/tree-display`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TreeDisplayConfig {
    #[serde(default)]
    pub object_type_id: Option<i64>,
    #[serde(default)]
    pub object_type_name: Option<String>,
    #[serde(default)]
    pub tree_view_name_field: Option<String>,
    #[serde(default)]
    pub available_fields: Vec<serde_json::Value>,
}

/// Whole tree-display config keyed by type name.
pub type TreeDisplayMap = BTreeMap<String, TreeDisplayConfig>;

/// Dashboard counters from `GET /stats`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Stats {
    #[serde(default)]
    pub total_objects: u64,
    #[serde(default)]
    pub objects_by_type: BTreeMap<String, u64>,
    #[serde(default)]
    pub recent_objects: Vec<ObjectRecord>,
}

/// Body of `GET /health`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Health {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
}

/// Body for creating/updating object types.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ObjectTypePayload {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_prefix: Option<String>,
}

/// Body for creating/updating fields.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FieldPayload {
    pub field_name: String,
    pub display_name: String,
    pub field_type: FieldType,
    pub is_required: bool,
    pub is_table_visible: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub help_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_options: Option<serde_json::Value>,
}

fn default_true() -> bool {
    true
}

fn deserialize_string_lenient<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        other => Err(D::Error::custom(format!("expected string or number, got {other}"))),
    }
}

fn deserialize_opt_string_lenient<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    match value {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(serde_json::Value::String(s)) => Ok(Some(s)),
        Some(serde_json::Value::Number(n)) => Ok(Some(n.to_string())),
        Some(other) => Err(D::Error::custom(format!("expected string or number, got {other}"))),
    }
}

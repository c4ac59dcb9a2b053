//! Product, BOM and component drafts for the products page.

#[cfg(test)]
#[path = "products_test.rs"]
mod products_test;

use crate::net::types::{BomItem, BomPayload, Component, Product, ProductRelation, ProductRelationPayload};
use crate::state::table::{ColumnDef, SortKind, TableRow};
use crate::util::format::{format_date, format_number_sv};

/// Lifecycle states offered for products.
pub const PRODUCT_STATUSES: [&str; 4] = ["Koncept", "Under utveckling", "Godkänd", "Obsolete"];

pub const PRODUCTS_EMPTY_TEXT: &str = "Inga produkter hittades";
pub const BOM_EMPTY_TEXT: &str = "Inga komponenter i BOM";

/// Debounce for the product search box.
pub const PRODUCT_SEARCH_DEBOUNCE_MS: u32 = 300;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ProductError {
    #[error("Namn och artikelnummer måste anges")]
    MissingIdentity,
    #[error("Välj en komponent")]
    MissingComponent,
    #[error("Antal måste vara större än noll")]
    InvalidQuantity,
    #[error("Välj en produkt")]
    MissingChild,
    #[error("Namn måste anges")]
    MissingName,
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() { None } else { Some(trimmed.to_owned()) }
}

/// Product editor contents.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProductDraft {
    pub id: Option<i64>,
    pub name: String,
    pub article_number: String,
    pub version: String,
    pub status: String,
    pub description: String,
}

impl Default for ProductDraft {
    fn default() -> Self {
        Self {
            id: None,
            name: String::new(),
            article_number: String::new(),
            version: "1.0".to_owned(),
            status: PRODUCT_STATUSES[0].to_owned(),
            description: String::new(),
        }
    }
}

impl ProductDraft {
    pub fn from_product(product: &Product) -> Self {
        Self {
            id: Some(product.id),
            name: product.name.clone(),
            article_number: product.article_number.clone().unwrap_or_default(),
            version: product.version.clone().unwrap_or_default(),
            status: product.status.clone().unwrap_or_else(|| PRODUCT_STATUSES[0].to_owned()),
            description: product.description.clone().unwrap_or_default(),
        }
    }

    /// # Errors
    ///
    /// [`ProductError::MissingIdentity`] without name or article number.
    pub fn to_product(&self) -> Result<Product, ProductError> {
        let name = non_blank(&self.name).ok_or(ProductError::MissingIdentity)?;
        let article_number = non_blank(&self.article_number).ok_or(ProductError::MissingIdentity)?;
        Ok(Product {
            id: self.id.unwrap_or_default(),
            name,
            article_number: Some(article_number),
            version: non_blank(&self.version),
            status: non_blank(&self.status),
            description: non_blank(&self.description),
            ..Product::default()
        })
    }
}

/// Add-to-BOM editor contents, kept as typed text until submit.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BomDraft {
    pub component_id: Option<i64>,
    pub quantity: String,
    pub position: String,
    pub notes: String,
}

impl BomDraft {
    /// # Errors
    ///
    /// A component must be chosen and the quantity must parse as a positive
    /// number (decimal comma accepted).
    pub fn to_payload(&self) -> Result<BomPayload, ProductError> {
        let component_id = self.component_id.ok_or(ProductError::MissingComponent)?;
        let quantity: f64 =
            self.quantity.trim().replace(',', ".").parse().map_err(|_| ProductError::InvalidQuantity)?;
        if !quantity.is_finite() || quantity <= 0.0 {
            return Err(ProductError::InvalidQuantity);
        }
        Ok(BomPayload {
            component_id,
            quantity,
            position: self.position.trim().parse().ok(),
            notes: non_blank(&self.notes),
        })
    }
}

/// Cells of one BOM table row: position, name, type, quantity, unit, notes.
pub fn bom_cells(item: &BomItem) -> [String; 6] {
    let dash = || "-".to_owned();
    let component = item.component.as_ref();
    [
        item.position.map_or_else(dash, |p| p.to_string()),
        component.map_or_else(dash, |c| c.name.clone()),
        component.and_then(|c| c.kind.clone()).unwrap_or_else(dash),
        format_number_sv(item.quantity),
        component.and_then(|c| c.unit.clone()).unwrap_or_else(dash),
        item.notes.clone().filter(|n| !n.trim().is_empty()).unwrap_or_else(dash),
    ]
}

/// Picker label for a component, e.g. `Skruv (Fästelement)`.
pub fn component_option_label(component: &Component) -> String {
    format!("{} ({})", component.name, component.kind.as_deref().unwrap_or("-"))
}

/// Product relation editor contents.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProductRelationDraft {
    pub child_product_id: Option<i64>,
    pub relation_type: String,
    pub description: String,
}

impl ProductRelationDraft {
    /// # Errors
    ///
    /// [`ProductError::MissingChild`] until a product is picked.
    pub fn to_payload(&self) -> Result<ProductRelationPayload, ProductError> {
        let child_product_id = self.child_product_id.ok_or(ProductError::MissingChild)?;
        Ok(ProductRelationPayload {
            child_product_id,
            relation_type: non_blank(&self.relation_type).unwrap_or_else(|| "består_av".to_owned()),
            description: non_blank(&self.description),
        })
    }
}

/// The product on the other side of a relation, seen from `product_id`.
pub fn related_product(relation: &ProductRelation, product_id: i64) -> Option<&Product> {
    if relation.parent_product_id == Some(product_id) {
        relation.child_product.as_ref()
    } else {
        relation.parent_product.as_ref()
    }
}

/// Columns of the product table.
pub fn product_columns() -> Vec<ColumnDef> {
    vec![
        ColumnDef::new("article_number", "Artikelnummer").class("col-id"),
        ColumnDef::new("name", "Namn"),
        ColumnDef::new("version", "Version"),
        ColumnDef::new("status", "Status"),
        ColumnDef::new("created_at", "Skapad").sort_kind(SortKind::Date).unsearchable(),
    ]
}

impl TableRow for Product {
    fn cell_text(&self, key: &str) -> String {
        match key {
            "article_number" => self.article_number.clone().unwrap_or_default(),
            "name" => self.name.clone(),
            "version" => self.version.clone().unwrap_or_default(),
            "status" => self.status.clone().unwrap_or_default(),
            "description" => self.description.clone().unwrap_or_default(),
            "created_at" => self.created_at.clone().unwrap_or_default(),
            _ => String::new(),
        }
    }

    fn cell_display(&self, key: &str) -> String {
        match key {
            "created_at" => format_date(self.created_at.as_deref()),
            _ => self.cell_text(key),
        }
    }
}

/// Component editor contents.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ComponentDraft {
    pub id: Option<i64>,
    pub name: String,
    pub kind: String,
    pub specifications: String,
    pub unit: String,
}

impl ComponentDraft {
    pub fn from_component(component: &Component) -> Self {
        Self {
            id: Some(component.id),
            name: component.name.clone(),
            kind: component.kind.clone().unwrap_or_default(),
            specifications: component.specifications.clone().unwrap_or_default(),
            unit: component.unit.clone().unwrap_or_default(),
        }
    }

    /// # Errors
    ///
    /// [`ProductError::MissingName`] when the name is blank.
    pub fn to_component(&self) -> Result<Component, ProductError> {
        Ok(Component {
            id: self.id.unwrap_or_default(),
            name: non_blank(&self.name).ok_or(ProductError::MissingName)?,
            kind: non_blank(&self.kind),
            specifications: non_blank(&self.specifications),
            unit: non_blank(&self.unit).or_else(|| Some("st".to_owned())),
        })
    }
}

/// Picker label for a product, e.g. `Fönster (ART-1)`.
pub fn product_option_label(product: &Product) -> String {
    format!("{} ({})", product.name, product.article_number.as_deref().unwrap_or("-"))
}

/// Columns of the component table.
pub fn component_columns() -> Vec<ColumnDef> {
    vec![
        ColumnDef::new("name", "Namn"),
        ColumnDef::new("type", "Typ"),
        ColumnDef::new("specifications", "Specifikationer"),
        ColumnDef::new("unit", "Enhet"),
    ]
}

impl TableRow for Component {
    fn cell_text(&self, key: &str) -> String {
        match key {
            "name" => self.name.clone(),
            "type" => self.kind.clone().unwrap_or_default(),
            "specifications" => self.specifications.clone().unwrap_or_default(),
            "unit" => self.unit.clone().unwrap_or_default(),
            _ => String::new(),
        }
    }
}

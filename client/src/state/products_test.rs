use super::*;

use crate::state::table::TableState;

// =============================================================
// Products
// =============================================================

#[test]
fn product_draft_requires_name_and_article_number() {
    let mut draft = ProductDraft { name: "Vägg".to_owned(), ..ProductDraft::default() };
    assert_eq!(draft.to_product(), Err(ProductError::MissingIdentity));
    draft.article_number = " ART-1 ".to_owned();
    let product = draft.to_product().unwrap();
    assert_eq!(product.article_number.as_deref(), Some("ART-1"));
    assert_eq!(product.status.as_deref(), Some("Koncept"));
    assert_eq!(product.description, None);
}

#[test]
fn product_draft_round_trips_existing() {
    let product = Product {
        id: 5,
        name: "Fönster".to_owned(),
        article_number: Some("F-1".to_owned()),
        version: Some("2.0".to_owned()),
        status: Some("Godkänd".to_owned()),
        ..Product::default()
    };
    let draft = ProductDraft::from_product(&product);
    assert_eq!(draft.id, Some(5));
    assert_eq!(draft.to_product().unwrap().id, 5);
}

// =============================================================
// BOM
// =============================================================

#[test]
fn bom_requires_component() {
    let draft = BomDraft { quantity: "2".to_owned(), ..BomDraft::default() };
    assert_eq!(draft.to_payload(), Err(ProductError::MissingComponent));
}

#[test]
fn bom_quantity_must_be_positive() {
    let mut draft = BomDraft { component_id: Some(3), ..BomDraft::default() };
    for bad in ["", "abc", "0", "-1", "NaN"] {
        draft.quantity = bad.to_owned();
        assert_eq!(draft.to_payload(), Err(ProductError::InvalidQuantity), "{bad}");
    }
    draft.quantity = "2,5".to_owned();
    draft.position = "10".to_owned();
    let payload = draft.to_payload().unwrap();
    assert!((payload.quantity - 2.5).abs() < f64::EPSILON);
    assert_eq!(payload.position, Some(10));
    assert_eq!(payload.notes, None);
}

#[test]
fn bom_cells_use_dashes_for_missing_parts() {
    let item = BomItem { id: 1, component_id: 3, quantity: 1500.0, ..BomItem::default() };
    assert_eq!(bom_cells(&item), ["-", "-", "-", "1\u{a0}500", "-", "-"].map(str::to_owned));

    let item = BomItem {
        component: Some(Component {
            name: "Skruv".to_owned(),
            kind: Some("Fästelement".to_owned()),
            unit: Some("st".to_owned()),
            ..Component::default()
        }),
        position: Some(2),
        ..item
    };
    let cells = bom_cells(&item);
    assert_eq!(cells[0], "2");
    assert_eq!(cells[2], "Fästelement");
    assert_eq!(component_option_label(item.component.as_ref().unwrap()), "Skruv (Fästelement)");
}

// =============================================================
// Relations
// =============================================================

#[test]
fn relation_draft_defaults_type() {
    assert_eq!(ProductRelationDraft::default().to_payload(), Err(ProductError::MissingChild));
    let draft = ProductRelationDraft { child_product_id: Some(9), ..ProductRelationDraft::default() };
    assert_eq!(draft.to_payload().unwrap().relation_type, "består_av");
}

#[test]
fn related_product_picks_other_side() {
    let relation = ProductRelation {
        id: 1,
        parent_product_id: Some(1),
        child_product_id: Some(2),
        relation_type: "består_av".to_owned(),
        parent_product: Some(Product { id: 1, name: "A".to_owned(), ..Product::default() }),
        child_product: Some(Product { id: 2, name: "B".to_owned(), ..Product::default() }),
        ..ProductRelation::default()
    };
    assert_eq!(related_product(&relation, 1).map(|p| p.name.as_str()), Some("B"));
    assert_eq!(related_product(&relation, 2).map(|p| p.name.as_str()), Some("A"));
}

// =============================================================
// Table rows
// =============================================================

#[test]
fn product_rows_sort_by_table_state() {
    let products = vec![
        Product { id: 1, name: "Ytterdörr".to_owned(), article_number: Some("P-2".to_owned()), ..Product::default() },
        Product { id: 2, name: "Fönster".to_owned(), article_number: Some("P-1".to_owned()), ..Product::default() },
    ];
    let table = TableState::new(product_columns());
    let ids: Vec<i64> = table.filtered_rows(&products).iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![2, 1]);
}

#[test]
fn product_created_at_displays_swedish_date() {
    let product = Product { created_at: Some("2025-03-01T10:00:00".to_owned()), ..Product::default() };
    assert_eq!(product.cell_text("created_at"), "2025-03-01T10:00:00");
    assert_eq!(product.cell_display("created_at"), "1 mars 2025");
}

#[test]
fn component_cells_map_type_column() {
    let component = Component { name: "Skruv".to_owned(), kind: Some("Fästelement".to_owned()), ..Component::default() };
    assert_eq!(component.cell_text("type"), "Fästelement");
    assert_eq!(component.cell_text("okänd"), "");
}

// =============================================================
// Components
// =============================================================

#[test]
fn component_draft_defaults_unit() {
    let draft = ComponentDraft { name: " Skruv ".to_owned(), ..ComponentDraft::default() };
    let component = draft.to_component().unwrap();
    assert_eq!(component.name, "Skruv");
    assert_eq!(component.unit.as_deref(), Some("st"));
    assert_eq!(ComponentDraft::default().to_component(), Err(ProductError::MissingName));
}

#[test]
fn option_labels_show_secondary_identifier() {
    let product = Product { name: "Fönster".to_owned(), article_number: Some("ART-1".to_owned()), ..Product::default() };
    assert_eq!(product_option_label(&product), "Fönster (ART-1)");
    let component = Component { name: "Skruv".to_owned(), ..Component::default() };
    assert_eq!(component_option_label(&component), "Skruv (-)");
}

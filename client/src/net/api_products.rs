//! Product, component, BOM and product-relation REST calls.

#[cfg(test)]
#[path = "api_products_test.rs"]
mod api_products_test;

use super::http::{self, ApiError, Method};
use super::types::{BomItem, BomPayload, Component, Product, ProductRelation, ProductRelationPayload, ProductRelations};

fn product_endpoint(id: i64) -> String {
    format!("/products/{id}")
}

fn component_endpoint(id: i64) -> String {
    format!("/components/{id}")
}

fn bom_endpoint(product_id: i64) -> String {
    format!("/products/{product_id}/bom")
}

fn bom_item_endpoint(bom_id: i64) -> String {
    format!("/bom/{bom_id}")
}

fn product_relations_endpoint(product_id: i64) -> String {
    format!("/products/{product_id}/relations")
}

fn product_relation_endpoint(relation_id: i64) -> String {
    format!("/relations/{relation_id}")
}

/// `GET /products?search=&status=`.
///
/// # Errors
///
/// Propagates transport and backend errors.
pub async fn list_products(search: Option<&str>, status: Option<&str>) -> Result<Vec<Product>, ApiError> {
    let query = http::query_pairs(&[("search", search.map(str::to_owned)), ("status", status.map(str::to_owned))]);
    http::request(Method::Get, "/products", &query).await
}

/// `GET /products/{id}`.
///
/// # Errors
///
/// Propagates transport and backend errors.
pub async fn get_product(id: i64) -> Result<Product, ApiError> {
    http::get_json(&product_endpoint(id)).await
}

/// `POST /products`. The backend requires a unique article number.
///
/// # Errors
///
/// Propagates transport and backend errors.
pub async fn create_product(product: &Product) -> Result<Product, ApiError> {
    http::send_json(Method::Post, "/products", product).await
}

/// `PUT /products/{id}`.
///
/// # Errors
///
/// Propagates transport and backend errors.
pub async fn update_product(product: &Product) -> Result<Product, ApiError> {
    http::send_json(Method::Put, &product_endpoint(product.id), product).await
}

/// `DELETE /products/{id}`.
///
/// # Errors
///
/// Propagates transport and backend errors.
pub async fn delete_product(id: i64) -> Result<(), ApiError> {
    http::delete(&product_endpoint(id)).await
}

/// `GET /components`.
///
/// # Errors
///
/// Propagates transport and backend errors.
pub async fn list_components() -> Result<Vec<Component>, ApiError> {
    http::get_json("/components").await
}

/// `GET /components/{id}`.
///
/// # Errors
///
/// Propagates transport and backend errors.
pub async fn get_component(id: i64) -> Result<Component, ApiError> {
    http::get_json(&component_endpoint(id)).await
}

/// `POST /components`.
///
/// # Errors
///
/// Propagates transport and backend errors.
pub async fn create_component(component: &Component) -> Result<Component, ApiError> {
    http::send_json(Method::Post, "/components", component).await
}

/// `PUT /components/{id}`.
///
/// # Errors
///
/// Propagates transport and backend errors.
pub async fn update_component(component: &Component) -> Result<Component, ApiError> {
    http::send_json(Method::Put, &component_endpoint(component.id), component).await
}

/// `DELETE /components/{id}`.
///
/// # Errors
///
/// Propagates transport and backend errors.
pub async fn delete_component(id: i64) -> Result<(), ApiError> {
    http::delete(&component_endpoint(id)).await
}

/// `GET /products/{id}/bom`.
///
/// # Errors
///
/// Propagates transport and backend errors.
pub async fn list_bom(product_id: i64) -> Result<Vec<BomItem>, ApiError> {
    http::get_json(&bom_endpoint(product_id)).await
}

/// `POST /products/{id}/bom`. A component may appear once per BOM.
///
/// # Errors
///
/// Propagates transport and backend errors.
pub async fn add_bom_item(product_id: i64, payload: &BomPayload) -> Result<BomItem, ApiError> {
    http::send_json(Method::Post, &bom_endpoint(product_id), payload).await
}

/// `PUT /bom/{id}`.
///
/// # Errors
///
/// Propagates transport and backend errors.
pub async fn update_bom_item(bom_id: i64, payload: &BomPayload) -> Result<BomItem, ApiError> {
    http::send_json(Method::Put, &bom_item_endpoint(bom_id), payload).await
}

/// `DELETE /bom/{id}`.
///
/// # Errors
///
/// Propagates transport and backend errors.
pub async fn delete_bom_item(bom_id: i64) -> Result<(), ApiError> {
    http::delete(&bom_item_endpoint(bom_id)).await
}

/// `GET /products/{id}/relations`.
///
/// # Errors
///
/// Propagates transport and backend errors.
pub async fn list_product_relations(product_id: i64) -> Result<ProductRelations, ApiError> {
    http::get_json(&product_relations_endpoint(product_id)).await
}

/// `POST /products/{id}/relations`.
///
/// # Errors
///
/// Propagates transport and backend errors.
pub async fn add_product_relation(
    product_id: i64,
    payload: &ProductRelationPayload,
) -> Result<ProductRelation, ApiError> {
    http::send_json(Method::Post, &product_relations_endpoint(product_id), payload).await
}

/// `DELETE /relations/{id}`.
///
/// # Errors
///
/// Propagates transport and backend errors.
pub async fn delete_product_relation(relation_id: i64) -> Result<(), ApiError> {
    http::delete(&product_relation_endpoint(relation_id)).await
}

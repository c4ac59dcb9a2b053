//! Object-type schema, lookup list and view-config REST calls.

#[cfg(test)]
#[path = "api_schema_test.rs"]
mod api_schema_test;

use super::http::{self, ApiError, Method};
use super::types::{
    BuildingPartCategory, FieldPayload, Health, ManagedList, ObjectField, ObjectType, ObjectTypePayload, Stats,
    TreeDisplayMap,
};

fn object_type_endpoint(id: i64) -> String {
    format!("/object-types/{id}")
}

fn fields_endpoint(type_id: i64) -> String {
    format!("/object-types/{type_id}/fields")
}

fn field_endpoint(type_id: i64, field_id: i64) -> String {
    format!("/object-types/{type_id}/fields/{field_id}")
}

fn managed_list_endpoint(list_id: i64) -> String {
    format!("/managed-lists/{list_id}")
}

fn category_endpoint(id: i64) -> String {
    format!("/building-part-categories/{id}")
}

/// `GET /object-types?include_fields=true`.
///
/// # Errors
///
/// Propagates transport and backend errors.
pub async fn list_object_types() -> Result<Vec<ObjectType>, ApiError> {
    let query = http::query_pairs(&[("include_fields", Some("true".to_owned()))]);
    http::request(Method::Get, "/object-types", &query).await
}

/// `GET /object-types/{id}`.
///
/// # Errors
///
/// Propagates transport and backend errors.
pub async fn get_object_type(id: i64) -> Result<ObjectType, ApiError> {
    http::get_json(&object_type_endpoint(id)).await
}

/// `POST /object-types`.
///
/// # Errors
///
/// Propagates transport and backend errors.
pub async fn create_object_type(payload: &ObjectTypePayload) -> Result<ObjectType, ApiError> {
    http::send_json(Method::Post, "/object-types", payload).await
}

/// `PUT /object-types/{id}`.
///
/// # Errors
///
/// Propagates transport and backend errors.
pub async fn update_object_type(id: i64, payload: &ObjectTypePayload) -> Result<ObjectType, ApiError> {
    http::send_json(Method::Put, &object_type_endpoint(id), payload).await
}

/// `DELETE /object-types/{id}`. The backend refuses types that still have objects.
///
/// # Errors
///
/// Propagates transport and backend errors.
pub async fn delete_object_type(id: i64) -> Result<(), ApiError> {
    http::delete(&object_type_endpoint(id)).await
}

/// `POST /object-types/{id}/fields`.
///
/// # Errors
///
/// Propagates transport and backend errors.
pub async fn add_field(type_id: i64, payload: &FieldPayload) -> Result<ObjectField, ApiError> {
    http::send_json(Method::Post, &fields_endpoint(type_id), payload).await
}

/// `PUT /object-types/{id}/fields/{field_id}`.
///
/// # Errors
///
/// Propagates transport and backend errors.
pub async fn update_field(type_id: i64, field_id: i64, payload: &FieldPayload) -> Result<ObjectField, ApiError> {
    http::send_json(Method::Put, &field_endpoint(type_id, field_id), payload).await
}

/// `DELETE /object-types/{id}/fields/{field_id}`.
///
/// # Errors
///
/// Propagates transport and backend errors.
pub async fn delete_field(type_id: i64, field_id: i64) -> Result<(), ApiError> {
    http::delete(&field_endpoint(type_id, field_id)).await
}

/// `GET /managed-lists?include_items=true`.
///
/// # Errors
///
/// Propagates transport and backend errors.
pub async fn list_managed_lists() -> Result<Vec<ManagedList>, ApiError> {
    let query = http::query_pairs(&[("include_items", Some("true".to_owned()))]);
    http::request(Method::Get, "/managed-lists", &query).await
}

/// `GET /managed-lists/{id}` with its items.
///
/// # Errors
///
/// Propagates transport and backend errors.
pub async fn get_managed_list(list_id: i64) -> Result<ManagedList, ApiError> {
    let query = http::query_pairs(&[("include_items", Some("true".to_owned()))]);
    http::request(Method::Get, &managed_list_endpoint(list_id), &query).await
}

/// `GET /building-part-categories`.
///
/// # Errors
///
/// Propagates transport and backend errors.
pub async fn list_categories() -> Result<Vec<BuildingPartCategory>, ApiError> {
    http::get_json("/building-part-categories").await
}

/// `POST /building-part-categories`.
///
/// # Errors
///
/// Propagates transport and backend errors.
pub async fn create_category(category: &BuildingPartCategory) -> Result<BuildingPartCategory, ApiError> {
    http::send_json(Method::Post, "/building-part-categories", category).await
}

/// `PUT /building-part-categories/{id}`.
///
/// # Errors
///
/// Propagates transport and backend errors.
pub async fn update_category(category: &BuildingPartCategory) -> Result<BuildingPartCategory, ApiError> {
    http::send_json(Method::Put, &category_endpoint(category.id), category).await
}

/// `DELETE /building-part-categories/{id}`.
///
/// # Errors
///
/// Propagates transport and backend errors.
pub async fn delete_category(id: i64) -> Result<(), ApiError> {
    http::delete(&category_endpoint(id)).await
}

/// `GET /view-config/tree-display`, keyed by type name.
///
/// # Errors
///
/// Propagates transport and backend errors.
pub async fn tree_display_config() -> Result<TreeDisplayMap, ApiError> {
    http::get_json("/view-config/tree-display").await
}

/// `GET /health`.
///
/// # Errors
///
/// Propagates transport and backend errors; an unhealthy backend answers 500.
pub async fn health() -> Result<Health, ApiError> {
    http::get_json("/health").await
}

/// `GET /stats`.
///
/// # Errors
///
/// Propagates transport and backend errors.
pub async fn stats() -> Result<Stats, ApiError> {
    http::get_json("/stats").await
}

//! Object, relation and document REST calls.
//!
//! Endpoint paths are built by small pure helpers so the URL layout is
//! covered by native tests; the async wrappers only add transport.

#[cfg(test)]
#[path = "api_objects_test.rs"]
mod api_objects_test;

#[cfg(feature = "hydrate")]
use super::http::UploadFields;
use super::http::{self, ApiError, Method};
use super::types::{
    BatchRelationPayload, BatchRelationResult, DataMap, Document, ObjectPayload, ObjectQuery, ObjectRecord,
    Relation, RelationPayload, TreeNode,
};

fn object_endpoint(id: i64) -> String {
    format!("/objects/{id}")
}

fn duplicate_endpoint(id: i64) -> String {
    format!("/objects/{id}/duplicate")
}

fn relations_endpoint(object_id: i64) -> String {
    format!("/objects/{object_id}/relations")
}

fn relation_endpoint(object_id: i64, relation_id: i64) -> String {
    format!("/objects/{object_id}/relations/{relation_id}")
}

fn documents_endpoint(object_id: i64) -> String {
    format!("/objects/{object_id}/documents")
}

fn document_endpoint(document_id: i64) -> String {
    format!("/objects/documents/{document_id}")
}

fn linked_files_endpoint(object_id: i64) -> String {
    format!("/objects/{object_id}/linked-file-objects")
}

/// Browser URL that downloads (`download == true`) or opens a document.
pub fn document_download_url(document_id: i64, download: bool) -> String {
    let base = http::api_url(&format!("/objects/documents/{document_id}/download"));
    if download { format!("{base}?download=1") } else { base }
}

/// Query pairs for `GET /objects`.
fn object_query_pairs(query: &ObjectQuery) -> Vec<(String, String)> {
    http::query_pairs(&[
        ("type", query.object_type.clone()),
        ("search", query.search.clone()),
        ("page", query.page.map(|p| p.to_string())),
        ("per_page", query.per_page.map(|p| p.to_string())),
        ("minimal", query.minimal.then(|| "true".to_owned())),
    ])
}

fn search_query_pairs(term: &str, object_type: Option<&str>) -> Vec<(String, String)> {
    http::query_pairs(&[("q", Some(term.to_owned())), ("type", object_type.map(str::to_owned))])
}

/// `GET /objects` with optional filters.
///
/// # Errors
///
/// Propagates transport and backend errors.
pub async fn list_objects(query: &ObjectQuery) -> Result<Vec<ObjectRecord>, ApiError> {
    http::request(Method::Get, "/objects", &object_query_pairs(query)).await
}

/// `GET /objects/{id}` including data, relations and documents.
///
/// # Errors
///
/// Propagates transport and backend errors.
pub async fn get_object(id: i64) -> Result<ObjectRecord, ApiError> {
    http::get_json(&object_endpoint(id)).await
}

/// `POST /objects`.
///
/// # Errors
///
/// Propagates transport and backend errors, including validation `details`.
pub async fn create_object(payload: &ObjectPayload) -> Result<ObjectRecord, ApiError> {
    http::send_json(Method::Post, "/objects", payload).await
}

/// `PUT /objects/{id}`.
///
/// # Errors
///
/// Propagates transport and backend errors, including validation `details`.
pub async fn update_object(id: i64, payload: &ObjectPayload) -> Result<ObjectRecord, ApiError> {
    http::send_json(Method::Put, &object_endpoint(id), payload).await
}

/// `POST /objects/{id}/duplicate`, optionally overriding data on the copy.
///
/// # Errors
///
/// Propagates transport and backend errors.
pub async fn duplicate_object(id: i64, data: &DataMap) -> Result<ObjectRecord, ApiError> {
    http::send_json(Method::Post, &duplicate_endpoint(id), &serde_json::json!({ "data": data })).await
}

/// `DELETE /objects/{id}`.
///
/// # Errors
///
/// Propagates transport and backend errors.
pub async fn delete_object(id: i64) -> Result<(), ApiError> {
    http::delete(&object_endpoint(id)).await
}

/// `GET /objects/tree`.
///
/// # Errors
///
/// Propagates transport and backend errors.
pub async fn object_tree() -> Result<Vec<TreeNode>, ApiError> {
    http::get_json("/objects/tree").await
}

/// `GET /search?q=&type=`.
///
/// # Errors
///
/// Propagates transport and backend errors.
pub async fn search(term: &str, object_type: Option<&str>) -> Result<Vec<ObjectRecord>, ApiError> {
    http::request(Method::Get, "/search", &search_query_pairs(term, object_type)).await
}

/// `GET /objects/{id}/relations`.
///
/// # Errors
///
/// Propagates transport and backend errors.
pub async fn list_relations(object_id: i64) -> Result<Vec<Relation>, ApiError> {
    http::get_json(&relations_endpoint(object_id)).await
}

/// `POST /objects/{id}/relations`.
///
/// # Errors
///
/// Propagates transport and backend errors.
pub async fn add_relation(object_id: i64, payload: &RelationPayload) -> Result<Relation, ApiError> {
    http::send_json(Method::Post, &relations_endpoint(object_id), payload).await
}

/// `DELETE /objects/{id}/relations/{relation_id}`.
///
/// # Errors
///
/// Propagates transport and backend errors.
pub async fn delete_relation(object_id: i64, relation_id: i64) -> Result<(), ApiError> {
    http::delete(&relation_endpoint(object_id, relation_id)).await
}

/// `POST /relations/batch`: link every source to every target.
///
/// # Errors
///
/// Propagates transport and backend errors.
pub async fn add_relations_batch(payload: &BatchRelationPayload) -> Result<BatchRelationResult, ApiError> {
    http::send_json(Method::Post, "/relations/batch", payload).await
}

/// `GET /objects/{id}/documents`.
///
/// # Errors
///
/// Propagates transport and backend errors.
pub async fn list_documents(object_id: i64) -> Result<Vec<Document>, ApiError> {
    http::get_json(&documents_endpoint(object_id)).await
}

/// `GET /objects/{id}/linked-file-objects`: file objects related to `object_id`.
///
/// # Errors
///
/// Propagates transport and backend errors.
pub async fn linked_file_objects(object_id: i64) -> Result<Vec<ObjectRecord>, ApiError> {
    http::get_json(&linked_files_endpoint(object_id)).await
}

/// `POST /objects/{id}/documents` with one file.
///
/// # Errors
///
/// Propagates transport and backend errors.
#[cfg(feature = "hydrate")]
pub async fn upload_document(
    object_id: i64,
    file: &web_sys::File,
    fields: &UploadFields,
) -> Result<Document, ApiError> {
    http::upload_file(&documents_endpoint(object_id), file, fields).await
}

/// `DELETE /objects/documents/{id}`.
///
/// # Errors
///
/// Propagates transport and backend errors.
pub async fn delete_document(document_id: i64) -> Result<(), ApiError> {
    http::delete(&document_endpoint(document_id)).await
}

use std::collections::HashMap;
use std::time::Duration;

use axum::Router;
use axum::extract::Query;
use axum::http::HeaderValue;
use axum::routing::get;
use serde_json::{Value, json};

use super::*;
use crate::config::Config;
use crate::routes::api_routes;

async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

fn fake_backend() -> Router {
    Router::new()
        .route(
            "/api/objects",
            get(|Query(query): Query<HashMap<String, String>>| async move {
                Json(json!({ "type": query.get("type"), "count": 2 }))
            })
            .post(|body: String| async move { (StatusCode::CREATED, body) }),
        )
        .route(
            "/api/objects/99",
            get(|| async { (StatusCode::NOT_FOUND, Json(json!({ "error": "Objekt hittades inte" }))) }),
        )
        .route(
            "/api/echo-header",
            get(|headers: HeaderMap| async move {
                headers.get("x-request-id").and_then(|v| v.to_str().ok()).unwrap_or_default().to_string()
            }),
        )
}

async fn proxy_to(backend_url: String) -> String {
    let config = Config { port: 0, backend_url, backend_timeout: Duration::from_secs(5) };
    serve(api_routes(AppState::new(config).unwrap())).await
}

// =============================================================================
// FORWARDING
// =============================================================================

#[tokio::test]
async fn get_forwards_path_and_query() {
    let proxy = proxy_to(serve(fake_backend()).await).await;
    let res = reqwest::get(format!("{proxy}/api/objects?type=Byggdel")).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body, json!({ "type": "Byggdel", "count": 2 }));
}

#[tokio::test]
async fn post_forwards_body_and_status() {
    let proxy = proxy_to(serve(fake_backend()).await).await;
    let res = reqwest::Client::new()
        .post(format!("{proxy}/api/objects"))
        .header(header::CONTENT_TYPE, "application/json")
        .body(r#"{"object_type_id":1,"data":{"namn":"Vägg"}}"#)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    assert_eq!(res.text().await.unwrap(), r#"{"object_type_id":1,"data":{"namn":"Vägg"}}"#);
}

#[tokio::test]
async fn backend_errors_pass_through() {
    let proxy = proxy_to(serve(fake_backend()).await).await;
    let res = reqwest::get(format!("{proxy}/api/objects/99")).await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["error"], "Objekt hittades inte");
}

#[tokio::test]
async fn end_to_end_headers_are_forwarded() {
    let proxy = proxy_to(serve(fake_backend()).await).await;
    let res = reqwest::Client::new()
        .get(format!("{proxy}/api/echo-header"))
        .header("x-request-id", "abc-123")
        .send()
        .await
        .unwrap();
    assert_eq!(res.text().await.unwrap(), "abc-123");
}

#[tokio::test]
async fn unreachable_backend_is_bad_gateway() {
    let closed = {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        format!("http://{}", listener.local_addr().unwrap())
    };
    let proxy = proxy_to(closed).await;
    let res = reqwest::get(format!("{proxy}/api/health")).await.unwrap();
    assert_eq!(res.status(), StatusCode::BAD_GATEWAY);
    let body: Value = res.json().await.unwrap();
    assert!(body["error"].as_str().unwrap().starts_with("backend unreachable"));
}

#[tokio::test]
async fn healthz_answers_without_backend() {
    let proxy = proxy_to("http://127.0.0.1:9".to_string()).await;
    let res = reqwest::get(format!("{proxy}/healthz")).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
}

// =============================================================================
// HEADERS / ERRORS
// =============================================================================

#[test]
fn hop_by_hop_headers_are_dropped() {
    let mut headers = HeaderMap::new();
    headers.insert(header::CONNECTION, HeaderValue::from_static("keep-alive"));
    headers.insert(header::HOST, HeaderValue::from_static("localhost:3000"));
    headers.insert(header::CONTENT_LENGTH, HeaderValue::from_static("12"));
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert("x-request-id", HeaderValue::from_static("1"));

    let kept = forwarded_headers(&headers);
    assert_eq!(kept.len(), 2);
    assert!(kept.contains_key(header::CONTENT_TYPE));
    assert!(kept.contains_key("x-request-id"));
}

#[test]
fn error_statuses() {
    assert_eq!(ProxyError::Timeout.status(), StatusCode::GATEWAY_TIMEOUT);
    assert_eq!(ProxyError::Upstream("refused".into()).status(), StatusCode::BAD_GATEWAY);
    assert_eq!(ProxyError::Body("too large".into()).status(), StatusCode::PAYLOAD_TOO_LARGE);
}

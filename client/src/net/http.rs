//! HTTP request plumbing shared by every resource client.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): every call fails with [`ApiError::Unavailable`] since
//! the REST backend is only reached from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Responses must carry a JSON content type. Non-JSON bodies become
//! [`ApiError::NotJson`]; JSON bodies on non-2xx statuses become
//! [`ApiError::Status`] with the backend's `error` and `details` fields.
//! Callers turn errors into toasts with [`ApiError::user_message`].
//!
//! LOADING INDICATOR
//! =================
//! Each request holds a [`LoadingGuard`] for its whole lifetime, so the
//! pending counter drops even when decoding fails.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use std::cell::Cell;

use leptos::prelude::*;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::state::ui::LoadingState;

/// Mount point of the REST backend on the host origin.
pub const API_BASE: &str = "/api";

/// Message used when the backend omits `error` on a failed request.
pub const DEFAULT_ERROR_MESSAGE: &str = "An error occurred";

/// Failure modes of a REST call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("Server error: {status} {status_text}")]
    NotJson { status: u16, status_text: String },
    #[error("{message}")]
    Status { status: u16, message: String, details: Vec<String> },
    #[error("invalid response: {0}")]
    Decode(String),
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Text suitable for a toast. Validation details win over the headline.
    #[must_use]
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Status { details, .. } if !details.is_empty() => details.join(", "),
            Self::Status { message, .. } if !message.trim().is_empty() => message.clone(),
            Self::NotJson { .. } => self.to_string(),
            _ => fallback.to_owned(),
        }
    }

    /// HTTP status, when the server answered at all.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } | Self::NotJson { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// HTTP verbs used against the backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

/// Join an endpoint onto [`API_BASE`].
pub fn api_url(endpoint: &str) -> String {
    if endpoint.starts_with('/') {
        format!("{API_BASE}{endpoint}")
    } else {
        format!("{API_BASE}/{endpoint}")
    }
}

/// Drop query pairs whose value is empty, keeping order.
pub fn query_pairs(pairs: &[(&str, Option<String>)]) -> Vec<(String, String)> {
    pairs
        .iter()
        .filter_map(|(key, value)| {
            let value = value.as_deref()?.trim();
            if value.is_empty() {
                return None;
            }
            Some(((*key).to_owned(), value.to_owned()))
        })
        .collect()
}

/// Whether a `content-type` header announces JSON.
pub fn is_json_content_type(content_type: Option<&str>) -> bool {
    content_type.is_some_and(|ct| ct.to_ascii_lowercase().contains("application/json"))
}

/// Build the error for a JSON body returned with a failing status.
pub fn error_from_body(status: u16, body: &serde_json::Value) -> ApiError {
    let message = body
        .get("error")
        .and_then(serde_json::Value::as_str)
        .filter(|m| !m.trim().is_empty())
        .unwrap_or(DEFAULT_ERROR_MESSAGE)
        .to_owned();
    let details = match body.get("details") {
        Some(serde_json::Value::Array(items)) => items
            .iter()
            .map(|item| item.as_str().map_or_else(|| item.to_string(), str::to_owned))
            .collect(),
        Some(serde_json::Value::String(detail)) if !detail.trim().is_empty() => vec![detail.clone()],
        _ => Vec::new(),
    };
    ApiError::Status { status, message, details }
}

/// Raw response parts, independent of the transport.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub status_text: String,
    pub content_type: Option<String>,
    pub body: String,
}

impl RawResponse {
    fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Turn a raw response into a typed value or an [`ApiError`].
///
/// # Errors
///
/// Returns [`ApiError::NotJson`] for non-JSON bodies, [`ApiError::Status`]
/// for failing statuses and [`ApiError::Decode`] when the JSON does not fit `T`.
pub fn decode_response<T: DeserializeOwned>(raw: &RawResponse) -> Result<T, ApiError> {
    if !is_json_content_type(raw.content_type.as_deref()) {
        return Err(ApiError::NotJson { status: raw.status, status_text: raw.status_text.clone() });
    }
    let value: serde_json::Value = serde_json::from_str(&raw.body).map_err(|e| ApiError::Decode(e.to_string()))?;
    if !raw.ok() {
        return Err(error_from_body(raw.status, &value));
    }
    serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
}

// =============================================================================
// LOADING INDICATOR
// =============================================================================

/// Delay before the spinner becomes visible for a pending request.
pub const LOADING_DELAY_MS: u32 = 300;

thread_local! {
    static LOADING: Cell<Option<RwSignal<LoadingState>>> = const { Cell::new(None) };
}

/// Register the app-wide loading signal. Called once by the root component.
pub fn register_loading(signal: RwSignal<LoadingState>) {
    LOADING.with(|cell| cell.set(Some(signal)));
}

/// Keeps the loading indicator's pending counter raised while alive.
pub struct LoadingGuard {
    signal: Option<RwSignal<LoadingState>>,
}

impl LoadingGuard {
    #[must_use]
    pub fn start() -> Self {
        let signal = LOADING.with(Cell::get);
        if let Some(signal) = signal {
            let mut generation = None;
            signal.update(|s| generation = s.begin());
            if let Some(generation) = generation {
                schedule_reveal(signal, generation);
            }
        }
        Self { signal }
    }
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        if let Some(signal) = self.signal {
            signal.update(LoadingState::end);
        }
    }
}

fn schedule_reveal(signal: RwSignal<LoadingState>, generation: u64) {
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(LOADING_DELAY_MS).await;
            signal.update(|s| s.reveal(generation));
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (signal, generation);
    }
}

// =============================================================================
// TRANSPORT
// =============================================================================

#[cfg(feature = "hydrate")]
fn builder(method: Method, url: &str) -> gloo_net::http::RequestBuilder {
    use gloo_net::http::Request;
    match method {
        Method::Get => Request::get(url),
        Method::Post => Request::post(url),
        Method::Put => Request::put(url),
        Method::Delete => Request::delete(url),
    }
}

#[cfg(feature = "hydrate")]
async fn read_raw(resp: gloo_net::http::Response) -> Result<RawResponse, ApiError> {
    let status = resp.status();
    let status_text = resp.status_text();
    let content_type = resp.headers().get("content-type");
    let body = resp.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
    Ok(RawResponse { status, status_text, content_type, body })
}

/// Issue a request without a body.
///
/// # Errors
///
/// See [`decode_response`]; network failures map to [`ApiError::Network`].
pub async fn request<T: DeserializeOwned>(
    method: Method,
    endpoint: &str,
    query: &[(String, String)],
) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let _loading = LoadingGuard::start();
        let url = api_url(endpoint);
        let resp = builder(method, &url)
            .query(query.iter().map(|(k, v)| (k.as_str(), v.as_str())))
            .header("Content-Type", "application/json")
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let raw = read_raw(resp).await?;
        let result = decode_response(&raw);
        if let Err(err) = &result {
            log::error!("{method:?} {url} failed: {err}");
        }
        result
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (method, endpoint, query);
        Err(ApiError::Unavailable)
    }
}

/// Issue a request with a JSON body.
///
/// # Errors
///
/// See [`request`].
pub async fn send_json<B: Serialize, T: DeserializeOwned>(
    method: Method,
    endpoint: &str,
    body: &B,
) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let _loading = LoadingGuard::start();
        let url = api_url(endpoint);
        let resp = builder(method, &url)
            .json(body)
            .map_err(|e| ApiError::Decode(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let raw = read_raw(resp).await?;
        let result = decode_response(&raw);
        if let Err(err) = &result {
            log::error!("{method:?} {url} failed: {err}");
        }
        result
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (method, endpoint, body);
        Err(ApiError::Unavailable)
    }
}

/// `GET` a JSON resource.
///
/// # Errors
///
/// See [`request`].
pub async fn get_json<T: DeserializeOwned>(endpoint: &str) -> Result<T, ApiError> {
    request(Method::Get, endpoint, &[]).await
}

/// `DELETE` a resource, discarding the confirmation body.
///
/// # Errors
///
/// See [`request`].
pub async fn delete(endpoint: &str) -> Result<(), ApiError> {
    request::<serde_json::Value>(Method::Delete, endpoint, &[]).await.map(|_| ())
}

/// Multipart upload fields besides the file itself.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UploadFields {
    pub description: Option<String>,
    pub document_type: Option<String>,
}

/// `POST` a single browser file as `multipart/form-data`.
///
/// # Errors
///
/// See [`request`].
#[cfg(feature = "hydrate")]
pub async fn upload_file<T: DeserializeOwned>(
    endpoint: &str,
    file: &web_sys::File,
    fields: &UploadFields,
) -> Result<T, ApiError> {
    let _loading = LoadingGuard::start();
    let form = web_sys::FormData::new().map_err(|_| ApiError::Network("FormData unavailable".to_owned()))?;
    form.append_with_blob_and_filename("file", file, &file.name())
        .map_err(|_| ApiError::Network("could not attach file".to_owned()))?;
    for (key, value) in [("description", &fields.description), ("document_type", &fields.document_type)] {
        if let Some(value) = value.as_deref().filter(|v| !v.trim().is_empty()) {
            let _ = form.append_with_str(key, value);
        }
    }
    let url = api_url(endpoint);
    let resp = gloo_net::http::Request::post(&url)
        .body(form)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    let raw = read_raw(resp).await?;
    decode_response(&raw)
}

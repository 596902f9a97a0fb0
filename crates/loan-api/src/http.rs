//! Shared HTTP response helpers for the timeline service client.
//!
//! Centralizes the status check (non-success -> [`FetchError::Status`] with
//! the `detail` field of a `{"detail": ...}` body) and body decoding so the
//! endpoint modules stay focused on request construction.

use serde::de::DeserializeOwned;

use crate::error::FetchError;

#[derive(serde::Deserialize)]
struct ErrorBody {
    detail: Option<serde_json::Value>,
}

/// Check an HTTP response for a non-success status.
///
/// Returns the response unchanged on success. Otherwise reads the body and
/// keeps its `detail` when it is a non-empty string; validation errors that
/// carry a structured `detail` fall back to the generic message.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, FetchError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    let body = resp.text().await.unwrap_or_default();
    let detail = extract_detail(&body);
    tracing::warn!(status = status.as_u16(), detail = ?detail, "timeline service returned an error");
    Err(FetchError::Status {
        status: status.as_u16(),
        detail,
    })
}

/// Read the body and decode it as `T`.
pub async fn decode<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, FetchError> {
    let body = resp.text().await?;
    serde_json::from_str(&body).map_err(|e| FetchError::Decode(e.to_string()))
}

fn extract_detail(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    match parsed.detail? {
        serde_json::Value::String(detail) if !detail.trim().is_empty() => Some(detail),
        _ => None,
    }
}

//! Shared HTTP response helpers for the endpoint modules.
//!
//! Centralizes status-code checks, error-body extraction, optional bodies and
//! session cookie capture so the endpoint modules stay focused on request
//! construction.

use reqwest::header::SET_COOKIE;
use serde::de::DeserializeOwned;

use crate::error::ClientError;

/// Check an HTTP response for a non-success status.
///
/// Returns the response unchanged on success. Otherwise yields
/// [`ClientError::Api`] with the status code and the body's `message` field
/// (or the raw body when it is not JSON).
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, ClientError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.text().await.unwrap_or_default();
    tracing::debug!(status = status.as_u16(), %body, "backend returned an error");
    Err(ClientError::Api {
        status: status.as_u16(),
        message: error_message(&body, status.canonical_reason().unwrap_or("request failed")),
    })
}

/// Pull a human-readable message out of an error body.
fn error_message(body: &str, fallback: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return fallback.to_string();
    }
    serde_json::from_str::<serde_json::Value>(trimmed)
        .ok()
        .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(ToString::to_string))
        .unwrap_or_else(|| trimmed.to_string())
}

/// Decode a JSON body into `T`.
pub async fn read_json<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, ClientError> {
    let body = resp.text().await?;
    serde_json::from_str(&body).map_err(|e| ClientError::Parse(e.to_string()))
}

/// Decode a body that may be empty or `null`.
pub async fn read_optional<T: DeserializeOwned>(
    resp: reqwest::Response,
) -> Result<Option<T>, ClientError> {
    let body = resp.text().await?;
    parse_optional(&body)
}

fn parse_optional<T: DeserializeOwned>(body: &str) -> Result<Option<T>, ClientError> {
    let trimmed = body.trim();
    if trimmed.is_empty() || trimmed == "null" {
        return Ok(None);
    }
    serde_json::from_str(trimmed)
        .map(Some)
        .map_err(|e| ClientError::Parse(e.to_string()))
}

/// Decode an untyped acknowledgement body; empty becomes `null`.
pub async fn read_value(resp: reqwest::Response) -> Result<serde_json::Value, ClientError> {
    Ok(read_optional(resp).await?.unwrap_or(serde_json::Value::Null))
}

/// Collapse every `Set-Cookie` header into a single `Cookie` header value.
///
/// Only the `name=value` pair of each cookie is kept; attributes such as
/// `Path` or `HttpOnly` are dropped.
pub fn session_cookie(resp: &reqwest::Response) -> Option<String> {
    let pairs: Vec<&str> = resp
        .headers()
        .get_all(SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .filter_map(|v| v.split(';').next())
        .map(str::trim)
        .filter(|pair| pair.contains('='))
        .collect();
    if pairs.is_empty() {
        None
    } else {
        Some(pairs.join("; "))
    }
}

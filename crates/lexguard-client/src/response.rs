//! Shared HTTP response helpers
//!
//! Status checks and body decoding live here so the transport only builds
//! requests. Error bodies follow the FastAPI convention: `{"detail": "..."}`
//! or, for request validation failures, `{"detail": [{"msg": "..."}]}`.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use lexguard_core::prelude::*;
use lexguard_core::DocumentSummary;

/// Pass successful responses through; turn anything else into
/// [`Error::Remote`] carrying the server's `detail` or `fallback`.
pub async fn check_response(resp: reqwest::Response, fallback: &str) -> Result<reqwest::Response> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    let body = resp.text().await.unwrap_or_default();
    let message = extract_detail(&body).unwrap_or_else(|| fallback.to_string());
    warn!("Request failed with {} ({})", status, body_note(&body));
    Err(Error::remote(Some(status.as_u16()), message))
}

/// Decode a successful response body. A body that does not parse is
/// reported with the fallback message; the parse error only goes to the log.
pub async fn read_json<T: DeserializeOwned>(resp: reqwest::Response, fallback: &str) -> Result<T> {
    let status = resp.status().as_u16();
    let body = resp.text().await.map_err(|e| {
        warn!("Failed to read response body: {}", e);
        Error::remote(Some(status), fallback)
    })?;

    serde_json::from_str(&body).map_err(|e| {
        warn!("Malformed response body ({}): {}", body_note(&body), e);
        Error::remote(Some(status), fallback)
    })
}

/// Log-safe description of a body; bodies echo document text so only the
/// size is recorded.
fn body_note(body: &str) -> String {
    format!("{} byte body", body.len())
}

/// Pull a user-facing message out of an error body.
pub fn extract_detail(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Array(items) => items
            .iter()
            .find_map(|item| item.get("msg").and_then(Value::as_str))
            .map(str::to_string),
        _ => None,
    }
}

/// `GET /api/documents` returns either a bare array or `{"documents": [...]}`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum DocumentList {
    Bare(Vec<DocumentSummary>),
    Wrapped { documents: Vec<DocumentSummary> },
}

impl DocumentList {
    pub(crate) fn into_vec(self) -> Vec<DocumentSummary> {
        match self {
            DocumentList::Bare(docs) | DocumentList::Wrapped { documents: docs } => docs,
        }
    }
}

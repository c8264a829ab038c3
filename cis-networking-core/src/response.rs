//! Response types returned by every operation.

use reqwest::header::HeaderMap;
use serde::de::DeserializeOwned;

use crate::error::{Result, SdkError};
use crate::utils::log_sanitizer::truncate_for_log;

/// An undecoded HTTP response.
#[derive(Debug, Clone)]
pub struct RawResponse {
    /// HTTP status code.
    pub status_code: u16,
    /// Response headers.
    pub headers: HeaderMap,
    /// Response body as text.
    pub body: String,
}

/// A decoded HTTP response.
///
/// `result` is `None` when the server answered 2xx with an empty body.
#[derive(Debug, Clone)]
pub struct DetailedResponse<T> {
    /// HTTP status code.
    pub status_code: u16,
    /// Response headers.
    pub headers: HeaderMap,
    /// Decoded body.
    pub result: Option<T>,
}

impl<T> DetailedResponse<T> {
    /// Borrow the decoded body.
    pub fn result(&self) -> Option<&T> {
        self.result.as_ref()
    }

    /// Take the decoded body, dropping status and headers.
    pub fn into_result(self) -> Option<T> {
        self.result
    }

    /// Look up a response header as a string.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

impl<T: DeserializeOwned> DetailedResponse<T> {
    /// Decode a 2xx response.
    ///
    /// Empty (or whitespace-only) bodies decode to `result: None`. Bodies that
    /// are not valid JSON for `T` fail with [`SdkError::ResponseProcessing`]
    /// carrying the raw response.
    pub fn from_raw(raw: RawResponse) -> Result<Self> {
        if raw.body.trim().is_empty() {
            return Ok(Self {
                status_code: raw.status_code,
                headers: raw.headers,
                result: None,
            });
        }

        match serde_json::from_str::<T>(&raw.body) {
            Ok(result) => Ok(Self {
                status_code: raw.status_code,
                headers: raw.headers,
                result: Some(result),
            }),
            Err(e) => {
                log::error!("JSON parse failed: {e}");
                log::error!("Raw response: {}", truncate_for_log(&raw.body));
                Err(SdkError::ResponseProcessing {
                    detail: e.to_string(),
                    response: Box::new(raw),
                })
            }
        }
    }
}

/// Pull a human-readable message out of an error body.
///
/// Understands the shapes IBM Cloud services use: `{"errors":[{"message":…}]}`,
/// `{"errors":[["…"]]}`, `{"error":…}`, `{"message":…}` and
/// `{"errorMessage":…}`. Falls back to the canonical status reason.
pub(crate) fn extract_error_message(status_code: u16, body: &str) -> String {
    let fallback = || {
        reqwest::StatusCode::from_u16(status_code)
            .ok()
            .and_then(|s| s.canonical_reason())
            .unwrap_or("Unknown error")
            .to_string()
    };

    let Ok(value) = serde_json::from_str::<serde_json::Value>(body) else {
        return fallback();
    };

    if let Some(first) = value
        .get("errors")
        .and_then(|e| e.as_array())
        .and_then(|e| e.first())
    {
        if let Some(msg) = first.get("message").and_then(|m| m.as_str()) {
            return msg.to_string();
        }
        if let Some(parts) = first.as_array() {
            let joined: Vec<&str> = parts.iter().filter_map(|p| p.as_str()).collect();
            if !joined.is_empty() {
                return joined.join(" ");
            }
        }
    }

    for key in ["error", "message", "errorMessage"] {
        if let Some(msg) = value.get(key).and_then(|m| m.as_str()) {
            return msg.to_string();
        }
    }

    fallback()
}

//! Request construction.
//!
//! An [`ApiRequest`] is a fully bound description of one call: method, path
//! with parameters substituted, query, headers and optional JSON body. It is
//! transport-independent and can be replayed on every retry attempt.

use std::collections::HashMap;

use reqwest::Method;
use serde::Serialize;
use url::Url;

use crate::error::{ERRORMSG_SERVICE_URL_MISSING, Result, SdkError};

/// A bound request, ready to be sent by a [`BaseService`](crate::BaseService).
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub(crate) method: Method,
    pub(crate) path: String,
    pub(crate) query: Vec<(String, String)>,
    pub(crate) headers: Vec<(String, String)>,
    pub(crate) body: Option<Vec<u8>>,
}

impl ApiRequest {
    /// Bind a path template such as `/v1/{crn}/zones/{zone_identifier}`.
    ///
    /// Every `{name}` placeholder must have a non-empty value in
    /// `path_params`; values are escaped as a single path segment, so a CRN
    /// keeps its `:` separators while any `/` inside it is escaped.
    pub fn new(method: Method, path_template: &str, path_params: &[(&str, &str)]) -> Result<Self> {
        let mut path = path_template.to_string();
        for (name, value) in path_params {
            if value.is_empty() {
                return Err(SdkError::empty_field(name));
            }
            path = path.replace(&format!("{{{name}}}"), &encode_path_segment(value));
        }
        if let Some(start) = path.find('{') {
            let end = path[start..].find('}').map_or(path.len(), |e| start + e);
            return Err(SdkError::missing_field(&path[start + 1..end]));
        }

        Ok(Self {
            method,
            path,
            query: Vec::new(),
            headers: vec![("Accept".to_string(), "application/json".to_string())],
            body: None,
        })
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Path with parameters substituted.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Add a query parameter; `None` values are skipped.
    #[must_use]
    pub fn query<V: ToString>(mut self, name: &str, value: Option<V>) -> Self {
        if let Some(v) = value {
            self.query.push((name.to_string(), v.to_string()));
        }
        self
    }

    /// Set a header, replacing any earlier value with the same name.
    #[must_use]
    pub fn header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.headers.retain(|(n, _)| !n.eq_ignore_ascii_case(name));
        self.headers.push((name.to_string(), value.into()));
        self
    }

    /// Set a header only when a value is present.
    #[must_use]
    pub fn optional_header(self, name: &str, value: Option<&str>) -> Self {
        match value {
            Some(v) => self.header(name, v),
            None => self,
        }
    }

    /// Merge caller headers, which win over anything set before.
    #[must_use]
    pub fn headers(mut self, headers: &HashMap<String, String>) -> Self {
        for (name, value) in headers {
            self = self.header(name, value.clone());
        }
        self
    }

    /// Attach a JSON body and the matching `Content-Type`.
    pub fn json_body<B: Serialize + ?Sized>(self, body: &B) -> Result<Self> {
        let bytes =
            serde_json::to_vec(body).map_err(|e| SdkError::Serialization(e.to_string()))?;
        let mut req = self.header("Content-Type", "application/json");
        req.body = Some(bytes);
        Ok(req)
    }

    /// Body bytes, if any.
    pub fn body(&self) -> Option<&[u8]> {
        self.body.as_deref()
    }

    /// Header value by case-insensitive name.
    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Absolute URL against `service_url`.
    pub fn url(&self, service_url: &str) -> Result<Url> {
        if service_url.is_empty() {
            return Err(SdkError::Request(ERRORMSG_SERVICE_URL_MISSING.to_string()));
        }
        let joined = format!("{}{}", service_url.trim_end_matches('/'), self.path);
        let mut url = Url::parse(&joined).map_err(|e| {
            SdkError::Configuration(format!("invalid request URL '{joined}': {e}"))
        })?;
        if !self.query.is_empty() {
            url.query_pairs_mut().extend_pairs(&self.query);
        }
        Ok(url)
    }
}

/// Sub-delimiters that stay literal inside a path segment.
const SEGMENT_SAFE: [(&str, &str); 6] = [
    ("%3A", ":"),
    ("%40", "@"),
    ("%26", "&"),
    ("%3D", "="),
    ("%2B", "+"),
    ("%24", "$"),
];

/// Escape `value` for use as one path segment.
///
/// Unreserved characters and the segment-safe sub-delimiters above pass
/// through; `/`, `?`, `;`, `,`, `%` and everything else are escaped.
pub fn encode_path_segment(value: &str) -> String {
    let mut encoded = urlencoding::encode(value).into_owned();
    for (escaped, literal) in SEGMENT_SAFE {
        encoded = encoded.replace(escaped, literal);
    }
    encoded
}

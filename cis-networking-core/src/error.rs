use thiserror::Error;

use crate::response::RawResponse;

/// Stable message for requests issued while no service URL is configured.
pub const ERRORMSG_SERVICE_URL_MISSING: &str = "service URL missing";

/// Unified error type for every client operation.
///
/// Errors fall into two broad groups: those raised before any network I/O
/// ([`Configuration`](Self::Configuration), [`Validation`](Self::Validation))
/// and those raised while talking to the server. Variants that reached the
/// server keep the raw response so callers can still inspect the status code
/// and headers.
///
/// # Retryable Errors
///
/// - [`Request`](Self::Request): transport failure (connection refused, DNS, TLS)
/// - [`Http`](Self::Http) with status 429, 500, 502, 503 or 504
///
/// When retries are enabled on a service these are retried with exponential
/// backoff before being surfaced.
#[derive(Error, Debug)]
pub enum SdkError {
    /// Invalid construction parameters, bad URL syntax, or an authenticator
    /// that cannot be built from the supplied configuration.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A required options field was left unset.
    #[error("Validation error: '{field}' {detail}")]
    Validation {
        /// Name of the offending field.
        field: String,
        /// What is wrong with it.
        detail: String,
    },

    /// A request body could not be serialized.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// The request never reached the server.
    #[error("Request error: {0}")]
    Request(String),

    /// The authenticator could not produce credentials for the request.
    #[error("Authentication error: {0}")]
    Authentication(String),

    /// The server answered with a non-2xx status.
    #[error("HTTP {status_code}: {message}")]
    Http {
        /// HTTP status code.
        status_code: u16,
        /// Error message extracted from the response body, or the status reason.
        message: String,
        /// The raw response.
        response: Box<RawResponse>,
    },

    /// The server answered 2xx but the body could not be decoded.
    #[error("Error processing the HTTP response: {detail}")]
    ResponseProcessing {
        /// Decoder error details.
        detail: String,
        /// The raw response.
        response: Box<RawResponse>,
    },

    /// The request context deadline expired before the server responded.
    #[error("context deadline exceeded")]
    DeadlineExceeded,

    /// The request context was cancelled by the caller.
    #[error("context canceled")]
    Cancelled,
}

impl SdkError {
    pub(crate) fn validation(field: &str, detail: impl Into<String>) -> Self {
        Self::Validation {
            field: field.to_string(),
            detail: detail.into(),
        }
    }

    /// Error for a required field that was not set.
    pub fn missing_field(field: &str) -> Self {
        Self::validation(field, "is required")
    }

    /// Error for a field that was set to an empty value.
    pub fn empty_field(field: &str) -> Self {
        Self::validation(field, "must not be empty")
    }

    /// Raw response attached to the error, if the server was reached.
    pub fn response(&self) -> Option<&RawResponse> {
        match self {
            Self::Http { response, .. } | Self::ResponseProcessing { response, .. } => {
                Some(response)
            }
            _ => None,
        }
    }

    /// HTTP status code attached to the error, if the server was reached.
    pub fn status_code(&self) -> Option<u16> {
        self.response().map(|r| r.status_code)
    }

    /// Whether the failure is transient and worth retrying.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Request(msg) => msg != ERRORMSG_SERVICE_URL_MISSING,
            Self::Http { status_code, .. } => is_retryable_status(*status_code),
            _ => false,
        }
    }
}

/// Statuses that indicate a transient server-side condition.
pub(crate) fn is_retryable_status(status_code: u16) -> bool {
    matches!(status_code, 429 | 500 | 502 | 503 | 504)
}

/// Convenience type alias for `Result<T, SdkError>`.
pub type Result<T> = std::result::Result<T, SdkError>;

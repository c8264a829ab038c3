//! Request authenticators.
//!
//! An [`Authenticator`] decorates each outgoing request with credentials. The
//! base service holds it behind an `Arc`, so cloned services share one
//! authenticator (and, for IAM, one token cache).

mod iam;

use std::fmt;

use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};

use crate::error::{Result, SdkError};

pub use iam::{DEFAULT_IAM_URL, IamAuthenticator, IamAuthenticatorBuilder};

/// Authentication type names accepted in `<SERVICE>_AUTH_TYPE`.
pub const AUTHTYPE_NOAUTH: &str = "noauth";
/// Basic authentication.
pub const AUTHTYPE_BASIC: &str = "basic";
/// Static bearer token.
pub const AUTHTYPE_BEARER_TOKEN: &str = "bearertoken";
/// IAM API key exchanged for an access token.
pub const AUTHTYPE_IAM: &str = "iam";

/// Produces credentials for outgoing requests.
#[async_trait]
pub trait Authenticator: Send + Sync + fmt::Debug {
    /// One of the `AUTHTYPE_*` constants.
    fn authentication_type(&self) -> &'static str;

    /// Add credentials to the request headers.
    async fn authenticate(&self, headers: &mut HeaderMap) -> Result<()>;

    /// Check that the authenticator is usable.
    fn validate(&self) -> Result<()>;
}

/// Sends requests without credentials.
#[derive(Debug, Clone, Default)]
pub struct NoAuthAuthenticator;

impl NoAuthAuthenticator {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Authenticator for NoAuthAuthenticator {
    fn authentication_type(&self) -> &'static str {
        AUTHTYPE_NOAUTH
    }

    async fn authenticate(&self, _headers: &mut HeaderMap) -> Result<()> {
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        Ok(())
    }
}

/// HTTP basic authentication.
#[derive(Clone)]
pub struct BasicAuthenticator {
    username: String,
    password: String,
}

impl BasicAuthenticator {
    /// Create a basic authenticator; both values must be non-empty.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Result<Self> {
        let auth = Self {
            username: username.into(),
            password: password.into(),
        };
        auth.validate()?;
        Ok(auth)
    }

    pub fn username(&self) -> &str {
        &self.username
    }
}

impl fmt::Debug for BasicAuthenticator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BasicAuthenticator")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

#[async_trait]
impl Authenticator for BasicAuthenticator {
    fn authentication_type(&self) -> &'static str {
        AUTHTYPE_BASIC
    }

    async fn authenticate(&self, headers: &mut HeaderMap) -> Result<()> {
        let encoded = STANDARD.encode(format!("{}:{}", self.username, self.password));
        headers.insert(AUTHORIZATION, header_value(&format!("Basic {encoded}"))?);
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        check_credential("username", &self.username)?;
        check_credential("password", &self.password)
    }
}

/// Sends a caller-supplied bearer token.
#[derive(Clone)]
pub struct BearerTokenAuthenticator {
    bearer_token: String,
}

impl BearerTokenAuthenticator {
    pub fn new(bearer_token: impl Into<String>) -> Result<Self> {
        let auth = Self {
            bearer_token: bearer_token.into(),
        };
        auth.validate()?;
        Ok(auth)
    }

    /// Replace the token, e.g. after the caller refreshed it.
    pub fn set_bearer_token(&mut self, bearer_token: impl Into<String>) {
        self.bearer_token = bearer_token.into();
    }
}

impl fmt::Debug for BearerTokenAuthenticator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BearerTokenAuthenticator")
            .field("bearer_token", &"[REDACTED]")
            .finish()
    }
}

#[async_trait]
impl Authenticator for BearerTokenAuthenticator {
    fn authentication_type(&self) -> &'static str {
        AUTHTYPE_BEARER_TOKEN
    }

    async fn authenticate(&self, headers: &mut HeaderMap) -> Result<()> {
        headers.insert(
            AUTHORIZATION,
            header_value(&format!("Bearer {}", self.bearer_token))?,
        );
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if self.bearer_token.is_empty() {
            return Err(SdkError::Configuration(
                "the bearer token must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Reject empty credentials and ones still wrapped in `{}` or quotes, which
/// usually means a template placeholder was never filled in.
pub(crate) fn check_credential(name: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(SdkError::Configuration(format!(
            "the {name} must not be empty"
        )));
    }
    let wrapped = |open: char, close: char| value.starts_with(open) && value.ends_with(close);
    if wrapped('{', '}') || wrapped('"', '"') {
        return Err(SdkError::Configuration(format!(
            "the {name} must not be wrapped in curly brackets or quotes"
        )));
    }
    Ok(())
}

pub(crate) fn header_value(value: &str) -> Result<HeaderValue> {
    HeaderValue::from_str(value)
        .map_err(|e| SdkError::Authentication(format!("invalid credential header: {e}")))
}

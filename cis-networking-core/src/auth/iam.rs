//! IAM API-key authenticator.
//!
//! Exchanges an API key for an access token at the IAM token endpoint and
//! caches it. The token is refreshed once 80% of its lifetime has passed;
//! concurrent callers wait on the same refresh.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap};
use serde::Deserialize;
use tokio::sync::Mutex;

use super::{AUTHTYPE_IAM, Authenticator, check_credential, header_value};
use crate::error::{Result, SdkError};
use crate::response::extract_error_message;
use crate::utils::log_sanitizer::truncate_for_log;

/// Default IAM endpoint.
pub const DEFAULT_IAM_URL: &str = "https://iam.cloud.ibm.com";

const TOKEN_PATH: &str = "/identity/token";
const GRANT_TYPE_APIKEY: &str = "urn:ibm:params:oauth:grant-type:apikey";
const TOKEN_REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    expires_in: i64,
    expiration: i64,
}

#[derive(Debug, Clone)]
struct CachedToken {
    access_token: String,
    /// Unix seconds after which the token should be refreshed.
    refresh_at: i64,
    /// Unix seconds at which IAM considers the token expired.
    expires_at: i64,
}

impl CachedToken {
    fn from_response(resp: TokenResponse) -> Self {
        let issued_at = resp.expiration.saturating_sub(resp.expires_in);
        // 0.8 of the lifetime, in integer arithmetic
        let refresh_at = issued_at.saturating_add(resp.expires_in.saturating_mul(4) / 5);
        Self {
            access_token: resp.access_token,
            refresh_at,
            expires_at: resp.expiration,
        }
    }

    fn needs_refresh(&self, now: i64) -> bool {
        now >= self.refresh_at || now >= self.expires_at
    }
}

/// Builder for [`IamAuthenticator`].
#[derive(Clone)]
pub struct IamAuthenticatorBuilder {
    apikey: String,
    url: String,
    client_id: Option<String>,
    client_secret: Option<String>,
    scope: Option<String>,
    disable_ssl: bool,
}

impl IamAuthenticatorBuilder {
    /// Override the IAM endpoint (without the `/identity/token` path).
    #[must_use]
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Client credentials sent as basic auth on the token request.
    #[must_use]
    pub fn client_credentials(
        mut self,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Self {
        self.client_id = Some(client_id.into());
        self.client_secret = Some(client_secret.into());
        self
    }

    #[must_use]
    pub fn scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = Some(scope.into());
        self
    }

    /// Skip TLS certificate verification on the token request.
    #[must_use]
    pub fn disable_ssl(mut self, disable_ssl: bool) -> Self {
        self.disable_ssl = disable_ssl;
        self
    }

    pub fn build(self) -> Result<IamAuthenticator> {
        let client = Client::builder()
            .timeout(Duration::from_secs(TOKEN_REQUEST_TIMEOUT_SECS))
            .danger_accept_invalid_certs(self.disable_ssl)
            .build()
            .map_err(|e| SdkError::Configuration(format!("failed to create IAM client: {e}")))?;

        let auth = IamAuthenticator {
            apikey: self.apikey,
            url: self.url.trim_end_matches('/').to_string(),
            client_id: self.client_id,
            client_secret: self.client_secret,
            scope: self.scope,
            client,
            token: Mutex::new(None),
        };
        auth.validate()?;
        Ok(auth)
    }
}

/// Authenticates with an IAM access token obtained from an API key.
pub struct IamAuthenticator {
    apikey: String,
    url: String,
    client_id: Option<String>,
    client_secret: Option<String>,
    scope: Option<String>,
    client: Client,
    token: Mutex<Option<CachedToken>>,
}

impl IamAuthenticator {
    pub fn builder(apikey: impl Into<String>) -> IamAuthenticatorBuilder {
        IamAuthenticatorBuilder {
            apikey: apikey.into(),
            url: DEFAULT_IAM_URL.to_string(),
            client_id: None,
            client_secret: None,
            scope: None,
            disable_ssl: false,
        }
    }

    /// Authenticator against the default IAM endpoint.
    pub fn new(apikey: impl Into<String>) -> Result<Self> {
        Self::builder(apikey).build()
    }

    /// Current access token, fetching or refreshing it when needed.
    pub async fn token(&self) -> Result<String> {
        let mut cached = self.token.lock().await;
        let now = chrono::Utc::now().timestamp();

        if let Some(token) = cached.as_ref()
            && !token.needs_refresh(now)
        {
            return Ok(token.access_token.clone());
        }

        let fresh = self.request_token().await?;
        let access_token = fresh.access_token.clone();
        *cached = Some(fresh);
        Ok(access_token)
    }

    async fn request_token(&self) -> Result<CachedToken> {
        let url = format!("{}{TOKEN_PATH}", self.url);
        log::debug!("[iam] POST {url}");

        let mut form = vec![
            ("grant_type", GRANT_TYPE_APIKEY),
            ("apikey", self.apikey.as_str()),
            ("response_type", "cloud_iam"),
        ];
        if let Some(scope) = &self.scope {
            form.push(("scope", scope.as_str()));
        }

        let mut request = self
            .client
            .post(&url)
            .header(ACCEPT, "application/json")
            .form(&form);
        if let (Some(id), Some(secret)) = (&self.client_id, &self.client_secret) {
            request = request.basic_auth(id, Some(secret));
        }

        let response = request
            .send()
            .await
            .map_err(|e| SdkError::Authentication(format!("IAM token request failed: {e}")))?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| {
            SdkError::Authentication(format!("failed to read IAM token response: {e}"))
        })?;
        log::debug!("[iam] Response Status: {status}");

        if !(200..300).contains(&status) {
            log::error!("[iam] Token request rejected: {}", truncate_for_log(&body));
            return Err(SdkError::Authentication(format!(
                "IAM token request returned {status}: {}",
                extract_error_message(status, &body)
            )));
        }

        let parsed: TokenResponse = serde_json::from_str(&body).map_err(|e| {
            SdkError::Authentication(format!("failed to parse IAM token response: {e}"))
        })?;
        Ok(CachedToken::from_response(parsed))
    }
}

impl fmt::Debug for IamAuthenticator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IamAuthenticator")
            .field("url", &self.url)
            .field("apikey", &"[REDACTED]")
            .field("client_id", &self.client_id)
            .field("scope", &self.scope)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl Authenticator for IamAuthenticator {
    fn authentication_type(&self) -> &'static str {
        AUTHTYPE_IAM
    }

    async fn authenticate(&self, headers: &mut HeaderMap) -> Result<()> {
        let token = self.token().await?;
        headers.insert(AUTHORIZATION, header_value(&format!("Bearer {token}"))?);
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        check_credential("apikey", &self.apikey)?;
        if self.client_id.is_some() != self.client_secret.is_some() {
            return Err(SdkError::Configuration(
                "client_id and client_secret must be set together".to_string(),
            ));
        }
        url::Url::parse(&self.url)
            .map_err(|e| SdkError::Configuration(format!("invalid IAM URL '{}': {e}", self.url)))?;
        Ok(())
    }
}

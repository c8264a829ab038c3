//! Base service: the transport shared by every resource client.
//!
//! Each resource client owns a [`BaseService`] and turns its typed operations
//! into [`ApiRequest`]s. The base service then:
//! - authenticates the request and merges default headers
//! - sends it, mapping transport failures to [`SdkError::Request`]
//! - maps non-2xx responses to [`SdkError::Http`]
//! - decodes 2xx bodies into a [`DetailedResponse`]
//! - retries transient failures when a [`RetryPolicy`] is enabled
//! - bounds the whole exchange by the caller's [`RequestContext`]

use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde::de::DeserializeOwned;

use crate::auth::Authenticator;
use crate::config::ServiceConfig;
use crate::context::RequestContext;
use crate::error::{Result, SdkError};
use crate::request::ApiRequest;
use crate::response::{DetailedResponse, RawResponse, extract_error_message};
use crate::retry::RetryPolicy;
use crate::utils::log_sanitizer::{header_for_log, truncate_for_log};

/// Connect timeout for service requests (seconds).
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
/// Overall timeout for a single attempt (seconds).
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Create an HTTP client with the default timeouts.
fn create_http_client(disable_ssl: bool) -> Result<Client> {
    Client::builder()
        .connect_timeout(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS))
        .timeout(Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS))
        .danger_accept_invalid_certs(disable_ssl)
        .build()
        .map_err(|e| SdkError::Configuration(format!("failed to create HTTP client: {e}")))
}

/// Check a service URL; the empty string is accepted and means "unset".
pub fn validate_service_url(url: &str) -> Result<()> {
    if url.is_empty() {
        return Ok(());
    }
    url::Url::parse(url)
        .map(|_| ())
        .map_err(|e| SdkError::Configuration(format!("invalid service URL '{url}': {e}")))
}

/// Resolve a region name against a static region table.
pub fn lookup_region_url(table: &[(&str, &str)], region: &str) -> Result<String> {
    table
        .iter()
        .find(|(name, _)| *name == region)
        .map(|(_, url)| (*url).to_string())
        .ok_or_else(|| SdkError::Configuration(format!("service URL for region '{region}' not found")))
}

/// Construction parameters for a [`BaseService`].
#[derive(Debug, Clone)]
pub struct ServiceOptions {
    pub url: String,
    pub authenticator: Arc<dyn Authenticator>,
    pub disable_ssl: bool,
}

/// Transport shared by the operations of one resource client.
#[derive(Debug)]
pub struct BaseService {
    service_url: String,
    authenticator: Arc<dyn Authenticator>,
    default_headers: HeaderMap,
    disable_ssl: bool,
    retry: Option<RetryPolicy>,
    client: Client,
}

impl BaseService {
    pub fn new(options: ServiceOptions) -> Result<Self> {
        options.authenticator.validate()?;
        validate_service_url(&options.url)?;

        Ok(Self {
            service_url: options.url,
            authenticator: options.authenticator,
            default_headers: HeaderMap::new(),
            disable_ssl: options.disable_ssl,
            retry: None,
            client: create_http_client(options.disable_ssl)?,
        })
    }

    pub fn service_url(&self) -> &str {
        &self.service_url
    }

    /// Replace the service URL. An empty URL is accepted; requests then fail
    /// with the "service URL missing" error.
    pub fn set_service_url(&mut self, url: &str) -> Result<()> {
        validate_service_url(url)?;
        self.service_url = url.to_string();
        Ok(())
    }

    /// Headers sent with every request; per-call headers override them.
    pub fn set_default_headers(&mut self, headers: HeaderMap) {
        self.default_headers = headers;
    }

    pub fn default_headers(&self) -> &HeaderMap {
        &self.default_headers
    }

    pub fn authenticator(&self) -> &Arc<dyn Authenticator> {
        &self.authenticator
    }

    /// Toggle TLS verification; rebuilds the HTTP client.
    pub fn set_disable_ssl(&mut self, disable_ssl: bool) -> Result<()> {
        self.client = create_http_client(disable_ssl)?;
        self.disable_ssl = disable_ssl;
        Ok(())
    }

    pub fn is_ssl_disabled(&self) -> bool {
        self.disable_ssl
    }

    /// Retry transient failures; zero values select the defaults.
    pub fn enable_retries(&mut self, max_retries: u32, max_interval: Duration) {
        self.retry = Some(RetryPolicy::new(max_retries, max_interval));
    }

    pub fn disable_retries(&mut self) {
        self.retry = None;
    }

    pub fn retry_policy(&self) -> Option<RetryPolicy> {
        self.retry
    }

    /// Apply URL, TLS and retry settings from an external configuration.
    pub fn configure(&mut self, config: &ServiceConfig) -> Result<()> {
        if let Some(url) = &config.url {
            self.set_service_url(url)?;
        }
        if config.disable_ssl {
            self.set_disable_ssl(true)?;
        }
        if config.enable_retries {
            self.enable_retries(
                config.max_retries.unwrap_or_default(),
                config.retry_interval.unwrap_or_default(),
            );
        }
        Ok(())
    }

    /// An independent copy that shares the authenticator but owns a fresh
    /// HTTP client (and connection pool).
    pub fn clone_service(&self) -> Result<Self> {
        Ok(Self {
            service_url: self.service_url.clone(),
            authenticator: Arc::clone(&self.authenticator),
            default_headers: self.default_headers.clone(),
            disable_ssl: self.disable_ssl,
            retry: self.retry,
            client: create_http_client(self.disable_ssl)?,
        })
    }

    /// Send `request` and decode the body as `T`.
    pub async fn request<T: DeserializeOwned>(
        &self,
        ctx: &RequestContext,
        request: ApiRequest,
    ) -> Result<DetailedResponse<T>> {
        let raw = ctx.run(self.execute_with_retry(&request)).await?;
        DetailedResponse::from_raw(raw)
    }

    async fn execute_with_retry(&self, request: &ApiRequest) -> Result<RawResponse> {
        let Some(policy) = self.retry else {
            return self.execute(request).await;
        };

        let mut attempt = 0;
        loop {
            match self.execute(request).await {
                Ok(resp) => return Ok(resp),
                Err(e) if attempt < policy.max_retries && e.is_retryable() => {
                    let delay = policy.delay_for(&e, attempt);
                    log::warn!(
                        "Request failed (attempt {}/{}), retrying in {:.1}s: {}",
                        attempt + 1,
                        policy.max_retries,
                        delay.as_secs_f32(),
                        e
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// One attempt: build, authenticate, send, read.
    async fn execute(&self, request: &ApiRequest) -> Result<RawResponse> {
        let url = request.url(&self.service_url)?;

        let mut headers = self.default_headers.clone();
        for (name, value) in &request.headers {
            let name = HeaderName::from_bytes(name.as_bytes()).map_err(|e| {
                SdkError::validation(name, format!("is not a valid header name: {e}"))
            })?;
            let value = HeaderValue::from_str(value).map_err(|e| {
                SdkError::validation(name.as_str(), format!("has an invalid header value: {e}"))
            })?;
            headers.insert(name, value);
        }
        self.authenticator.authenticate(&mut headers).await?;

        log::debug!("{} {url}", request.method);
        for (name, value) in &headers {
            if let Ok(v) = value.to_str() {
                log::trace!("  {name}: {}", header_for_log(name.as_str(), v));
            }
        }

        let mut builder = self
            .client
            .request(request.method.clone(), url)
            .headers(headers);
        if let Some(body) = &request.body {
            log::debug!(
                "Request Body: {}",
                truncate_for_log(&String::from_utf8_lossy(body))
            );
            builder = builder.body(body.clone());
        }

        let response = builder.send().await.map_err(|e| {
            if e.is_timeout() {
                SdkError::Request(format!("request timed out: {e}"))
            } else {
                SdkError::Request(e.to_string())
            }
        })?;

        let status_code = response.status().as_u16();
        let response_headers = response.headers().clone();
        log::debug!("Response Status: {status_code}");

        let body = response
            .text()
            .await
            .map_err(|e| SdkError::Request(format!("Failed to read response body: {e}")))?;
        log::debug!("Response Body: {}", truncate_for_log(&body));

        let raw = RawResponse {
            status_code,
            headers: response_headers,
            body,
        };

        if (200..300).contains(&status_code) {
            return Ok(raw);
        }

        if status_code == 429 {
            log::warn!("Rate limited (HTTP 429)");
        } else if status_code >= 500 {
            log::warn!("Server error (HTTP {status_code})");
        }
        Err(SdkError::Http {
            status_code,
            message: extract_error_message(status_code, &raw.body),
            response: Box::new(raw),
        })
    }
}

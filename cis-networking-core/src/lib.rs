//! # cis-networking-core
//!
//! Shared plumbing for the IBM Cloud Internet Services resource clients in
//! `cis-networking`. Nothing here knows about DNS records or zones; it only
//! knows how to authenticate, send, retry, time out and decode a request.
//!
//! ## Building blocks
//!
//! | Type | Role |
//! |------|------|
//! | [`Authenticator`] | adds credentials to a request (`noauth`, `basic`, `bearertoken`, `iam`) |
//! | [`ServiceConfig`] | settings read once from `<SERVICE>_*` environment variables |
//! | [`ApiRequest`] | method + bound path + query + headers + JSON body |
//! | [`BaseService`] | transport, default headers, retry policy |
//! | [`RequestContext`] | deadline and cancellation for one call |
//! | [`DetailedResponse`] | status, headers and decoded body |
//! | [`SdkError`] | error taxonomy shared by every operation |
//!
//! ## Feature Flags
//!
//! - **`native-tls`** *(default)*: use the platform's native TLS implementation.
//! - **`rustls`**: use rustls.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use cis_networking_core::{
//!     ApiRequest, BaseService, IamAuthenticator, Method, RequestContext, ServiceOptions,
//! };
//!
//! # async fn example() -> cis_networking_core::Result<()> {
//! let service = BaseService::new(ServiceOptions {
//!     url: "https://api.cis.cloud.ibm.com".to_string(),
//!     authenticator: Arc::new(IamAuthenticator::new("my-api-key")?),
//!     disable_ssl: false,
//! })?;
//!
//! let request = ApiRequest::new(Method::GET, "/v1/{crn}/zones", &[("crn", "crn:v1:…")])?;
//! let response = service
//!     .request::<serde_json::Value>(&RequestContext::background(), request)
//!     .await?;
//! println!("{}", response.status_code);
//! # Ok(())
//! # }
//! ```

mod auth;
mod config;
mod context;
mod error;
mod request;
mod response;
mod retry;
mod service;
mod utils;

pub use auth::{
    AUTHTYPE_BASIC, AUTHTYPE_BEARER_TOKEN, AUTHTYPE_IAM, AUTHTYPE_NOAUTH, Authenticator,
    BasicAuthenticator, BearerTokenAuthenticator, DEFAULT_IAM_URL, IamAuthenticator,
    IamAuthenticatorBuilder, NoAuthAuthenticator,
};
pub use config::{ServiceConfig, env_prefix};
pub use context::RequestContext;
pub use error::{ERRORMSG_SERVICE_URL_MISSING, Result, SdkError};
pub use request::{ApiRequest, encode_path_segment};
pub use response::{DetailedResponse, RawResponse};
pub use retry::{DEFAULT_MAX_INTERVAL, DEFAULT_MAX_RETRIES, RetryPolicy};
pub use service::{BaseService, ServiceOptions, lookup_region_url, validate_service_url};

pub use utils::datetime;

// Re-exported so resource clients and callers use the same versions.
pub use reqwest::Method;
pub use reqwest::header::HeaderMap;
pub use tokio_util::sync::CancellationToken;

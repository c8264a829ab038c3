//! Helpers shared by every resource family.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use cis_networking_core::{
    ApiRequest, Authenticator, BaseService, Result, SdkError, ServiceConfig, ServiceOptions,
};

/// Crate version, reported in the `User-Agent` header.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default endpoint of the CIS families.
pub const CIS_DEFAULT_SERVICE_URL: &str = "https://api.cis.cloud.ibm.com";

/// Region table of the CIS families.
pub const CIS_REGION_URLS: &[(&str, &str)] = &[
    ("global", "https://api.cis.cloud.ibm.com"),
    ("private", "https://api.private.cis.cloud.ibm.com"),
];

/// Sort direction of list operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether list filters must all match or any may match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    Any,
    All,
}

impl MatchMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Any => "any",
            Self::All => "all",
        }
    }
}

impl fmt::Display for MatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `User-Agent` value sent with every request.
pub fn user_agent() -> String {
    format!(
        "cis-networking-rust-sdk/{SDK_VERSION} ({}; {})",
        std::env::consts::OS,
        std::env::consts::ARCH
    )
}

/// Tag a request with the SDK analytics headers for one operation.
pub(crate) fn with_sdk_headers(
    request: ApiRequest,
    service_name: &str,
    operation_id: &str,
) -> ApiRequest {
    request.header("User-Agent", user_agent()).header(
        "X-IBMCloud-SDK-Analytics",
        format!("service_name={service_name};service_version=V1;operation_id={operation_id}"),
    )
}

/// Borrow a required options field, failing when it is unset.
pub(crate) fn required<'a>(value: Option<&'a String>, field: &str) -> Result<&'a str> {
    value
        .map(String::as_str)
        .ok_or_else(|| SdkError::missing_field(field))
}

/// Take a required scoping parameter, failing when it is unset or empty.
pub(crate) fn require_scope(value: Option<String>, field: &str) -> Result<String> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        Some(_) => Err(SdkError::Configuration(format!("{field} must not be empty"))),
        None => Err(SdkError::Configuration(format!("{field} is required"))),
    }
}

/// Build the base service of a resource client.
pub(crate) fn build_base_service(
    url: Option<String>,
    default_url: &str,
    authenticator: Option<Arc<dyn Authenticator>>,
) -> Result<BaseService> {
    let authenticator = authenticator
        .ok_or_else(|| SdkError::Configuration("an authenticator is required".to_string()))?;
    BaseService::new(ServiceOptions {
        url: url.unwrap_or_else(|| default_url.to_string()),
        authenticator,
        disable_ssl: false,
    })
}

/// Fill in the authenticator from the external configuration when the caller
/// did not supply one.
pub(crate) fn external_authenticator(
    authenticator: Option<Arc<dyn Authenticator>>,
    config: &ServiceConfig,
) -> Result<Arc<dyn Authenticator>> {
    match authenticator {
        Some(a) => Ok(a),
        None => {
            log::debug!("No authenticator supplied, building one from configuration");
            config.authenticator()
        }
    }
}

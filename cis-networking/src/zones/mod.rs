//! Zones of a CIS instance.

mod operations;
mod options;
mod types;

use std::sync::Arc;

use cis_networking_core::{
    Authenticator, BaseService, Result, ServiceConfig, lookup_region_url,
};

use crate::common::{
    CIS_DEFAULT_SERVICE_URL, CIS_REGION_URLS, build_base_service, external_authenticator,
    require_scope,
};
use crate::traits::ServiceClient;

pub use options::{
    CreateZoneOptions, DeleteZoneOptions, GetZoneOptions, ListZonesOptions, UpdateZoneOptions,
    ZoneActivationCheckOptions,
};
pub use types::{DeleteZoneResp, ListZonesResp, ZoneActivationcheckResp, ZoneDetails, ZoneResp};

/// Service name, also the environment variable prefix (`ZONES_*`).
pub const DEFAULT_SERVICE_NAME: &str = "zones";

pub const DEFAULT_SERVICE_URL: &str = CIS_DEFAULT_SERVICE_URL;

#[derive(Debug, Clone, Default)]
pub struct ZonesV1Options {
    pub url: Option<String>,
    pub authenticator: Option<Arc<dyn Authenticator>>,
    pub crn: Option<String>,
}

/// Zones client.
#[derive(Debug)]
pub struct ZonesV1 {
    pub(crate) service: BaseService,
    pub(crate) crn: String,
}

impl ZonesV1 {
    pub fn new(options: ZonesV1Options) -> Result<Self> {
        let crn = require_scope(options.crn, "crn")?;
        let service = build_base_service(options.url, DEFAULT_SERVICE_URL, options.authenticator)?;
        Ok(Self { service, crn })
    }

    pub fn new_using_external_config(options: ZonesV1Options) -> Result<Self> {
        Self::from_config(options, &ServiceConfig::from_env(DEFAULT_SERVICE_NAME))
    }

    pub fn from_config(mut options: ZonesV1Options, config: &ServiceConfig) -> Result<Self> {
        options.authenticator = Some(external_authenticator(options.authenticator, config)?);
        let mut client = Self::new(options)?;
        client.service.configure(config)?;
        Ok(client)
    }

    pub fn service_url_for_region(region: &str) -> Result<String> {
        lookup_region_url(CIS_REGION_URLS, region)
    }

    pub fn clone_service(&self) -> Result<Self> {
        Ok(Self {
            service: self.service.clone_service()?,
            crn: self.crn.clone(),
        })
    }

    pub fn crn(&self) -> &str {
        &self.crn
    }

    pub fn set_crn(&mut self, crn: impl Into<String>) -> Result<()> {
        self.crn = require_scope(Some(crn.into()), "crn")?;
        Ok(())
    }
}

impl ServiceClient for ZonesV1 {
    fn base_service(&self) -> &BaseService {
        &self.service
    }

    fn base_service_mut(&mut self) -> &mut BaseService {
        &mut self.service
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use cis_networking_core::SdkError;

    #[test]
    fn unsupported_configured_auth_fails() {
        let config = ServiceConfig::from_vars("zones", [("ZONES_AUTH_TYPE", "kerberos")]);
        let result = ZonesV1::from_config(
            ZonesV1Options {
                crn: Some("crn:v1:test".to_string()),
                ..Default::default()
            },
            &config,
        );
        assert!(matches!(result, Err(SdkError::Configuration(_))));
    }

    #[test]
    fn configured_retries_are_applied() {
        let config = ServiceConfig::from_vars(
            "zones",
            [
                ("ZONES_AUTH_TYPE", "noauth"),
                ("ZONES_ENABLE_RETRIES", "true"),
                ("ZONES_MAX_RETRIES", "2"),
                ("ZONES_RETRY_INTERVAL", "5"),
            ],
        );
        let client = ZonesV1::from_config(
            ZonesV1Options {
                crn: Some("crn:v1:test".to_string()),
                ..Default::default()
            },
            &config,
        )
        .unwrap();
        let policy = client.base_service().retry_policy().unwrap();
        assert_eq!(policy.max_retries, 2);
        assert_eq!(policy.max_interval, std::time::Duration::from_secs(5));
    }
}

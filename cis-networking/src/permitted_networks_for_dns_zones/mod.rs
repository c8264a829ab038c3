//! VPCs permitted to resolve a DNS Services private zone.
//!
//! This family talks to the DNS Services API rather than CIS: it has its own
//! endpoint, no construction-time scoping, and plain (non-enveloped)
//! response bodies. Deleting a permitted network answers `202 Accepted` with
//! the network in `REMOVAL_IN_PROGRESS`.

mod operations;
mod options;
mod types;

use std::sync::Arc;

use cis_networking_core::{
    Authenticator, BaseService, Result, ServiceConfig, lookup_region_url,
};

use crate::common::{build_base_service, external_authenticator};
use crate::traits::ServiceClient;

pub use options::{
    CreatePermittedNetworkOptions, DeletePermittedNetworkOptions, GetPermittedNetworkOptions,
    ListPermittedNetworksOptions,
};
pub use types::{
    ListPermittedNetworks, PageLink, PermittedNetwork, PermittedNetworkState,
    PermittedNetworkType, PermittedNetworkVpc,
};

/// Service name, also the environment variable prefix
/// (`PERMITTED_NETWORKS_FOR_DNS_ZONES_*`).
pub const DEFAULT_SERVICE_NAME: &str = "permitted_networks_for_dns_zones";

pub const DEFAULT_SERVICE_URL: &str = "https://api.dns-svcs.cloud.ibm.com/v1";

/// Region table of the DNS Services API.
pub const DNS_SVCS_REGION_URLS: &[(&str, &str)] = &[
    ("global", "https://api.dns-svcs.cloud.ibm.com/v1"),
    ("private", "https://api.private.dns-svcs.cloud.ibm.com/v1"),
];

/// Construction parameters for [`PermittedNetworksForDnsZonesV1`].
#[derive(Debug, Clone, Default)]
pub struct PermittedNetworksForDnsZonesV1Options {
    pub url: Option<String>,
    pub authenticator: Option<Arc<dyn Authenticator>>,
}

/// Permitted networks client.
#[derive(Debug)]
pub struct PermittedNetworksForDnsZonesV1 {
    pub(crate) service: BaseService,
}

impl PermittedNetworksForDnsZonesV1 {
    pub fn new(options: PermittedNetworksForDnsZonesV1Options) -> Result<Self> {
        let service = build_base_service(options.url, DEFAULT_SERVICE_URL, options.authenticator)?;
        Ok(Self { service })
    }

    pub fn new_using_external_config(
        options: PermittedNetworksForDnsZonesV1Options,
    ) -> Result<Self> {
        Self::from_config(options, &ServiceConfig::from_env(DEFAULT_SERVICE_NAME))
    }

    pub fn from_config(
        mut options: PermittedNetworksForDnsZonesV1Options,
        config: &ServiceConfig,
    ) -> Result<Self> {
        options.authenticator = Some(external_authenticator(options.authenticator, config)?);
        let mut client = Self::new(options)?;
        client.service.configure(config)?;
        Ok(client)
    }

    pub fn service_url_for_region(region: &str) -> Result<String> {
        lookup_region_url(DNS_SVCS_REGION_URLS, region)
    }

    pub fn clone_service(&self) -> Result<Self> {
        Ok(Self {
            service: self.service.clone_service()?,
        })
    }
}

impl ServiceClient for PermittedNetworksForDnsZonesV1 {
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
    use cis_networking_core::NoAuthAuthenticator;

    #[test]
    fn defaults_to_dns_services_endpoint() {
        let client = PermittedNetworksForDnsZonesV1::new(PermittedNetworksForDnsZonesV1Options {
            authenticator: Some(Arc::new(NoAuthAuthenticator::new())),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(client.service_url(), DEFAULT_SERVICE_URL);
    }

    #[test]
    fn region_table_is_dns_services() {
        assert_eq!(
            PermittedNetworksForDnsZonesV1::service_url_for_region("private").unwrap(),
            "https://api.private.dns-svcs.cloud.ibm.com/v1"
        );
        assert!(PermittedNetworksForDnsZonesV1::service_url_for_region("us-south").is_err());
    }
}

//! Health monitors attached to global load balancer pools.

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
    CreateLoadBalancerMonitorOptions, DeleteLoadBalancerMonitorOptions,
    EditLoadBalancerMonitorOptions, GetLoadBalancerMonitorOptions,
    ListAllLoadBalancerMonitorsOptions,
};
pub use types::{DeleteMonitorResp, ListMonitorResp, MonitorPack, MonitorResp, MonitorType};

/// Service name, also the environment variable prefix
/// (`GLOBAL_LOAD_BALANCER_MONITOR_*`).
pub const DEFAULT_SERVICE_NAME: &str = "global_load_balancer_monitor";

pub const DEFAULT_SERVICE_URL: &str = CIS_DEFAULT_SERVICE_URL;

/// Construction parameters for [`GlobalLoadBalancerMonitorV1`].
#[derive(Debug, Clone, Default)]
pub struct GlobalLoadBalancerMonitorV1Options {
    pub url: Option<String>,
    pub authenticator: Option<Arc<dyn Authenticator>>,
    /// Full CRN of the CIS instance.
    pub crn: Option<String>,
}

/// Load balancer monitor client.
#[derive(Debug)]
pub struct GlobalLoadBalancerMonitorV1 {
    pub(crate) service: BaseService,
    pub(crate) crn: String,
}

impl GlobalLoadBalancerMonitorV1 {
    pub fn new(options: GlobalLoadBalancerMonitorV1Options) -> Result<Self> {
        let crn = require_scope(options.crn, "crn")?;
        let service = build_base_service(options.url, DEFAULT_SERVICE_URL, options.authenticator)?;
        Ok(Self { service, crn })
    }

    pub fn new_using_external_config(options: GlobalLoadBalancerMonitorV1Options) -> Result<Self> {
        Self::from_config(options, &ServiceConfig::from_env(DEFAULT_SERVICE_NAME))
    }

    pub fn from_config(
        mut options: GlobalLoadBalancerMonitorV1Options,
        config: &ServiceConfig,
    ) -> Result<Self> {
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

impl ServiceClient for GlobalLoadBalancerMonitorV1 {
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
    fn requires_crn() {
        let options = GlobalLoadBalancerMonitorV1Options {
            authenticator: Some(Arc::new(NoAuthAuthenticator::new())),
            ..Default::default()
        };
        assert!(GlobalLoadBalancerMonitorV1::new(options).is_err());
    }

    #[test]
    fn explicit_url_wins_over_default() {
        let client = GlobalLoadBalancerMonitorV1::new(GlobalLoadBalancerMonitorV1Options {
            url: Some("https://api.private.cis.cloud.ibm.com".to_string()),
            authenticator: Some(Arc::new(NoAuthAuthenticator::new())),
            crn: Some("crn:v1:test".to_string()),
        })
        .unwrap();
        assert_eq!(client.service_url(), "https://api.private.cis.cloud.ibm.com");
        assert_eq!(client.crn(), "crn:v1:test");
    }
}

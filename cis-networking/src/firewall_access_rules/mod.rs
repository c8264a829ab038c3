//! Account-level firewall access rules (IP, IP range, ASN, country).

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
    AccessRuleOrder, CreateAccountAccessRuleOptions, DeleteAccountAccessRuleOptions,
    GetAccountAccessRuleOptions, ListAllAccountAccessRulesOptions,
    UpdateAccountAccessRuleOptions,
};
pub use types::{
    AccessRuleMode, AccessRuleTarget, AccountAccessRuleInputConfiguration,
    AccountAccessRuleObject, AccountAccessRuleObjectConfiguration, AccountAccessRuleObjectScope,
    AccountAccessRuleResp, DeleteAccountAccessRuleResp, ListAccountAccessRulesResp,
};

/// Service name, also the environment variable prefix
/// (`FIREWALL_ACCESS_RULES_*`).
pub const DEFAULT_SERVICE_NAME: &str = "firewall_access_rules";

pub const DEFAULT_SERVICE_URL: &str = CIS_DEFAULT_SERVICE_URL;

#[derive(Debug, Clone, Default)]
pub struct FirewallAccessRulesV1Options {
    pub url: Option<String>,
    pub authenticator: Option<Arc<dyn Authenticator>>,
    pub crn: Option<String>,
}

/// Account access rules client.
#[derive(Debug)]
pub struct FirewallAccessRulesV1 {
    pub(crate) service: BaseService,
    pub(crate) crn: String,
}

impl FirewallAccessRulesV1 {
    pub fn new(options: FirewallAccessRulesV1Options) -> Result<Self> {
        let crn = require_scope(options.crn, "crn")?;
        let service = build_base_service(options.url, DEFAULT_SERVICE_URL, options.authenticator)?;
        Ok(Self { service, crn })
    }

    pub fn new_using_external_config(options: FirewallAccessRulesV1Options) -> Result<Self> {
        Self::from_config(options, &ServiceConfig::from_env(DEFAULT_SERVICE_NAME))
    }

    pub fn from_config(
        mut options: FirewallAccessRulesV1Options,
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

impl ServiceClient for FirewallAccessRulesV1 {
    fn base_service(&self) -> &BaseService {
        &self.service
    }

    fn base_service_mut(&mut self) -> &mut BaseService {
        &mut self.service
    }
}

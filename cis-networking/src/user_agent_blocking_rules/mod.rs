//! User-agent blocking rules of one CIS zone.

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
    CreateZoneUserAgentRuleOptions, DeleteZoneUserAgentRuleOptions, GetUserAgentRuleOptions,
    ListAllZoneUserAgentRulesOptions, UpdateUserAgentRuleOptions,
};
pub use types::{
    DeleteUseragentRuleResp, ListUseragentRulesResp, UseragentRuleConfiguration,
    UseragentRuleMode, UseragentRuleObject, UseragentRuleResp,
};

/// Service name, also the environment variable prefix
/// (`USER_AGENT_BLOCKING_RULES_*`).
pub const DEFAULT_SERVICE_NAME: &str = "user_agent_blocking_rules";

pub const DEFAULT_SERVICE_URL: &str = CIS_DEFAULT_SERVICE_URL;

/// Construction parameters for [`UserAgentBlockingRulesV1`].
#[derive(Debug, Clone, Default)]
pub struct UserAgentBlockingRulesV1Options {
    pub url: Option<String>,
    pub authenticator: Option<Arc<dyn Authenticator>>,
    pub crn: Option<String>,
    pub zone_identifier: Option<String>,
}

/// User-agent blocking rules client.
#[derive(Debug)]
pub struct UserAgentBlockingRulesV1 {
    pub(crate) service: BaseService,
    pub(crate) crn: String,
    pub(crate) zone_identifier: String,
}

impl UserAgentBlockingRulesV1 {
    pub fn new(options: UserAgentBlockingRulesV1Options) -> Result<Self> {
        let crn = require_scope(options.crn, "crn")?;
        let zone_identifier = require_scope(options.zone_identifier, "zone_identifier")?;
        let service = build_base_service(options.url, DEFAULT_SERVICE_URL, options.authenticator)?;
        Ok(Self {
            service,
            crn,
            zone_identifier,
        })
    }

    pub fn new_using_external_config(options: UserAgentBlockingRulesV1Options) -> Result<Self> {
        Self::from_config(options, &ServiceConfig::from_env(DEFAULT_SERVICE_NAME))
    }

    pub fn from_config(
        mut options: UserAgentBlockingRulesV1Options,
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
            zone_identifier: self.zone_identifier.clone(),
        })
    }

    pub fn crn(&self) -> &str {
        &self.crn
    }

    pub fn set_crn(&mut self, crn: impl Into<String>) -> Result<()> {
        self.crn = require_scope(Some(crn.into()), "crn")?;
        Ok(())
    }

    pub fn zone_identifier(&self) -> &str {
        &self.zone_identifier
    }

    pub fn set_zone_identifier(&mut self, zone_identifier: impl Into<String>) -> Result<()> {
        self.zone_identifier = require_scope(Some(zone_identifier.into()), "zone_identifier")?;
        Ok(())
    }
}

impl ServiceClient for UserAgentBlockingRulesV1 {
    fn base_service(&self) -> &BaseService {
        &self.service
    }

    fn base_service_mut(&mut self) -> &mut BaseService {
        &mut self.service
    }
}

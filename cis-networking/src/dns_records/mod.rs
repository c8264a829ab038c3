//! DNS records of one CIS zone.
//!
//! The client is scoped to an instance CRN and a zone identifier at
//! construction; record identifiers are given per operation.

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
    CreateDnsRecordOptions, DeleteDnsRecordOptions, DnsRecordOrder, GetDnsRecordOptions,
    ListAllDnsRecordsOptions, UpdateDnsRecordOptions,
};
pub use types::{
    DeleteDnsrecordResp, DnsRecordType, DnsrecordObject, DnsrecordResp, ListDnsrecordsResp,
};

/// Service name, also the environment variable prefix (`DNS_RECORDS_*`).
pub const DEFAULT_SERVICE_NAME: &str = "dns_records";

/// Default endpoint.
pub const DEFAULT_SERVICE_URL: &str = CIS_DEFAULT_SERVICE_URL;

/// Construction parameters for [`DnsRecordsV1`].
#[derive(Debug, Clone, Default)]
pub struct DnsRecordsV1Options {
    /// Endpoint; [`DEFAULT_SERVICE_URL`] when unset.
    pub url: Option<String>,
    pub authenticator: Option<Arc<dyn Authenticator>>,
    /// Full CRN of the CIS instance.
    pub crn: Option<String>,
    /// Zone the records belong to.
    pub zone_identifier: Option<String>,
}

/// DNS records client.
#[derive(Debug)]
pub struct DnsRecordsV1 {
    pub(crate) service: BaseService,
    pub(crate) crn: String,
    pub(crate) zone_identifier: String,
}

impl DnsRecordsV1 {
    pub fn new(options: DnsRecordsV1Options) -> Result<Self> {
        let crn = require_scope(options.crn, "crn")?;
        let zone_identifier = require_scope(options.zone_identifier, "zone_identifier")?;
        let service = build_base_service(options.url, DEFAULT_SERVICE_URL, options.authenticator)?;
        Ok(Self {
            service,
            crn,
            zone_identifier,
        })
    }

    /// Construct from `DNS_RECORDS_*` environment variables.
    pub fn new_using_external_config(options: DnsRecordsV1Options) -> Result<Self> {
        Self::from_config(options, &ServiceConfig::from_env(DEFAULT_SERVICE_NAME))
    }

    /// Construct from an explicit configuration. An authenticator in
    /// `options` takes precedence over the configured one.
    pub fn from_config(mut options: DnsRecordsV1Options, config: &ServiceConfig) -> Result<Self> {
        options.authenticator = Some(external_authenticator(options.authenticator, config)?);
        let mut client = Self::new(options)?;
        client.service.configure(config)?;
        Ok(client)
    }

    /// Endpoint for a region (`global`, `private`).
    pub fn service_url_for_region(region: &str) -> Result<String> {
        lookup_region_url(CIS_REGION_URLS, region)
    }

    /// Independent copy with its own connection pool.
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

impl ServiceClient for DnsRecordsV1 {
    fn base_service(&self) -> &BaseService {
        &self.service
    }

    fn base_service_mut(&mut self) -> &mut BaseService {
        &mut self.service
    }
}

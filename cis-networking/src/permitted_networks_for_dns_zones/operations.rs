use cis_networking_core::{ApiRequest, DetailedResponse, Method, RequestContext, Result};

use super::options::{
    CreatePermittedNetworkOptions, DeletePermittedNetworkOptions, GetPermittedNetworkOptions,
    ListPermittedNetworksOptions,
};
use super::types::{ListPermittedNetworks, PermittedNetwork};
use super::{DEFAULT_SERVICE_NAME, PermittedNetworksForDnsZonesV1};
use crate::common::{required, with_sdk_headers};

const NETWORKS_PATH: &str = "/instances/{instance_id}/dnszones/{dnszone_id}/permitted_networks";
const NETWORK_PATH: &str =
    "/instances/{instance_id}/dnszones/{dnszone_id}/permitted_networks/{permitted_network_id}";

/// Path parameters shared by every operation of this family.
struct ZoneScope<'a> {
    instance_id: &'a str,
    dnszone_id: &'a str,
}

impl<'a> ZoneScope<'a> {
    fn from_options(instance_id: Option<&'a String>, dnszone_id: Option<&'a String>) -> Result<Self> {
        Ok(Self {
            instance_id: required(instance_id, "instance_id")?,
            dnszone_id: required(dnszone_id, "dnszone_id")?,
        })
    }
}

impl PermittedNetworksForDnsZonesV1 {
    fn build_request(
        method: Method,
        path: &str,
        scope: &ZoneScope<'_>,
        permitted_network_id: Option<&str>,
        x_correlation_id: Option<&str>,
        operation_id: &str,
    ) -> Result<ApiRequest> {
        let mut params = vec![
            ("instance_id", scope.instance_id),
            ("dnszone_id", scope.dnszone_id),
        ];
        if let Some(id) = permitted_network_id {
            params.push(("permitted_network_id", id));
        }
        let request = ApiRequest::new(method, path, &params)?;
        Ok(with_sdk_headers(request, DEFAULT_SERVICE_NAME, operation_id)
            .optional_header("X-Correlation-ID", x_correlation_id))
    }

    /// List the networks permitted on a zone.
    pub async fn list_permitted_networks(
        &self,
        opts: &ListPermittedNetworksOptions,
    ) -> Result<DetailedResponse<ListPermittedNetworks>> {
        self.list_permitted_networks_with_context(&RequestContext::background(), opts)
            .await
    }

    pub async fn list_permitted_networks_with_context(
        &self,
        ctx: &RequestContext,
        opts: &ListPermittedNetworksOptions,
    ) -> Result<DetailedResponse<ListPermittedNetworks>> {
        let scope = ZoneScope::from_options(opts.instance_id.as_ref(), opts.dnszone_id.as_ref())?;
        let request = Self::build_request(
            Method::GET,
            NETWORKS_PATH,
            &scope,
            None,
            opts.x_correlation_id.as_deref(),
            "list_permitted_networks",
        )?
        .query("offset", opts.offset)
        .query("limit", opts.limit)
        .headers(&opts.headers);
        self.service.request(ctx, request).await
    }

    /// Permit a VPC to resolve the zone.
    pub async fn create_permitted_network(
        &self,
        opts: &CreatePermittedNetworkOptions,
    ) -> Result<DetailedResponse<PermittedNetwork>> {
        self.create_permitted_network_with_context(&RequestContext::background(), opts)
            .await
    }

    pub async fn create_permitted_network_with_context(
        &self,
        ctx: &RequestContext,
        opts: &CreatePermittedNetworkOptions,
    ) -> Result<DetailedResponse<PermittedNetwork>> {
        let scope = ZoneScope::from_options(opts.instance_id.as_ref(), opts.dnszone_id.as_ref())?;
        let request = Self::build_request(
            Method::POST,
            NETWORKS_PATH,
            &scope,
            None,
            opts.x_correlation_id.as_deref(),
            "create_permitted_network",
        )?
        .json_body(opts)?
        .headers(&opts.headers);
        self.service.request(ctx, request).await
    }

    /// Remove a permitted network. The server answers `202 Accepted`; the
    /// returned network is in `REMOVAL_IN_PROGRESS`.
    pub async fn delete_permitted_network(
        &self,
        opts: &DeletePermittedNetworkOptions,
    ) -> Result<DetailedResponse<PermittedNetwork>> {
        self.delete_permitted_network_with_context(&RequestContext::background(), opts)
            .await
    }

    pub async fn delete_permitted_network_with_context(
        &self,
        ctx: &RequestContext,
        opts: &DeletePermittedNetworkOptions,
    ) -> Result<DetailedResponse<PermittedNetwork>> {
        let scope = ZoneScope::from_options(opts.instance_id.as_ref(), opts.dnszone_id.as_ref())?;
        let id = required(opts.permitted_network_id.as_ref(), "permitted_network_id")?;
        let request = Self::build_request(
            Method::DELETE,
            NETWORK_PATH,
            &scope,
            Some(id),
            opts.x_correlation_id.as_deref(),
            "delete_permitted_network",
        )?
        .headers(&opts.headers);
        self.service.request(ctx, request).await
    }

    pub async fn get_permitted_network(
        &self,
        opts: &GetPermittedNetworkOptions,
    ) -> Result<DetailedResponse<PermittedNetwork>> {
        self.get_permitted_network_with_context(&RequestContext::background(), opts)
            .await
    }

    pub async fn get_permitted_network_with_context(
        &self,
        ctx: &RequestContext,
        opts: &GetPermittedNetworkOptions,
    ) -> Result<DetailedResponse<PermittedNetwork>> {
        let scope = ZoneScope::from_options(opts.instance_id.as_ref(), opts.dnszone_id.as_ref())?;
        let id = required(opts.permitted_network_id.as_ref(), "permitted_network_id")?;
        let request = Self::build_request(
            Method::GET,
            NETWORK_PATH,
            &scope,
            Some(id),
            opts.x_correlation_id.as_deref(),
            "get_permitted_network",
        )?
        .headers(&opts.headers);
        self.service.request(ctx, request).await
    }
}

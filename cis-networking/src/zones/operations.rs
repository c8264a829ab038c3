use cis_networking_core::{ApiRequest, DetailedResponse, Method, RequestContext, Result};

use super::options::{
    CreateZoneOptions, DeleteZoneOptions, GetZoneOptions, ListZonesOptions, UpdateZoneOptions,
    ZoneActivationCheckOptions,
};
use super::types::{DeleteZoneResp, ListZonesResp, ZoneActivationcheckResp, ZoneResp};
use super::{DEFAULT_SERVICE_NAME, ZonesV1};
use crate::common::{required, with_sdk_headers};

const ZONES_PATH: &str = "/v1/{crn}/zones";
const ZONE_PATH: &str = "/v1/{crn}/zones/{zone_identifier}";
const ACTIVATION_CHECK_PATH: &str = "/v1/{crn}/zones/{zone_identifier}/activation_check";

impl ZonesV1 {
    fn build_request(
        &self,
        method: Method,
        path: &str,
        zone_identifier: Option<&str>,
        operation_id: &str,
    ) -> Result<ApiRequest> {
        let mut params = vec![("crn", self.crn.as_str())];
        if let Some(id) = zone_identifier {
            params.push(("zone_identifier", id));
        }
        let request = ApiRequest::new(method, path, &params)?;
        Ok(with_sdk_headers(request, DEFAULT_SERVICE_NAME, operation_id))
    }

    pub async fn list_zones(&self, opts: &ListZonesOptions) -> Result<DetailedResponse<ListZonesResp>> {
        self.list_zones_with_context(&RequestContext::background(), opts)
            .await
    }

    pub async fn list_zones_with_context(
        &self,
        ctx: &RequestContext,
        opts: &ListZonesOptions,
    ) -> Result<DetailedResponse<ListZonesResp>> {
        let request = self
            .build_request(Method::GET, ZONES_PATH, None, "list_zones")?
            .query("page", opts.page)
            .query("per_page", opts.per_page)
            .headers(&opts.headers);
        self.service.request(ctx, request).await
    }

    pub async fn create_zone(&self, opts: &CreateZoneOptions) -> Result<DetailedResponse<ZoneResp>> {
        self.create_zone_with_context(&RequestContext::background(), opts)
            .await
    }

    pub async fn create_zone_with_context(
        &self,
        ctx: &RequestContext,
        opts: &CreateZoneOptions,
    ) -> Result<DetailedResponse<ZoneResp>> {
        let request = self
            .build_request(Method::POST, ZONES_PATH, None, "create_zone")?
            .json_body(opts)?
            .headers(&opts.headers);
        self.service.request(ctx, request).await
    }

    pub async fn delete_zone(
        &self,
        opts: &DeleteZoneOptions,
    ) -> Result<DetailedResponse<DeleteZoneResp>> {
        self.delete_zone_with_context(&RequestContext::background(), opts)
            .await
    }

    pub async fn delete_zone_with_context(
        &self,
        ctx: &RequestContext,
        opts: &DeleteZoneOptions,
    ) -> Result<DetailedResponse<DeleteZoneResp>> {
        let id = required(opts.zone_identifier.as_ref(), "zone_identifier")?;
        let request = self
            .build_request(Method::DELETE, ZONE_PATH, Some(id), "delete_zone")?
            .headers(&opts.headers);
        self.service.request(ctx, request).await
    }

    pub async fn get_zone(&self, opts: &GetZoneOptions) -> Result<DetailedResponse<ZoneResp>> {
        self.get_zone_with_context(&RequestContext::background(), opts)
            .await
    }

    pub async fn get_zone_with_context(
        &self,
        ctx: &RequestContext,
        opts: &GetZoneOptions,
    ) -> Result<DetailedResponse<ZoneResp>> {
        let id = required(opts.zone_identifier.as_ref(), "zone_identifier")?;
        let request = self
            .build_request(Method::GET, ZONE_PATH, Some(id), "get_zone")?
            .headers(&opts.headers);
        self.service.request(ctx, request).await
    }

    /// Pause or resume a zone.
    pub async fn update_zone(&self, opts: &UpdateZoneOptions) -> Result<DetailedResponse<ZoneResp>> {
        self.update_zone_with_context(&RequestContext::background(), opts)
            .await
    }

    pub async fn update_zone_with_context(
        &self,
        ctx: &RequestContext,
        opts: &UpdateZoneOptions,
    ) -> Result<DetailedResponse<ZoneResp>> {
        let id = required(opts.zone_identifier.as_ref(), "zone_identifier")?;
        let request = self
            .build_request(Method::PATCH, ZONE_PATH, Some(id), "update_zone")?
            .json_body(opts)?
            .headers(&opts.headers);
        self.service.request(ctx, request).await
    }

    /// Ask CIS to re-check the zone's name server delegation.
    pub async fn zone_activation_check(
        &self,
        opts: &ZoneActivationCheckOptions,
    ) -> Result<DetailedResponse<ZoneActivationcheckResp>> {
        self.zone_activation_check_with_context(&RequestContext::background(), opts)
            .await
    }

    pub async fn zone_activation_check_with_context(
        &self,
        ctx: &RequestContext,
        opts: &ZoneActivationCheckOptions,
    ) -> Result<DetailedResponse<ZoneActivationcheckResp>> {
        let id = required(opts.zone_identifier.as_ref(), "zone_identifier")?;
        let request = self
            .build_request(
                Method::PUT,
                ACTIVATION_CHECK_PATH,
                Some(id),
                "zone_activation_check",
            )?
            .headers(&opts.headers);
        self.service.request(ctx, request).await
    }
}

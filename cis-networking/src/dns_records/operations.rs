use cis_networking_core::{ApiRequest, DetailedResponse, Method, RequestContext, Result};

use super::options::{
    CreateDnsRecordOptions, DeleteDnsRecordOptions, GetDnsRecordOptions,
    ListAllDnsRecordsOptions, UpdateDnsRecordOptions,
};
use super::types::{DeleteDnsrecordResp, DnsrecordResp, ListDnsrecordsResp};
use super::{DEFAULT_SERVICE_NAME, DnsRecordsV1};
use crate::common::{required, with_sdk_headers};

const RECORDS_PATH: &str = "/v1/{crn}/zones/{zone_identifier}/dns_records";
const RECORD_PATH: &str = "/v1/{crn}/zones/{zone_identifier}/dns_records/{dnsrecord_identifier}";

impl DnsRecordsV1 {
    fn build_request(
        &self,
        method: Method,
        path: &str,
        dnsrecord_identifier: Option<&str>,
        operation_id: &str,
    ) -> Result<ApiRequest> {
        let mut params = vec![
            ("crn", self.crn.as_str()),
            ("zone_identifier", self.zone_identifier.as_str()),
        ];
        if let Some(id) = dnsrecord_identifier {
            params.push(("dnsrecord_identifier", id));
        }
        let request = ApiRequest::new(method, path, &params)?;
        Ok(with_sdk_headers(request, DEFAULT_SERVICE_NAME, operation_id))
    }

    /// List the records of the zone.
    pub async fn list_all_dns_records(
        &self,
        opts: &ListAllDnsRecordsOptions,
    ) -> Result<DetailedResponse<ListDnsrecordsResp>> {
        self.list_all_dns_records_with_context(&RequestContext::background(), opts)
            .await
    }

    pub async fn list_all_dns_records_with_context(
        &self,
        ctx: &RequestContext,
        opts: &ListAllDnsRecordsOptions,
    ) -> Result<DetailedResponse<ListDnsrecordsResp>> {
        let request = self
            .build_request(Method::GET, RECORDS_PATH, None, "list_all_dns_records")?
            .query("type", opts.record_type)
            .query("name", opts.name.as_deref())
            .query("content", opts.content.as_deref())
            .query("page", opts.page)
            .query("per_page", opts.per_page)
            .query("order", opts.order)
            .query("direction", opts.direction)
            .query("match", opts.match_mode)
            .headers(&opts.headers);
        self.service.request(ctx, request).await
    }

    /// Create a record.
    pub async fn create_dns_record(
        &self,
        opts: &CreateDnsRecordOptions,
    ) -> Result<DetailedResponse<DnsrecordResp>> {
        self.create_dns_record_with_context(&RequestContext::background(), opts)
            .await
    }

    pub async fn create_dns_record_with_context(
        &self,
        ctx: &RequestContext,
        opts: &CreateDnsRecordOptions,
    ) -> Result<DetailedResponse<DnsrecordResp>> {
        let request = self
            .build_request(Method::POST, RECORDS_PATH, None, "create_dns_record")?
            .json_body(opts)?
            .headers(&opts.headers);
        self.service.request(ctx, request).await
    }

    /// Delete a record.
    pub async fn delete_dns_record(
        &self,
        opts: &DeleteDnsRecordOptions,
    ) -> Result<DetailedResponse<DeleteDnsrecordResp>> {
        self.delete_dns_record_with_context(&RequestContext::background(), opts)
            .await
    }

    pub async fn delete_dns_record_with_context(
        &self,
        ctx: &RequestContext,
        opts: &DeleteDnsRecordOptions,
    ) -> Result<DetailedResponse<DeleteDnsrecordResp>> {
        let id = required(opts.dnsrecord_identifier.as_ref(), "dnsrecord_identifier")?;
        let request = self
            .build_request(Method::DELETE, RECORD_PATH, Some(id), "delete_dns_record")?
            .headers(&opts.headers);
        self.service.request(ctx, request).await
    }

    /// Fetch one record.
    pub async fn get_dns_record(
        &self,
        opts: &GetDnsRecordOptions,
    ) -> Result<DetailedResponse<DnsrecordResp>> {
        self.get_dns_record_with_context(&RequestContext::background(), opts)
            .await
    }

    pub async fn get_dns_record_with_context(
        &self,
        ctx: &RequestContext,
        opts: &GetDnsRecordOptions,
    ) -> Result<DetailedResponse<DnsrecordResp>> {
        let id = required(opts.dnsrecord_identifier.as_ref(), "dnsrecord_identifier")?;
        let request = self
            .build_request(Method::GET, RECORD_PATH, Some(id), "get_dns_record")?
            .headers(&opts.headers);
        self.service.request(ctx, request).await
    }

    /// Replace a record.
    pub async fn update_dns_record(
        &self,
        opts: &UpdateDnsRecordOptions,
    ) -> Result<DetailedResponse<DnsrecordResp>> {
        self.update_dns_record_with_context(&RequestContext::background(), opts)
            .await
    }

    pub async fn update_dns_record_with_context(
        &self,
        ctx: &RequestContext,
        opts: &UpdateDnsRecordOptions,
    ) -> Result<DetailedResponse<DnsrecordResp>> {
        let id = required(opts.dnsrecord_identifier.as_ref(), "dnsrecord_identifier")?;
        let request = self
            .build_request(Method::PUT, RECORD_PATH, Some(id), "update_dns_record")?
            .json_body(opts)?
            .headers(&opts.headers);
        self.service.request(ctx, request).await
    }
}

use cis_networking_core::{ApiRequest, DetailedResponse, Method, RequestContext, Result};

use super::options::{
    CreateLoadBalancerMonitorOptions, DeleteLoadBalancerMonitorOptions,
    EditLoadBalancerMonitorOptions, GetLoadBalancerMonitorOptions,
    ListAllLoadBalancerMonitorsOptions,
};
use super::types::{DeleteMonitorResp, ListMonitorResp, MonitorResp};
use super::{DEFAULT_SERVICE_NAME, GlobalLoadBalancerMonitorV1};
use crate::common::{required, with_sdk_headers};

const MONITORS_PATH: &str = "/v1/{crn}/load_balancers/monitors";
const MONITOR_PATH: &str = "/v1/{crn}/load_balancers/monitors/{monitor_identifier}";

impl GlobalLoadBalancerMonitorV1 {
    fn build_request(
        &self,
        method: Method,
        path: &str,
        monitor_identifier: Option<&str>,
        operation_id: &str,
    ) -> Result<ApiRequest> {
        let mut params = vec![("crn", self.crn.as_str())];
        if let Some(id) = monitor_identifier {
            params.push(("monitor_identifier", id));
        }
        let request = ApiRequest::new(method, path, &params)?;
        Ok(with_sdk_headers(request, DEFAULT_SERVICE_NAME, operation_id))
    }

    pub async fn list_all_load_balancer_monitors(
        &self,
        opts: &ListAllLoadBalancerMonitorsOptions,
    ) -> Result<DetailedResponse<ListMonitorResp>> {
        self.list_all_load_balancer_monitors_with_context(&RequestContext::background(), opts)
            .await
    }

    pub async fn list_all_load_balancer_monitors_with_context(
        &self,
        ctx: &RequestContext,
        opts: &ListAllLoadBalancerMonitorsOptions,
    ) -> Result<DetailedResponse<ListMonitorResp>> {
        let request = self
            .build_request(
                Method::GET,
                MONITORS_PATH,
                None,
                "list_all_load_balancer_monitors",
            )?
            .headers(&opts.headers);
        self.service.request(ctx, request).await
    }

    pub async fn create_load_balancer_monitor(
        &self,
        opts: &CreateLoadBalancerMonitorOptions,
    ) -> Result<DetailedResponse<MonitorResp>> {
        self.create_load_balancer_monitor_with_context(&RequestContext::background(), opts)
            .await
    }

    pub async fn create_load_balancer_monitor_with_context(
        &self,
        ctx: &RequestContext,
        opts: &CreateLoadBalancerMonitorOptions,
    ) -> Result<DetailedResponse<MonitorResp>> {
        let request = self
            .build_request(
                Method::POST,
                MONITORS_PATH,
                None,
                "create_load_balancer_monitor",
            )?
            .json_body(opts)?
            .headers(&opts.headers);
        self.service.request(ctx, request).await
    }

    /// Replace the settings of a monitor.
    pub async fn edit_load_balancer_monitor(
        &self,
        opts: &EditLoadBalancerMonitorOptions,
    ) -> Result<DetailedResponse<MonitorResp>> {
        self.edit_load_balancer_monitor_with_context(&RequestContext::background(), opts)
            .await
    }

    pub async fn edit_load_balancer_monitor_with_context(
        &self,
        ctx: &RequestContext,
        opts: &EditLoadBalancerMonitorOptions,
    ) -> Result<DetailedResponse<MonitorResp>> {
        let id = required(opts.monitor_identifier.as_ref(), "monitor_identifier")?;
        let request = self
            .build_request(Method::PUT, MONITOR_PATH, Some(id), "edit_load_balancer_monitor")?
            .json_body(opts)?
            .headers(&opts.headers);
        self.service.request(ctx, request).await
    }

    pub async fn delete_load_balancer_monitor(
        &self,
        opts: &DeleteLoadBalancerMonitorOptions,
    ) -> Result<DetailedResponse<DeleteMonitorResp>> {
        self.delete_load_balancer_monitor_with_context(&RequestContext::background(), opts)
            .await
    }

    pub async fn delete_load_balancer_monitor_with_context(
        &self,
        ctx: &RequestContext,
        opts: &DeleteLoadBalancerMonitorOptions,
    ) -> Result<DetailedResponse<DeleteMonitorResp>> {
        let id = required(opts.monitor_identifier.as_ref(), "monitor_identifier")?;
        let request = self
            .build_request(
                Method::DELETE,
                MONITOR_PATH,
                Some(id),
                "delete_load_balancer_monitor",
            )?
            .headers(&opts.headers);
        self.service.request(ctx, request).await
    }

    pub async fn get_load_balancer_monitor(
        &self,
        opts: &GetLoadBalancerMonitorOptions,
    ) -> Result<DetailedResponse<MonitorResp>> {
        self.get_load_balancer_monitor_with_context(&RequestContext::background(), opts)
            .await
    }

    pub async fn get_load_balancer_monitor_with_context(
        &self,
        ctx: &RequestContext,
        opts: &GetLoadBalancerMonitorOptions,
    ) -> Result<DetailedResponse<MonitorResp>> {
        let id = required(opts.monitor_identifier.as_ref(), "monitor_identifier")?;
        let request = self
            .build_request(Method::GET, MONITOR_PATH, Some(id), "get_load_balancer_monitor")?
            .headers(&opts.headers);
        self.service.request(ctx, request).await
    }
}

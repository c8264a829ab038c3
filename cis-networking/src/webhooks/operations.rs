use cis_networking_core::{ApiRequest, DetailedResponse, Method, RequestContext, Result};

use super::options::{
    CreateAlertWebhookOptions, DeleteWebhookOptions, GetWebhookOptions, ListWebhooksOptions,
    UpdateAlertWebhookOptions,
};
use super::types::{ListWebhookResp, WebhookResp, WebhookSuccessResp};
use super::{DEFAULT_SERVICE_NAME, WebhooksV1};
use crate::common::{required, with_sdk_headers};

const WEBHOOKS_PATH: &str = "/v1/{crn}/alerting/destinations/webhooks";
const WEBHOOK_PATH: &str = "/v1/{crn}/alerting/destinations/webhooks/{webhook_id}";

impl WebhooksV1 {
    fn build_request(
        &self,
        method: Method,
        path: &str,
        webhook_id: Option<&str>,
        operation_id: &str,
    ) -> Result<ApiRequest> {
        let mut params = vec![("crn", self.crn.as_str())];
        if let Some(id) = webhook_id {
            params.push(("webhook_id", id));
        }
        let request = ApiRequest::new(method, path, &params)?;
        Ok(with_sdk_headers(request, DEFAULT_SERVICE_NAME, operation_id))
    }

    pub async fn list_webhooks(
        &self,
        opts: &ListWebhooksOptions,
    ) -> Result<DetailedResponse<ListWebhookResp>> {
        self.list_webhooks_with_context(&RequestContext::background(), opts)
            .await
    }

    pub async fn list_webhooks_with_context(
        &self,
        ctx: &RequestContext,
        opts: &ListWebhooksOptions,
    ) -> Result<DetailedResponse<ListWebhookResp>> {
        let request = self
            .build_request(Method::GET, WEBHOOKS_PATH, None, "list_webhooks")?
            .headers(&opts.headers);
        self.service.request(ctx, request).await
    }

    pub async fn create_alert_webhook(
        &self,
        opts: &CreateAlertWebhookOptions,
    ) -> Result<DetailedResponse<WebhookSuccessResp>> {
        self.create_alert_webhook_with_context(&RequestContext::background(), opts)
            .await
    }

    pub async fn create_alert_webhook_with_context(
        &self,
        ctx: &RequestContext,
        opts: &CreateAlertWebhookOptions,
    ) -> Result<DetailedResponse<WebhookSuccessResp>> {
        let request = self
            .build_request(Method::POST, WEBHOOKS_PATH, None, "create_alert_webhook")?
            .json_body(opts)?
            .headers(&opts.headers);
        self.service.request(ctx, request).await
    }

    pub async fn get_webhook(
        &self,
        opts: &GetWebhookOptions,
    ) -> Result<DetailedResponse<WebhookResp>> {
        self.get_webhook_with_context(&RequestContext::background(), opts)
            .await
    }

    pub async fn get_webhook_with_context(
        &self,
        ctx: &RequestContext,
        opts: &GetWebhookOptions,
    ) -> Result<DetailedResponse<WebhookResp>> {
        let id = required(opts.webhook_id.as_ref(), "webhook_id")?;
        let request = self
            .build_request(Method::GET, WEBHOOK_PATH, Some(id), "get_webhook")?
            .headers(&opts.headers);
        self.service.request(ctx, request).await
    }

    pub async fn update_alert_webhook(
        &self,
        opts: &UpdateAlertWebhookOptions,
    ) -> Result<DetailedResponse<WebhookSuccessResp>> {
        self.update_alert_webhook_with_context(&RequestContext::background(), opts)
            .await
    }

    pub async fn update_alert_webhook_with_context(
        &self,
        ctx: &RequestContext,
        opts: &UpdateAlertWebhookOptions,
    ) -> Result<DetailedResponse<WebhookSuccessResp>> {
        let id = required(opts.webhook_id.as_ref(), "webhook_id")?;
        let request = self
            .build_request(Method::PUT, WEBHOOK_PATH, Some(id), "update_alert_webhook")?
            .json_body(opts)?
            .headers(&opts.headers);
        self.service.request(ctx, request).await
    }

    pub async fn delete_webhook(
        &self,
        opts: &DeleteWebhookOptions,
    ) -> Result<DetailedResponse<WebhookSuccessResp>> {
        self.delete_webhook_with_context(&RequestContext::background(), opts)
            .await
    }

    pub async fn delete_webhook_with_context(
        &self,
        ctx: &RequestContext,
        opts: &DeleteWebhookOptions,
    ) -> Result<DetailedResponse<WebhookSuccessResp>> {
        let id = required(opts.webhook_id.as_ref(), "webhook_id")?;
        let request = self
            .build_request(Method::DELETE, WEBHOOK_PATH, Some(id), "delete_webhook")?
            .headers(&opts.headers);
        self.service.request(ctx, request).await
    }
}

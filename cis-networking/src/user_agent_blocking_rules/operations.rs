use cis_networking_core::{ApiRequest, DetailedResponse, Method, RequestContext, Result};

use super::options::{
    CreateZoneUserAgentRuleOptions, DeleteZoneUserAgentRuleOptions, GetUserAgentRuleOptions,
    ListAllZoneUserAgentRulesOptions, UpdateUserAgentRuleOptions,
};
use super::types::{DeleteUseragentRuleResp, ListUseragentRulesResp, UseragentRuleResp};
use super::{DEFAULT_SERVICE_NAME, UserAgentBlockingRulesV1};
use crate::common::{required, with_sdk_headers};

const RULES_PATH: &str = "/v1/{crn}/zones/{zone_identifier}/firewall/ua_rules";
const RULE_PATH: &str =
    "/v1/{crn}/zones/{zone_identifier}/firewall/ua_rules/{useragent_rule_identifier}";

impl UserAgentBlockingRulesV1 {
    fn build_request(
        &self,
        method: Method,
        path: &str,
        rule_identifier: Option<&str>,
        operation_id: &str,
    ) -> Result<ApiRequest> {
        let mut params = vec![
            ("crn", self.crn.as_str()),
            ("zone_identifier", self.zone_identifier.as_str()),
        ];
        if let Some(id) = rule_identifier {
            params.push(("useragent_rule_identifier", id));
        }
        let request = ApiRequest::new(method, path, &params)?;
        Ok(with_sdk_headers(request, DEFAULT_SERVICE_NAME, operation_id))
    }

    pub async fn list_all_zone_user_agent_rules(
        &self,
        opts: &ListAllZoneUserAgentRulesOptions,
    ) -> Result<DetailedResponse<ListUseragentRulesResp>> {
        self.list_all_zone_user_agent_rules_with_context(&RequestContext::background(), opts)
            .await
    }

    pub async fn list_all_zone_user_agent_rules_with_context(
        &self,
        ctx: &RequestContext,
        opts: &ListAllZoneUserAgentRulesOptions,
    ) -> Result<DetailedResponse<ListUseragentRulesResp>> {
        let request = self
            .build_request(Method::GET, RULES_PATH, None, "list_all_zone_user_agent_rules")?
            .query("page", opts.page)
            .query("per_page", opts.per_page)
            .headers(&opts.headers);
        self.service.request(ctx, request).await
    }

    pub async fn create_zone_user_agent_rule(
        &self,
        opts: &CreateZoneUserAgentRuleOptions,
    ) -> Result<DetailedResponse<UseragentRuleResp>> {
        self.create_zone_user_agent_rule_with_context(&RequestContext::background(), opts)
            .await
    }

    pub async fn create_zone_user_agent_rule_with_context(
        &self,
        ctx: &RequestContext,
        opts: &CreateZoneUserAgentRuleOptions,
    ) -> Result<DetailedResponse<UseragentRuleResp>> {
        let request = self
            .build_request(Method::POST, RULES_PATH, None, "create_zone_user_agent_rule")?
            .json_body(opts)?
            .headers(&opts.headers);
        self.service.request(ctx, request).await
    }

    pub async fn delete_zone_user_agent_rule(
        &self,
        opts: &DeleteZoneUserAgentRuleOptions,
    ) -> Result<DetailedResponse<DeleteUseragentRuleResp>> {
        self.delete_zone_user_agent_rule_with_context(&RequestContext::background(), opts)
            .await
    }

    pub async fn delete_zone_user_agent_rule_with_context(
        &self,
        ctx: &RequestContext,
        opts: &DeleteZoneUserAgentRuleOptions,
    ) -> Result<DetailedResponse<DeleteUseragentRuleResp>> {
        let id = required(
            opts.useragent_rule_identifier.as_ref(),
            "useragent_rule_identifier",
        )?;
        let request = self
            .build_request(Method::DELETE, RULE_PATH, Some(id), "delete_zone_user_agent_rule")?
            .headers(&opts.headers);
        self.service.request(ctx, request).await
    }

    pub async fn get_user_agent_rule(
        &self,
        opts: &GetUserAgentRuleOptions,
    ) -> Result<DetailedResponse<UseragentRuleResp>> {
        self.get_user_agent_rule_with_context(&RequestContext::background(), opts)
            .await
    }

    pub async fn get_user_agent_rule_with_context(
        &self,
        ctx: &RequestContext,
        opts: &GetUserAgentRuleOptions,
    ) -> Result<DetailedResponse<UseragentRuleResp>> {
        let id = required(
            opts.useragent_rule_identifier.as_ref(),
            "useragent_rule_identifier",
        )?;
        let request = self
            .build_request(Method::GET, RULE_PATH, Some(id), "get_user_agent_rule")?
            .headers(&opts.headers);
        self.service.request(ctx, request).await
    }

    pub async fn update_user_agent_rule(
        &self,
        opts: &UpdateUserAgentRuleOptions,
    ) -> Result<DetailedResponse<UseragentRuleResp>> {
        self.update_user_agent_rule_with_context(&RequestContext::background(), opts)
            .await
    }

    pub async fn update_user_agent_rule_with_context(
        &self,
        ctx: &RequestContext,
        opts: &UpdateUserAgentRuleOptions,
    ) -> Result<DetailedResponse<UseragentRuleResp>> {
        let id = required(
            opts.useragent_rule_identifier.as_ref(),
            "useragent_rule_identifier",
        )?;
        let request = self
            .build_request(Method::PUT, RULE_PATH, Some(id), "update_user_agent_rule")?
            .json_body(opts)?
            .headers(&opts.headers);
        self.service.request(ctx, request).await
    }
}

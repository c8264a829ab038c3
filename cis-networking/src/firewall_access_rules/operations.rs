use cis_networking_core::{ApiRequest, DetailedResponse, Method, RequestContext, Result};

use super::options::{
    CreateAccountAccessRuleOptions, DeleteAccountAccessRuleOptions, GetAccountAccessRuleOptions,
    ListAllAccountAccessRulesOptions, UpdateAccountAccessRuleOptions,
};
use super::types::{
    AccountAccessRuleResp, DeleteAccountAccessRuleResp, ListAccountAccessRulesResp,
};
use super::{DEFAULT_SERVICE_NAME, FirewallAccessRulesV1};
use crate::common::{required, with_sdk_headers};

const RULES_PATH: &str = "/v1/{crn}/firewall/access_rules/rules";
const RULE_PATH: &str = "/v1/{crn}/firewall/access_rules/rules/{accessrule_identifier}";

impl FirewallAccessRulesV1 {
    fn build_request(
        &self,
        method: Method,
        path: &str,
        accessrule_identifier: Option<&str>,
        operation_id: &str,
    ) -> Result<ApiRequest> {
        let mut params = vec![("crn", self.crn.as_str())];
        if let Some(id) = accessrule_identifier {
            params.push(("accessrule_identifier", id));
        }
        let request = ApiRequest::new(method, path, &params)?;
        Ok(with_sdk_headers(request, DEFAULT_SERVICE_NAME, operation_id))
    }

    pub async fn list_all_account_access_rules(
        &self,
        opts: &ListAllAccountAccessRulesOptions,
    ) -> Result<DetailedResponse<ListAccountAccessRulesResp>> {
        self.list_all_account_access_rules_with_context(&RequestContext::background(), opts)
            .await
    }

    pub async fn list_all_account_access_rules_with_context(
        &self,
        ctx: &RequestContext,
        opts: &ListAllAccountAccessRulesOptions,
    ) -> Result<DetailedResponse<ListAccountAccessRulesResp>> {
        let request = self
            .build_request(Method::GET, RULES_PATH, None, "list_all_account_access_rules")?
            .query("notes", opts.notes.as_deref())
            .query("mode", opts.mode)
            .query("configuration.target", opts.configuration_target)
            .query("configuration.value", opts.configuration_value.as_deref())
            .query("page", opts.page)
            .query("per_page", opts.per_page)
            .query("order", opts.order)
            .query("direction", opts.direction)
            .query("match", opts.match_mode)
            .headers(&opts.headers);
        self.service.request(ctx, request).await
    }

    pub async fn create_account_access_rule(
        &self,
        opts: &CreateAccountAccessRuleOptions,
    ) -> Result<DetailedResponse<AccountAccessRuleResp>> {
        self.create_account_access_rule_with_context(&RequestContext::background(), opts)
            .await
    }

    pub async fn create_account_access_rule_with_context(
        &self,
        ctx: &RequestContext,
        opts: &CreateAccountAccessRuleOptions,
    ) -> Result<DetailedResponse<AccountAccessRuleResp>> {
        let request = self
            .build_request(Method::POST, RULES_PATH, None, "create_account_access_rule")?
            .json_body(opts)?
            .headers(&opts.headers);
        self.service.request(ctx, request).await
    }

    pub async fn delete_account_access_rule(
        &self,
        opts: &DeleteAccountAccessRuleOptions,
    ) -> Result<DetailedResponse<DeleteAccountAccessRuleResp>> {
        self.delete_account_access_rule_with_context(&RequestContext::background(), opts)
            .await
    }

    pub async fn delete_account_access_rule_with_context(
        &self,
        ctx: &RequestContext,
        opts: &DeleteAccountAccessRuleOptions,
    ) -> Result<DetailedResponse<DeleteAccountAccessRuleResp>> {
        let id = required(opts.accessrule_identifier.as_ref(), "accessrule_identifier")?;
        let request = self
            .build_request(Method::DELETE, RULE_PATH, Some(id), "delete_account_access_rule")?
            .headers(&opts.headers);
        self.service.request(ctx, request).await
    }

    pub async fn get_account_access_rule(
        &self,
        opts: &GetAccountAccessRuleOptions,
    ) -> Result<DetailedResponse<AccountAccessRuleResp>> {
        self.get_account_access_rule_with_context(&RequestContext::background(), opts)
            .await
    }

    pub async fn get_account_access_rule_with_context(
        &self,
        ctx: &RequestContext,
        opts: &GetAccountAccessRuleOptions,
    ) -> Result<DetailedResponse<AccountAccessRuleResp>> {
        let id = required(opts.accessrule_identifier.as_ref(), "accessrule_identifier")?;
        let request = self
            .build_request(Method::GET, RULE_PATH, Some(id), "get_account_access_rule")?
            .headers(&opts.headers);
        self.service.request(ctx, request).await
    }

    /// Change the mode or notes of a rule.
    pub async fn update_account_access_rule(
        &self,
        opts: &UpdateAccountAccessRuleOptions,
    ) -> Result<DetailedResponse<AccountAccessRuleResp>> {
        self.update_account_access_rule_with_context(&RequestContext::background(), opts)
            .await
    }

    pub async fn update_account_access_rule_with_context(
        &self,
        ctx: &RequestContext,
        opts: &UpdateAccountAccessRuleOptions,
    ) -> Result<DetailedResponse<AccountAccessRuleResp>> {
        let id = required(opts.accessrule_identifier.as_ref(), "accessrule_identifier")?;
        let request = self
            .build_request(Method::PATCH, RULE_PATH, Some(id), "update_account_access_rule")?
            .json_body(opts)?
            .headers(&opts.headers);
        self.service.request(ctx, request).await
    }
}

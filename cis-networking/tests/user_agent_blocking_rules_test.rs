//! User agent blocking rules client against a mock server.
//!
//! ```bash
//! cargo test -p cis-networking --test user_agent_blocking_rules_test
//! ```

mod common;

use std::time::Duration;

use cis_networking::user_agent_blocking_rules::{
    CreateZoneUserAgentRuleOptions, DeleteZoneUserAgentRuleOptions, GetUserAgentRuleOptions,
    ListAllZoneUserAgentRulesOptions, UpdateUserAgentRuleOptions, UseragentRuleConfiguration,
    UseragentRuleMode,
};
use cis_networking::{
    SdkError, ServiceClient, UserAgentBlockingRulesV1, UserAgentBlockingRulesV1Options,
};
use common::{
    TEST_CRN, TEST_ZONE_ID, ContextFactory, OpOutcome, assert_deadline_exceeded,
    assert_invalid_json, assert_service_url_missing, crn_path, entry_points, envelope,
    invalid_json_response, noauth, short_deadline, slow_response, start_server,
};
use serde_json::json;
use wiremock::matchers::{any, body_json, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

const BOT_UA: &str = "Mozilla/5.0 (compatible; BadBot/1.0)";

fn client(url: &str) -> cis_networking::Result<UserAgentBlockingRulesV1> {
    UserAgentBlockingRulesV1::new(UserAgentBlockingRulesV1Options {
        url: Some(url.to_string()),
        authenticator: noauth(),
        crn: Some(TEST_CRN.to_string()),
        zone_identifier: Some(TEST_ZONE_ID.to_string()),
    })
}

fn rules_path(rest: &str) -> String {
    crn_path(&format!("/zones/{TEST_ZONE_ID}/firewall/ua_rules{rest}"))
}

fn rule_json(id: &str, mode: &str, paused: bool) -> serde_json::Value {
    json!({
        "id": id,
        "paused": paused,
        "description": "block bad bot",
        "mode": mode,
        "configuration": {"target": "ua", "value": BOT_UA}
    })
}

#[tokio::test]
async fn list_rules_with_paging() {
    let server = start_server().await;
    let mut body = envelope(json!([rule_json("u1", "block", false)]));
    body["result_info"] = json!({"page": 1, "per_page": 10, "count": 1, "total_count": 1});
    Mock::given(method("GET"))
        .and(path(rules_path("")))
        .and(query_param("page", "1"))
        .and(query_param("per_page", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(1)
        .mount(&server)
        .await;

    let rules = require_ok!(client(&server.uri()));
    let resp = require_ok!(
        rules
            .list_all_zone_user_agent_rules(
                &ListAllZoneUserAgentRulesOptions::new()
                    .with_page(1)
                    .with_per_page(10),
            )
            .await
    );
    let env = require_some!(resp.result);
    assert!(!require_some!(env.result_info).has_more());
    let list = require_some!(env.result);
    let config = require_some!(list[0].configuration.as_ref());
    assert_eq!(config.target, UseragentRuleConfiguration::TARGET_UA);
    assert_eq!(config.value, BOT_UA);
}

#[tokio::test]
async fn rule_lifecycle() {
    let server = start_server().await;
    Mock::given(method("POST"))
        .and(path(rules_path("")))
        .and(body_json(json!({
            "paused": false,
            "description": "block bad bot",
            "mode": "block",
            "configuration": {"target": "ua", "value": BOT_UA}
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(envelope(rule_json("u9", "block", false))),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path(rules_path("/u9")))
        .and(body_json(json!({
            "mode": "js_challenge",
            "configuration": {"target": "ua", "value": BOT_UA}
        })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(envelope(rule_json("u9", "js_challenge", false))),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(rules_path("/u9")))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(envelope(rule_json("u9", "js_challenge", false))),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path(rules_path("/u9")))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!({"id": "u9"}))))
        .expect(1)
        .mount(&server)
        .await;

    let rules = require_ok!(client(&server.uri()));

    let created = require_ok!(
        rules
            .create_zone_user_agent_rule(
                &CreateZoneUserAgentRuleOptions::new()
                    .with_paused(false)
                    .with_description("block bad bot")
                    .with_mode(UseragentRuleMode::Block)
                    .with_configuration(UseragentRuleConfiguration::new(BOT_UA)),
            )
            .await
    );
    let rule = require_some!(created.into_result().and_then(|env| env.result));
    let rule_id = require_some!(rule.id);

    let updated = require_ok!(
        rules
            .update_user_agent_rule(
                &UpdateUserAgentRuleOptions::new(&rule_id)
                    .with_mode(UseragentRuleMode::JsChallenge)
                    .with_configuration(UseragentRuleConfiguration::new(BOT_UA)),
            )
            .await
    );
    let rule = require_some!(updated.into_result().and_then(|env| env.result));
    assert_eq!(rule.mode.as_deref(), Some("js_challenge"));

    let fetched = require_ok!(
        rules
            .get_user_agent_rule(&GetUserAgentRuleOptions::new(&rule_id))
            .await
    );
    assert_eq!(fetched.status_code, 200);

    let deleted = require_ok!(
        rules
            .delete_zone_user_agent_rule(&DeleteZoneUserAgentRuleOptions::new(&rule_id))
            .await
    );
    let env = require_some!(deleted.result);
    assert_eq!(env.result.map(|r| r.id).as_deref(), Some("u9"));
}

#[tokio::test]
async fn missing_rule_identifier_never_reaches_server() {
    let server = start_server().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let rules = require_ok!(client(&server.uri()));
    let checks = [
        rules
            .get_user_agent_rule(&GetUserAgentRuleOptions::default())
            .await
            .err(),
        rules
            .update_user_agent_rule(&UpdateUserAgentRuleOptions::default())
            .await
            .err(),
        rules
            .delete_zone_user_agent_rule(&DeleteZoneUserAgentRuleOptions::default())
            .await
            .err(),
    ];
    for err in checks {
        assert!(
            matches!(&err, Some(SdkError::Validation { field, .. }) if field == "useragent_rule_identifier"),
            "{err:?}"
        );
    }
}

#[tokio::test]
async fn invalid_json_is_a_processing_error_with_and_without_retries() {
    let server = start_server().await;
    Mock::given(method("GET"))
        .and(path(rules_path("/u1")))
        .respond_with(invalid_json_response())
        .expect(2)
        .mount(&server)
        .await;

    let mut rules = require_ok!(client(&server.uri()));
    let opts = GetUserAgentRuleOptions::new("u1");

    rules.enable_retries(3, Duration::from_millis(20));
    let result = rules.get_user_agent_rule(&opts).await;
    assert!(
        matches!(&result, Err(SdkError::ResponseProcessing { .. })),
        "{result:?}"
    );

    rules.disable_retries();
    let result = rules.get_user_agent_rule(&opts).await;
    let raw = require_some!(result.as_ref().err().and_then(SdkError::response));
    assert_eq!(raw.body, common::INVALID_JSON);
}

#[tokio::test]
async fn deadline_bounds_each_operation() {
    let server = start_server().await;
    Mock::given(method("GET"))
        .and(path(rules_path("")))
        .respond_with(slow_response(envelope(json!([]))))
        .mount(&server)
        .await;

    let rules = require_ok!(client(&server.uri()));
    let opts = ListAllZoneUserAgentRulesOptions::new();
    let result = rules
        .list_all_zone_user_agent_rules_with_context(&short_deadline(), &opts)
        .await;
    assert!(
        matches!(&result, Err(e) if e.to_string().contains("deadline exceeded")),
        "{result:?}"
    );

    let resp = rules.list_all_zone_user_agent_rules(&opts).await;
    assert!(resp.is_ok(), "{resp:?}");
}

#[tokio::test]
async fn region_lookup() {
    assert!(UserAgentBlockingRulesV1::service_url_for_region("INVALID_REGION").is_err());
    assert!(UserAgentBlockingRulesV1::service_url_for_region("global").is_ok());
}

/// Every operation, through the entry point `ctx` selects.
async fn call_every_operation(
    rules: &UserAgentBlockingRulesV1,
    ctx: Option<ContextFactory>,
) -> Vec<OpOutcome> {
    let list = ListAllZoneUserAgentRulesOptions::new();
    let create = CreateZoneUserAgentRuleOptions::new();
    let get = GetUserAgentRuleOptions::new("u1");
    let update = UpdateUserAgentRuleOptions::new("u1");
    let delete = DeleteZoneUserAgentRuleOptions::new("u1");
    match ctx {
        None => vec![
            (
                "list_all_zone_user_agent_rules",
                rules.list_all_zone_user_agent_rules(&list).await.map(drop),
            ),
            (
                "create_zone_user_agent_rule",
                rules.create_zone_user_agent_rule(&create).await.map(drop),
            ),
            ("get_user_agent_rule", rules.get_user_agent_rule(&get).await.map(drop)),
            ("update_user_agent_rule", rules.update_user_agent_rule(&update).await.map(drop)),
            (
                "delete_zone_user_agent_rule",
                rules.delete_zone_user_agent_rule(&delete).await.map(drop),
            ),
        ],
        Some(ctx) => vec![
            (
                "list_all_zone_user_agent_rules_with_context",
                rules.list_all_zone_user_agent_rules_with_context(&ctx(), &list).await.map(drop),
            ),
            (
                "create_zone_user_agent_rule_with_context",
                rules.create_zone_user_agent_rule_with_context(&ctx(), &create).await.map(drop),
            ),
            (
                "get_user_agent_rule_with_context",
                rules.get_user_agent_rule_with_context(&ctx(), &get).await.map(drop),
            ),
            (
                "update_user_agent_rule_with_context",
                rules.update_user_agent_rule_with_context(&ctx(), &update).await.map(drop),
            ),
            (
                "delete_zone_user_agent_rule_with_context",
                rules.delete_zone_user_agent_rule_with_context(&ctx(), &delete).await.map(drop),
            ),
        ],
    }
}

#[tokio::test]
async fn every_operation_reports_invalid_json() {
    let server = start_server().await;
    Mock::given(wiremock::matchers::any())
        .respond_with(invalid_json_response())
        .mount(&server)
        .await;

    let mut rules = require_ok!(client(&server.uri()));
    for retries in [true, false] {
        if retries {
            rules.enable_retries(2, Duration::from_millis(10));
        } else {
            rules.disable_retries();
        }
        for ctx in entry_points() {
            for outcome in call_every_operation(&rules, ctx).await {
                assert_invalid_json(&outcome);
            }
        }
    }
}

#[tokio::test]
async fn every_operation_honours_the_deadline() {
    let server = start_server().await;
    Mock::given(wiremock::matchers::any())
        .respond_with(slow_response(serde_json::json!({})))
        .mount(&server)
        .await;

    let rules = require_ok!(client(&server.uri()));
    let outcomes = call_every_operation(&rules, Some(short_deadline as ContextFactory)).await;
    assert_eq!(outcomes.len(), 5);
    for outcome in outcomes {
        assert_deadline_exceeded(&outcome);
    }
}

#[tokio::test]
async fn every_operation_needs_a_service_url() {
    let mut rules = require_ok!(client("https://api.cis.cloud.ibm.com"));
    require_ok!(rules.set_service_url(""));
    for ctx in entry_points() {
        for outcome in call_every_operation(&rules, ctx).await {
            assert_service_url_missing(&outcome);
        }
    }
}

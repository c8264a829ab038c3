//! Alert webhooks client against a mock server.
//!
//! ```bash
//! cargo test -p cis-networking --test webhooks_test
//! ```

mod common;

use std::time::Duration;

use cis_networking::webhooks::{
    CreateAlertWebhookOptions, DeleteWebhookOptions, GetWebhookOptions, ListWebhooksOptions,
    UpdateAlertWebhookOptions,
};
use cis_networking::{SdkError, ServiceClient, WebhooksV1, WebhooksV1Options};
use common::{
    TEST_CRN, ContextFactory, OpOutcome, assert_deadline_exceeded, assert_invalid_json,
    assert_service_url_missing, crn_path, entry_points, envelope, invalid_json_response, noauth,
    short_deadline, slow_response, start_server, unique_name,
};
use serde_json::json;
use wiremock::matchers::{any, body_json, method, path};
use wiremock::{Mock, ResponseTemplate};

const HOOK_URL: &str = "https://hooks.example.com/services/alerts";

fn client(url: &str) -> cis_networking::Result<WebhooksV1> {
    WebhooksV1::new(WebhooksV1Options {
        url: Some(url.to_string()),
        authenticator: noauth(),
        crn: Some(TEST_CRN.to_string()),
    })
}

fn webhooks_path(rest: &str) -> String {
    crn_path(&format!("/alerting/destinations/webhooks{rest}"))
}

fn webhook_json(id: &str, name: &str) -> serde_json::Value {
    json!({
        "id": id,
        "name": name,
        "url": HOOK_URL,
        "type": "generic",
        "created_at": "2020-03-26T18:27:34.000000Z",
        "last_success": "2020-03-26T18:27:34.000000Z",
        "last_failure": "2020-03-26T18:27:34.000000Z"
    })
}

#[tokio::test]
async fn list_webhooks() {
    let server = start_server().await;
    Mock::given(method("GET"))
        .and(path(webhooks_path("")))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!([
            webhook_json("w1", "ops"),
            webhook_json("w2", "oncall")
        ]))))
        .expect(1)
        .mount(&server)
        .await;

    let webhooks = require_ok!(client(&server.uri()));
    let resp = require_ok!(webhooks.list_webhooks(&ListWebhooksOptions::new()).await);
    let list = require_some!(resp.into_result().and_then(|env| env.result));
    assert_eq!(list.len(), 2);
    assert_eq!(list[0].webhook_type.as_deref(), Some("generic"));
    assert_eq!(list[1].name.as_deref(), Some("oncall"));
}

#[tokio::test]
async fn webhook_lifecycle() {
    let server = start_server().await;
    let name = unique_name("hook");

    Mock::given(method("POST"))
        .and(path(webhooks_path("")))
        .and(body_json(json!({
            "name": name,
            "url": HOOK_URL,
            "secret": "s3cr3t"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!({"id": "w9"}))))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path(webhooks_path("/w9")))
        .and(body_json(json!({"name": "renamed"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!({"id": "w9"}))))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(webhooks_path("/w9")))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(webhook_json("w9", "renamed"))))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path(webhooks_path("/w9")))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!({"id": "w9"}))))
        .expect(1)
        .mount(&server)
        .await;

    let webhooks = require_ok!(client(&server.uri()));

    let create = CreateAlertWebhookOptions::new()
        .with_name(&name)
        .with_url(HOOK_URL)
        .with_secret("s3cr3t");
    assert!(!format!("{create:?}").contains("s3cr3t"));
    let created = require_ok!(webhooks.create_alert_webhook(&create).await);
    let webhook_id = require_some!(created.into_result().and_then(|env| env.result)).id;

    let updated = require_ok!(
        webhooks
            .update_alert_webhook(&UpdateAlertWebhookOptions::new(&webhook_id).with_name("renamed"))
            .await
    );
    assert_eq!(updated.status_code, 200);

    let fetched = require_ok!(
        webhooks
            .get_webhook(&GetWebhookOptions::new(&webhook_id))
            .await
    );
    let hook = require_some!(fetched.into_result().and_then(|env| env.result));
    assert_eq!(hook.name.as_deref(), Some("renamed"));
    assert_eq!(hook.url.as_deref(), Some(HOOK_URL));

    let deleted = require_ok!(
        webhooks
            .delete_webhook(&DeleteWebhookOptions::new(&webhook_id))
            .await
    );
    let env = require_some!(deleted.result);
    assert!(env.success);
}

#[tokio::test]
async fn missing_webhook_id_never_reaches_server() {
    let server = start_server().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let webhooks = require_ok!(client(&server.uri()));
    let checks = [
        webhooks
            .get_webhook(&GetWebhookOptions::default())
            .await
            .err(),
        webhooks
            .update_alert_webhook(&UpdateAlertWebhookOptions::default())
            .await
            .err(),
        webhooks
            .delete_webhook(&DeleteWebhookOptions::default())
            .await
            .err(),
    ];
    for err in checks {
        assert!(
            matches!(&err, Some(SdkError::Validation { field, .. }) if field == "webhook_id"),
            "{err:?}"
        );
    }
}

#[tokio::test]
async fn invalid_json_is_a_processing_error_with_and_without_retries() {
    let server = start_server().await;
    Mock::given(method("GET"))
        .and(path(webhooks_path("")))
        .respond_with(invalid_json_response())
        .expect(2)
        .mount(&server)
        .await;

    let mut webhooks = require_ok!(client(&server.uri()));
    let opts = ListWebhooksOptions::new();

    webhooks.enable_retries(3, Duration::from_millis(20));
    let result = webhooks.list_webhooks(&opts).await;
    assert!(
        matches!(&result, Err(SdkError::ResponseProcessing { .. })),
        "{result:?}"
    );

    webhooks.disable_retries();
    let result = webhooks.list_webhooks(&opts).await;
    let raw = require_some!(result.as_ref().err().and_then(SdkError::response));
    assert_eq!(raw.body, common::INVALID_JSON);
}

#[tokio::test]
async fn deadline_bounds_each_operation() {
    let server = start_server().await;
    Mock::given(method("GET"))
        .and(path(webhooks_path("/w1")))
        .respond_with(slow_response(envelope(webhook_json("w1", "ops"))))
        .mount(&server)
        .await;

    let webhooks = require_ok!(client(&server.uri()));
    let opts = GetWebhookOptions::new("w1");
    let result = webhooks
        .get_webhook_with_context(&short_deadline(), &opts)
        .await;
    assert!(
        matches!(&result, Err(e) if e.to_string().contains("deadline exceeded")),
        "{result:?}"
    );

    let resp = webhooks.get_webhook(&opts).await;
    assert!(resp.is_ok(), "{resp:?}");
}

#[tokio::test]
async fn cancelled_context_stops_the_call() {
    let server = start_server().await;
    Mock::given(method("GET"))
        .respond_with(slow_response(envelope(json!([]))))
        .mount(&server)
        .await;

    let webhooks = require_ok!(client(&server.uri()));
    let ctx = cis_networking::RequestContext::background();
    ctx.cancel();
    let result = webhooks
        .list_webhooks_with_context(&ctx, &ListWebhooksOptions::new())
        .await;
    assert!(matches!(result, Err(SdkError::Cancelled)), "{result:?}");
}

#[tokio::test]
async fn region_lookup() {
    assert!(WebhooksV1::service_url_for_region("INVALID_REGION").is_err());
    assert!(WebhooksV1::service_url_for_region("global").is_ok());
}

/// Every operation, through the entry point `ctx` selects.
async fn call_every_operation(
    webhooks: &WebhooksV1,
    ctx: Option<ContextFactory>,
) -> Vec<OpOutcome> {
    let list = ListWebhooksOptions::new();
    let create = CreateAlertWebhookOptions::new();
    let get = GetWebhookOptions::new("w1");
    let update = UpdateAlertWebhookOptions::new("w1");
    let delete = DeleteWebhookOptions::new("w1");
    match ctx {
        None => vec![
            ("list_webhooks", webhooks.list_webhooks(&list).await.map(drop)),
            ("create_alert_webhook", webhooks.create_alert_webhook(&create).await.map(drop)),
            ("get_webhook", webhooks.get_webhook(&get).await.map(drop)),
            ("update_alert_webhook", webhooks.update_alert_webhook(&update).await.map(drop)),
            ("delete_webhook", webhooks.delete_webhook(&delete).await.map(drop)),
        ],
        Some(ctx) => vec![
            (
                "list_webhooks_with_context",
                webhooks.list_webhooks_with_context(&ctx(), &list).await.map(drop),
            ),
            (
                "create_alert_webhook_with_context",
                webhooks.create_alert_webhook_with_context(&ctx(), &create).await.map(drop),
            ),
            (
                "get_webhook_with_context",
                webhooks.get_webhook_with_context(&ctx(), &get).await.map(drop),
            ),
            (
                "update_alert_webhook_with_context",
                webhooks.update_alert_webhook_with_context(&ctx(), &update).await.map(drop),
            ),
            (
                "delete_webhook_with_context",
                webhooks.delete_webhook_with_context(&ctx(), &delete).await.map(drop),
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

    let mut webhooks = require_ok!(client(&server.uri()));
    for retries in [true, false] {
        if retries {
            webhooks.enable_retries(2, Duration::from_millis(10));
        } else {
            webhooks.disable_retries();
        }
        for ctx in entry_points() {
            for outcome in call_every_operation(&webhooks, ctx).await {
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

    let webhooks = require_ok!(client(&server.uri()));
    let outcomes = call_every_operation(&webhooks, Some(short_deadline as ContextFactory)).await;
    assert_eq!(outcomes.len(), 5);
    for outcome in outcomes {
        assert_deadline_exceeded(&outcome);
    }
}

#[tokio::test]
async fn every_operation_needs_a_service_url() {
    let mut webhooks = require_ok!(client("https://api.cis.cloud.ibm.com"));
    require_ok!(webhooks.set_service_url(""));
    for ctx in entry_points() {
        for outcome in call_every_operation(&webhooks, ctx).await {
            assert_service_url_missing(&outcome);
        }
    }
}

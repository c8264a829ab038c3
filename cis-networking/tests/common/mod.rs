//! Shared test helpers: mock server setup, fixtures and assertion macros.

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use cis_networking::{
    Authenticator, ERRORMSG_SERVICE_URL_MISSING, NoAuthAuthenticator, RequestContext, SdkError,
};
use serde_json::{Value, json};
use wiremock::{MockServer, ResponseTemplate};

/// Body the server returns to exercise decode failures.
pub const INVALID_JSON: &str = "} this is not valid json {";

/// A CIS instance CRN with the characters that need escaping in a path.
pub const TEST_CRN: &str = "crn:v1:bluemix:public:internet-svcs:global:a/abc123:inst-1::";

pub const TEST_ZONE_ID: &str = "023e105f4ecef8ad9ca31a8372d0c353";

/// Assert that an `Option` is `Some` and unwrap it, failing the test otherwise.
#[macro_export]
macro_rules! require_some {
    ($expr:expr $(,)?) => {{
        let opt = $expr;
        assert!(opt.is_some(), "expected Some(..), got None");
        let Some(val) = opt else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let opt = $expr;
        assert!(opt.is_some(), "{}", format_args!($($msg)+));
        let Some(val) = opt else {
            return;
        };
        val
    }};
}

/// Assert that a `Result` is `Ok` and unwrap it, failing the test otherwise.
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(val) = res else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let res = $expr;
        assert!(
            res.is_ok(),
            "{}: {res:?}",
            format_args!($($msg)+)
        );
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

/// Start a mock server with logging routed to the test harness.
pub async fn start_server() -> MockServer {
    let _ = env_logger::builder().is_test(true).try_init();
    MockServer::start().await
}

pub fn noauth() -> Option<Arc<dyn Authenticator>> {
    Some(Arc::new(NoAuthAuthenticator::new()))
}

/// Escape a path segment the way the clients do, for path matchers.
/// `:` stays literal; the CRN's account separator `/` is escaped.
pub fn encode_segment(segment: &str) -> String {
    segment
        .replace('%', "%25")
        .replace('/', "%2F")
        .replace('?', "%3F")
        .replace(';', "%3B")
        .replace(',', "%2C")
}

/// `/v1/<encoded TEST_CRN>` followed by `rest`.
pub fn crn_path(rest: &str) -> String {
    format!("/v1/{}{rest}", encode_segment(TEST_CRN))
}

/// Unique resource name for a test run.
pub fn unique_name(prefix: &str) -> String {
    let uuid = uuid::Uuid::new_v4();
    format!("{prefix}-{}", &uuid.to_string()[..8])
}

/// A successful CIS envelope around `result`.
pub fn envelope(result: Value) -> Value {
    json!({
        "success": true,
        "errors": [],
        "messages": [],
        "result": result
    })
}

/// 200 with a body that is not JSON.
pub fn invalid_json_response() -> ResponseTemplate {
    ResponseTemplate::new(200)
        .insert_header("Content-Type", "application/json")
        .set_body_string(INVALID_JSON)
}

/// 200 with a valid body, delivered after 100ms.
pub fn slow_response(body: Value) -> ResponseTemplate {
    ResponseTemplate::new(200)
        .set_body_json(body)
        .set_delay(Duration::from_millis(100))
}

/// A context that expires before [`slow_response`] answers.
pub fn short_deadline() -> RequestContext {
    RequestContext::with_timeout(Duration::from_millis(80))
}

/// How a table-driven test reaches an operation: `None` calls the plain
/// method, `Some(factory)` calls its `_with_context` twin with a fresh context.
pub type ContextFactory = fn() -> RequestContext;

/// Outcome of one operation, named for assertion messages.
pub type OpOutcome = (&'static str, cis_networking::Result<()>);

/// Both entry points of every operation.
pub fn entry_points() -> [Option<ContextFactory>; 2] {
    [None, Some(RequestContext::background as ContextFactory)]
}

pub fn assert_invalid_json((op, result): &OpOutcome) {
    assert!(
        matches!(result, Err(SdkError::ResponseProcessing { .. })),
        "{op}: {result:?}"
    );
    let body = result
        .as_ref()
        .err()
        .and_then(SdkError::response)
        .map(|raw| raw.body.as_str());
    assert_eq!(body, Some(INVALID_JSON), "{op}");
}

pub fn assert_deadline_exceeded((op, result): &OpOutcome) {
    assert!(
        matches!(result, Err(SdkError::DeadlineExceeded)),
        "{op}: {result:?}"
    );
}

pub fn assert_service_url_missing((op, result): &OpOutcome) {
    assert!(
        matches!(result, Err(SdkError::Request(msg)) if msg == ERRORMSG_SERVICE_URL_MISSING),
        "{op}: {result:?}"
    );
}

use serde::{Deserialize, Serialize};

use crate::envelope::{Envelope, IdResult};

/// An alert webhook destination.
///
/// Timestamps are passed through as the server formats them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Destination kind, e.g. `generic` or `slack`.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub webhook_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_success: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_failure: Option<String>,
}

pub type WebhookResp = Envelope<WebhookResult>;

pub type ListWebhookResp = Envelope<Vec<WebhookResult>>;

/// Create, update and delete only echo the webhook id.
pub type WebhookSuccessResp = Envelope<IdResult>;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn decodes_listing() {
        let body = r#"{
            "success": true, "errors": [], "messages": [],
            "result": [{
                "id": "b115d5ec15c52ee659a578c8a4d02fb7",
                "name": "My Slack Alert Webhook",
                "url": "https://hooks.slack.com/services/Ds3fdBFbV/456464Gdd",
                "type": "slack",
                "created_at": "2020-10-26T18:25:04.45Z",
                "last_success": "2020-10-27T18:25:04.45Z",
                "last_failure": ""
            }],
            "result_info": {"page": 1, "per_page": 20, "count": 1, "total_count": 1}
        }"#;
        let resp: ListWebhookResp = serde_json::from_str(body).unwrap();
        let hooks = resp.result.unwrap();
        assert_eq!(hooks[0].webhook_type.as_deref(), Some("slack"));
        assert_eq!(hooks[0].last_failure.as_deref(), Some(""));
    }
}

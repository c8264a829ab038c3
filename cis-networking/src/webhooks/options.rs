use std::collections::HashMap;
use std::fmt;

use serde::Serialize;

/// Options for `list_webhooks`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListWebhooksOptions {
    pub headers: HashMap<String, String>,
}

impl ListWebhooksOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_headers(mut self, headers: HashMap<String, String>) -> Self {
        self.headers = headers;
        self
    }
}

/// Options for `create_alert_webhook`.
#[derive(Clone, Default, PartialEq, Eq, Serialize)]
pub struct CreateAlertWebhookOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Destination URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Sent back by CIS in the `cf-webhook-auth` header.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret: Option<String>,
    #[serde(skip)]
    pub headers: HashMap<String, String>,
}

impl fmt::Debug for CreateAlertWebhookOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CreateAlertWebhookOptions")
            .field("name", &self.name)
            .field("url", &self.url)
            .field("secret", &self.secret.as_ref().map(|_| "[REDACTED]"))
            .field("headers", &self.headers)
            .finish()
    }
}

impl CreateAlertWebhookOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    #[must_use]
    pub fn with_secret(mut self, secret: impl Into<String>) -> Self {
        self.secret = Some(secret.into());
        self
    }

    #[must_use]
    pub fn with_headers(mut self, headers: HashMap<String, String>) -> Self {
        self.headers = headers;
        self
    }
}

/// Options for `get_webhook`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetWebhookOptions {
    /// Required.
    pub webhook_id: Option<String>,
    pub headers: HashMap<String, String>,
}

impl GetWebhookOptions {
    pub fn new(webhook_id: impl Into<String>) -> Self {
        Self {
            webhook_id: Some(webhook_id.into()),
            headers: HashMap::new(),
        }
    }

    #[must_use]
    pub fn with_webhook_id(mut self, webhook_id: impl Into<String>) -> Self {
        self.webhook_id = Some(webhook_id.into());
        self
    }

    #[must_use]
    pub fn with_headers(mut self, headers: HashMap<String, String>) -> Self {
        self.headers = headers;
        self
    }
}

/// Options for `update_alert_webhook`.
#[derive(Clone, Default, PartialEq, Eq, Serialize)]
pub struct UpdateAlertWebhookOptions {
    /// Required.
    #[serde(skip)]
    pub webhook_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret: Option<String>,
    #[serde(skip)]
    pub headers: HashMap<String, String>,
}

impl fmt::Debug for UpdateAlertWebhookOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UpdateAlertWebhookOptions")
            .field("webhook_id", &self.webhook_id)
            .field("name", &self.name)
            .field("url", &self.url)
            .field("secret", &self.secret.as_ref().map(|_| "[REDACTED]"))
            .field("headers", &self.headers)
            .finish()
    }
}

impl UpdateAlertWebhookOptions {
    pub fn new(webhook_id: impl Into<String>) -> Self {
        Self {
            webhook_id: Some(webhook_id.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_webhook_id(mut self, webhook_id: impl Into<String>) -> Self {
        self.webhook_id = Some(webhook_id.into());
        self
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    #[must_use]
    pub fn with_secret(mut self, secret: impl Into<String>) -> Self {
        self.secret = Some(secret.into());
        self
    }

    #[must_use]
    pub fn with_headers(mut self, headers: HashMap<String, String>) -> Self {
        self.headers = headers;
        self
    }
}

/// Options for `delete_webhook`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteWebhookOptions {
    /// Required.
    pub webhook_id: Option<String>,
    pub headers: HashMap<String, String>,
}

impl DeleteWebhookOptions {
    pub fn new(webhook_id: impl Into<String>) -> Self {
        Self {
            webhook_id: Some(webhook_id.into()),
            headers: HashMap::new(),
        }
    }

    #[must_use]
    pub fn with_webhook_id(mut self, webhook_id: impl Into<String>) -> Self {
        self.webhook_id = Some(webhook_id.into());
        self
    }

    #[must_use]
    pub fn with_headers(mut self, headers: HashMap<String, String>) -> Self {
        self.headers = headers;
        self
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn create_setters_and_body() {
        let opts = CreateAlertWebhookOptions::new()
            .with_name("My Slack Alert Webhook")
            .with_url("https://hooks.slack.com/services/Ds3fdBFbV/456464Gdd")
            .with_secret("ff1d9b80-b51d-4a06-bf67-6752fae1eb74");
        assert_eq!(opts.name.as_deref(), Some("My Slack Alert Webhook"));
        let body = serde_json::to_value(&opts).unwrap();
        assert_eq!(body["secret"], "ff1d9b80-b51d-4a06-bf67-6752fae1eb74");
        assert!(body.get("headers").is_none());
    }

    #[test]
    fn debug_hides_secret() {
        let opts = UpdateAlertWebhookOptions::new("hook-1").with_secret("s3cr3t");
        let printed = format!("{opts:?}");
        assert!(!printed.contains("s3cr3t"));
        assert!(printed.contains("hook-1"));
    }
}

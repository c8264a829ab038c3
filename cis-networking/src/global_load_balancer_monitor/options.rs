use std::collections::HashMap;

use serde::Serialize;

use super::types::MonitorType;

/// Options for `list_all_load_balancer_monitors`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListAllLoadBalancerMonitorsOptions {
    pub headers: HashMap<String, String>,
}

impl ListAllLoadBalancerMonitorsOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_headers(mut self, headers: HashMap<String, String>) -> Self {
        self.headers = headers;
        self
    }
}

/// Options for `create_load_balancer_monitor`. Serialized as the body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CreateLoadBalancerMonitorOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_codes: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub monitor_type: Option<MonitorType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retries: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub follow_redirects: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_insecure: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header: Option<HashMap<String, Vec<String>>>,
    #[serde(skip)]
    pub headers: HashMap<String, String>,
}

impl CreateLoadBalancerMonitorOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_expected_codes(mut self, expected_codes: impl Into<String>) -> Self {
        self.expected_codes = Some(expected_codes.into());
        self
    }

    #[must_use]
    pub fn with_type(mut self, monitor_type: MonitorType) -> Self {
        self.monitor_type = Some(monitor_type);
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_method(mut self, method: impl Into<String>) -> Self {
        self.method = Some(method.into());
        self
    }

    #[must_use]
    pub fn with_port(mut self, port: i64) -> Self {
        self.port = Some(port);
        self
    }

    #[must_use]
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: i64) -> Self {
        self.timeout = Some(timeout);
        self
    }

    #[must_use]
    pub fn with_retries(mut self, retries: i64) -> Self {
        self.retries = Some(retries);
        self
    }

    #[must_use]
    pub fn with_interval(mut self, interval: i64) -> Self {
        self.interval = Some(interval);
        self
    }

    #[must_use]
    pub fn with_follow_redirects(mut self, follow_redirects: bool) -> Self {
        self.follow_redirects = Some(follow_redirects);
        self
    }

    #[must_use]
    pub fn with_expected_body(mut self, expected_body: impl Into<String>) -> Self {
        self.expected_body = Some(expected_body.into());
        self
    }

    #[must_use]
    pub fn with_allow_insecure(mut self, allow_insecure: bool) -> Self {
        self.allow_insecure = Some(allow_insecure);
        self
    }

    #[must_use]
    pub fn with_header(mut self, header: HashMap<String, Vec<String>>) -> Self {
        self.header = Some(header);
        self
    }

    #[must_use]
    pub fn with_headers(mut self, headers: HashMap<String, String>) -> Self {
        self.headers = headers;
        self
    }
}

/// Options for `edit_load_balancer_monitor`. The identifier goes in the
/// path, everything else in the body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EditLoadBalancerMonitorOptions {
    /// Required.
    #[serde(skip)]
    pub monitor_identifier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_codes: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub monitor_type: Option<MonitorType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retries: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub follow_redirects: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_insecure: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header: Option<HashMap<String, Vec<String>>>,
    #[serde(skip)]
    pub headers: HashMap<String, String>,
}

impl EditLoadBalancerMonitorOptions {
    pub fn new(monitor_identifier: impl Into<String>) -> Self {
        Self {
            monitor_identifier: Some(monitor_identifier.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_monitor_identifier(mut self, monitor_identifier: impl Into<String>) -> Self {
        self.monitor_identifier = Some(monitor_identifier.into());
        self
    }

    #[must_use]
    pub fn with_expected_codes(mut self, expected_codes: impl Into<String>) -> Self {
        self.expected_codes = Some(expected_codes.into());
        self
    }

    #[must_use]
    pub fn with_type(mut self, monitor_type: MonitorType) -> Self {
        self.monitor_type = Some(monitor_type);
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_method(mut self, method: impl Into<String>) -> Self {
        self.method = Some(method.into());
        self
    }

    #[must_use]
    pub fn with_port(mut self, port: i64) -> Self {
        self.port = Some(port);
        self
    }

    #[must_use]
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: i64) -> Self {
        self.timeout = Some(timeout);
        self
    }

    #[must_use]
    pub fn with_retries(mut self, retries: i64) -> Self {
        self.retries = Some(retries);
        self
    }

    #[must_use]
    pub fn with_interval(mut self, interval: i64) -> Self {
        self.interval = Some(interval);
        self
    }

    #[must_use]
    pub fn with_follow_redirects(mut self, follow_redirects: bool) -> Self {
        self.follow_redirects = Some(follow_redirects);
        self
    }

    #[must_use]
    pub fn with_expected_body(mut self, expected_body: impl Into<String>) -> Self {
        self.expected_body = Some(expected_body.into());
        self
    }

    #[must_use]
    pub fn with_allow_insecure(mut self, allow_insecure: bool) -> Self {
        self.allow_insecure = Some(allow_insecure);
        self
    }

    #[must_use]
    pub fn with_header(mut self, header: HashMap<String, Vec<String>>) -> Self {
        self.header = Some(header);
        self
    }

    #[must_use]
    pub fn with_headers(mut self, headers: HashMap<String, String>) -> Self {
        self.headers = headers;
        self
    }
}

/// Options for `delete_load_balancer_monitor`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteLoadBalancerMonitorOptions {
    /// Required.
    pub monitor_identifier: Option<String>,
    pub headers: HashMap<String, String>,
}

impl DeleteLoadBalancerMonitorOptions {
    pub fn new(monitor_identifier: impl Into<String>) -> Self {
        Self {
            monitor_identifier: Some(monitor_identifier.into()),
            headers: HashMap::new(),
        }
    }

    #[must_use]
    pub fn with_monitor_identifier(mut self, monitor_identifier: impl Into<String>) -> Self {
        self.monitor_identifier = Some(monitor_identifier.into());
        self
    }

    #[must_use]
    pub fn with_headers(mut self, headers: HashMap<String, String>) -> Self {
        self.headers = headers;
        self
    }
}

/// Options for `get_load_balancer_monitor`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetLoadBalancerMonitorOptions {
    /// Required.
    pub monitor_identifier: Option<String>,
    pub headers: HashMap<String, String>,
}

impl GetLoadBalancerMonitorOptions {
    pub fn new(monitor_identifier: impl Into<String>) -> Self {
        Self {
            monitor_identifier: Some(monitor_identifier.into()),
            headers: HashMap::new(),
        }
    }

    #[must_use]
    pub fn with_monitor_identifier(mut self, monitor_identifier: impl Into<String>) -> Self {
        self.monitor_identifier = Some(monitor_identifier.into());
        self
    }

    #[must_use]
    pub fn with_headers(mut self, headers: HashMap<String, String>) -> Self {
        self.headers = headers;
        self
    }
}

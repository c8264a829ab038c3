use std::collections::HashMap;

use serde::Serialize;

use super::types::{UseragentRuleConfiguration, UseragentRuleMode};

/// Options for `list_all_zone_user_agent_rules`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListAllZoneUserAgentRulesOptions {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
    pub headers: HashMap<String, String>,
}

impl ListAllZoneUserAgentRulesOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_page(mut self, page: i64) -> Self {
        self.page = Some(page);
        self
    }

    #[must_use]
    pub fn with_per_page(mut self, per_page: i64) -> Self {
        self.per_page = Some(per_page);
        self
    }

    #[must_use]
    pub fn with_headers(mut self, headers: HashMap<String, String>) -> Self {
        self.headers = headers;
        self
    }
}

/// Options for `create_zone_user_agent_rule`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CreateZoneUserAgentRuleOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paused: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<UseragentRuleMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub configuration: Option<UseragentRuleConfiguration>,
    #[serde(skip)]
    pub headers: HashMap<String, String>,
}

impl CreateZoneUserAgentRuleOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_paused(mut self, paused: bool) -> Self {
        self.paused = Some(paused);
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_mode(mut self, mode: UseragentRuleMode) -> Self {
        self.mode = Some(mode);
        self
    }

    #[must_use]
    pub fn with_configuration(mut self, configuration: UseragentRuleConfiguration) -> Self {
        self.configuration = Some(configuration);
        self
    }

    #[must_use]
    pub fn with_headers(mut self, headers: HashMap<String, String>) -> Self {
        self.headers = headers;
        self
    }
}

/// Options for `delete_zone_user_agent_rule`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteZoneUserAgentRuleOptions {
    /// Required.
    pub useragent_rule_identifier: Option<String>,
    pub headers: HashMap<String, String>,
}

impl DeleteZoneUserAgentRuleOptions {
    pub fn new(useragent_rule_identifier: impl Into<String>) -> Self {
        Self {
            useragent_rule_identifier: Some(useragent_rule_identifier.into()),
            headers: HashMap::new(),
        }
    }

    #[must_use]
    pub fn with_useragent_rule_identifier(mut self, id: impl Into<String>) -> Self {
        self.useragent_rule_identifier = Some(id.into());
        self
    }

    #[must_use]
    pub fn with_headers(mut self, headers: HashMap<String, String>) -> Self {
        self.headers = headers;
        self
    }
}

/// Options for `get_user_agent_rule`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetUserAgentRuleOptions {
    /// Required.
    pub useragent_rule_identifier: Option<String>,
    pub headers: HashMap<String, String>,
}

impl GetUserAgentRuleOptions {
    pub fn new(useragent_rule_identifier: impl Into<String>) -> Self {
        Self {
            useragent_rule_identifier: Some(useragent_rule_identifier.into()),
            headers: HashMap::new(),
        }
    }

    #[must_use]
    pub fn with_useragent_rule_identifier(mut self, id: impl Into<String>) -> Self {
        self.useragent_rule_identifier = Some(id.into());
        self
    }

    #[must_use]
    pub fn with_headers(mut self, headers: HashMap<String, String>) -> Self {
        self.headers = headers;
        self
    }
}

/// Options for `update_user_agent_rule`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UpdateUserAgentRuleOptions {
    /// Required.
    #[serde(skip)]
    pub useragent_rule_identifier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paused: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<UseragentRuleMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub configuration: Option<UseragentRuleConfiguration>,
    #[serde(skip)]
    pub headers: HashMap<String, String>,
}

impl UpdateUserAgentRuleOptions {
    pub fn new(useragent_rule_identifier: impl Into<String>) -> Self {
        Self {
            useragent_rule_identifier: Some(useragent_rule_identifier.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_useragent_rule_identifier(mut self, id: impl Into<String>) -> Self {
        self.useragent_rule_identifier = Some(id.into());
        self
    }

    #[must_use]
    pub fn with_paused(mut self, paused: bool) -> Self {
        self.paused = Some(paused);
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_mode(mut self, mode: UseragentRuleMode) -> Self {
        self.mode = Some(mode);
        self
    }

    #[must_use]
    pub fn with_configuration(mut self, configuration: UseragentRuleConfiguration) -> Self {
        self.configuration = Some(configuration);
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
    fn create_body() {
        let opts = CreateZoneUserAgentRuleOptions::new()
            .with_paused(false)
            .with_mode(UseragentRuleMode::Block)
            .with_configuration(UseragentRuleConfiguration::new("BadBot/1.0"));
        assert_eq!(opts.mode, Some(UseragentRuleMode::Block));
        assert_eq!(
            serde_json::to_value(&opts).unwrap(),
            serde_json::json!({
                "paused": false,
                "mode": "block",
                "configuration": {"target": "ua", "value": "BadBot/1.0"}
            })
        );
    }

    #[test]
    fn update_identifier_setter() {
        let opts = UpdateUserAgentRuleOptions::default()
            .with_useragent_rule_identifier("rule-1")
            .with_description("updated");
        assert_eq!(opts.useragent_rule_identifier.as_deref(), Some("rule-1"));
        assert_eq!(
            serde_json::to_value(&opts).unwrap(),
            serde_json::json!({"description": "updated"})
        );
    }
}

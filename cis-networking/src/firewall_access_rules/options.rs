use std::collections::HashMap;
use std::fmt;

use serde::Serialize;

use super::types::{AccessRuleMode, AccessRuleTarget, AccountAccessRuleInputConfiguration};
use crate::common::{MatchMode, SortDirection};

/// Field an access rule listing is ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessRuleOrder {
    ConfigurationTarget,
    ConfigurationValue,
    Mode,
}

impl AccessRuleOrder {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ConfigurationTarget => "configuration.target",
            Self::ConfigurationValue => "configuration.value",
            Self::Mode => "mode",
        }
    }
}

impl fmt::Display for AccessRuleOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Options for `list_all_account_access_rules`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListAllAccountAccessRulesOptions {
    /// Substring search over rule notes.
    pub notes: Option<String>,
    pub mode: Option<AccessRuleMode>,
    pub configuration_target: Option<AccessRuleTarget>,
    pub configuration_value: Option<String>,
    pub page: Option<i64>,
    pub per_page: Option<i64>,
    pub order: Option<AccessRuleOrder>,
    pub direction: Option<SortDirection>,
    pub match_mode: Option<MatchMode>,
    pub headers: HashMap<String, String>,
}

impl ListAllAccountAccessRulesOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    #[must_use]
    pub fn with_mode(mut self, mode: AccessRuleMode) -> Self {
        self.mode = Some(mode);
        self
    }

    #[must_use]
    pub fn with_configuration_target(mut self, target: AccessRuleTarget) -> Self {
        self.configuration_target = Some(target);
        self
    }

    #[must_use]
    pub fn with_configuration_value(mut self, value: impl Into<String>) -> Self {
        self.configuration_value = Some(value.into());
        self
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
    pub fn with_order(mut self, order: AccessRuleOrder) -> Self {
        self.order = Some(order);
        self
    }

    #[must_use]
    pub fn with_direction(mut self, direction: SortDirection) -> Self {
        self.direction = Some(direction);
        self
    }

    #[must_use]
    pub fn with_match(mut self, match_mode: MatchMode) -> Self {
        self.match_mode = Some(match_mode);
        self
    }

    #[must_use]
    pub fn with_headers(mut self, headers: HashMap<String, String>) -> Self {
        self.headers = headers;
        self
    }
}

/// Options for `create_account_access_rule`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CreateAccountAccessRuleOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<AccessRuleMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub configuration: Option<AccountAccessRuleInputConfiguration>,
    #[serde(skip)]
    pub headers: HashMap<String, String>,
}

impl CreateAccountAccessRuleOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_mode(mut self, mode: AccessRuleMode) -> Self {
        self.mode = Some(mode);
        self
    }

    #[must_use]
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    #[must_use]
    pub fn with_configuration(mut self, configuration: AccountAccessRuleInputConfiguration) -> Self {
        self.configuration = Some(configuration);
        self
    }

    #[must_use]
    pub fn with_headers(mut self, headers: HashMap<String, String>) -> Self {
        self.headers = headers;
        self
    }
}

/// Options for `delete_account_access_rule`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteAccountAccessRuleOptions {
    /// Required.
    pub accessrule_identifier: Option<String>,
    pub headers: HashMap<String, String>,
}

impl DeleteAccountAccessRuleOptions {
    pub fn new(accessrule_identifier: impl Into<String>) -> Self {
        Self {
            accessrule_identifier: Some(accessrule_identifier.into()),
            headers: HashMap::new(),
        }
    }

    #[must_use]
    pub fn with_accessrule_identifier(mut self, id: impl Into<String>) -> Self {
        self.accessrule_identifier = Some(id.into());
        self
    }

    #[must_use]
    pub fn with_headers(mut self, headers: HashMap<String, String>) -> Self {
        self.headers = headers;
        self
    }
}

/// Options for `get_account_access_rule`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetAccountAccessRuleOptions {
    /// Required.
    pub accessrule_identifier: Option<String>,
    pub headers: HashMap<String, String>,
}

impl GetAccountAccessRuleOptions {
    pub fn new(accessrule_identifier: impl Into<String>) -> Self {
        Self {
            accessrule_identifier: Some(accessrule_identifier.into()),
            headers: HashMap::new(),
        }
    }

    #[must_use]
    pub fn with_accessrule_identifier(mut self, id: impl Into<String>) -> Self {
        self.accessrule_identifier = Some(id.into());
        self
    }

    #[must_use]
    pub fn with_headers(mut self, headers: HashMap<String, String>) -> Self {
        self.headers = headers;
        self
    }
}

/// Options for `update_account_access_rule`. Only mode and notes can change.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UpdateAccountAccessRuleOptions {
    /// Required.
    #[serde(skip)]
    pub accessrule_identifier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<AccessRuleMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip)]
    pub headers: HashMap<String, String>,
}

impl UpdateAccountAccessRuleOptions {
    pub fn new(accessrule_identifier: impl Into<String>) -> Self {
        Self {
            accessrule_identifier: Some(accessrule_identifier.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_accessrule_identifier(mut self, id: impl Into<String>) -> Self {
        self.accessrule_identifier = Some(id.into());
        self
    }

    #[must_use]
    pub fn with_mode(mut self, mode: AccessRuleMode) -> Self {
        self.mode = Some(mode);
        self
    }

    #[must_use]
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    #[must_use]
    pub fn with_headers(mut self, headers: HashMap<String, String>) -> Self {
        self.headers = headers;
        self
    }
}

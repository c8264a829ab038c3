use std::fmt;

use serde::{Deserialize, Serialize};

use crate::envelope::{Envelope, IdResult};

/// Action taken on matching requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UseragentRuleMode {
    Block,
    Challenge,
    JsChallenge,
}

impl UseragentRuleMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Block => "block",
            Self::Challenge => "challenge",
            Self::JsChallenge => "js_challenge",
        }
    }
}

impl fmt::Display for UseragentRuleMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a rule matches on. The target is always `ua`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UseragentRuleConfiguration {
    pub target: String,
    /// User-agent string to match.
    pub value: String,
}

impl UseragentRuleConfiguration {
    pub const TARGET_UA: &'static str = "ua";

    pub fn new(value: impl Into<String>) -> Self {
        Self {
            target: Self::TARGET_UA.to_string(),
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UseragentRuleObject {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paused: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub configuration: Option<UseragentRuleConfiguration>,
}

pub type UseragentRuleResp = Envelope<UseragentRuleObject>;

pub type ListUseragentRulesResp = Envelope<Vec<UseragentRuleObject>>;

pub type DeleteUseragentRuleResp = Envelope<IdResult>;

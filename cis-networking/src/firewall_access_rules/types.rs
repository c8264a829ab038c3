use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::envelope::{Envelope, IdResult};

/// Action applied to matching traffic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessRuleMode {
    Block,
    Challenge,
    Whitelist,
    JsChallenge,
}

impl AccessRuleMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Block => "block",
            Self::Challenge => "challenge",
            Self::Whitelist => "whitelist",
            Self::JsChallenge => "js_challenge",
        }
    }
}

impl fmt::Display for AccessRuleMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What an access rule matches on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessRuleTarget {
    Ip,
    IpRange,
    Asn,
    Country,
}

impl AccessRuleTarget {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ip => "ip",
            Self::IpRange => "ip_range",
            Self::Asn => "asn",
            Self::Country => "country",
        }
    }
}

impl fmt::Display for AccessRuleTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Match configuration sent when creating a rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountAccessRuleInputConfiguration {
    pub target: AccessRuleTarget,
    /// An IP, a CIDR range, an `AS<number>` or a two-letter country code,
    /// depending on `target`.
    pub value: String,
}

impl AccountAccessRuleInputConfiguration {
    pub fn new(target: AccessRuleTarget, value: impl Into<String>) -> Self {
        Self {
            target,
            value: value.into(),
        }
    }
}

/// Match configuration as reported by the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountAccessRuleObjectConfiguration {
    pub target: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountAccessRuleObjectScope {
    /// Always `account` for this API.
    #[serde(rename = "type")]
    pub scope_type: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountAccessRuleObject {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub allowed_modes: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<AccountAccessRuleObjectScope>,
    #[serde(default, with = "cis_networking_core::datetime", skip_serializing_if = "Option::is_none")]
    pub created_on: Option<DateTime<Utc>>,
    #[serde(default, with = "cis_networking_core::datetime", skip_serializing_if = "Option::is_none")]
    pub modified_on: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub configuration: Option<AccountAccessRuleObjectConfiguration>,
}

pub type AccountAccessRuleResp = Envelope<AccountAccessRuleObject>;

pub type ListAccountAccessRulesResp = Envelope<Vec<AccountAccessRuleObject>>;

pub type DeleteAccountAccessRuleResp = Envelope<IdResult>;

//! DNS Services permitted network types. Unlike the CIS families these
//! responses are not wrapped in an envelope.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kind of network allowed to resolve a zone. Only VPCs are supported.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PermittedNetworkType {
    #[default]
    Vpc,
}

impl fmt::Display for PermittedNetworkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Vpc => f.write_str("vpc"),
        }
    }
}

/// Lifecycle of a permitted network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PermittedNetworkState {
    Active,
    /// Reported after a delete has been accepted.
    RemovalInProgress,
    #[serde(other)]
    Unknown,
}

/// The VPC a permitted network refers to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermittedNetworkVpc {
    pub vpc_crn: String,
}

impl PermittedNetworkVpc {
    pub fn new(vpc_crn: impl Into<String>) -> Self {
        Self {
            vpc_crn: vpc_crn.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermittedNetwork {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, with = "cis_networking_core::datetime", skip_serializing_if = "Option::is_none")]
    pub created_on: Option<DateTime<Utc>>,
    #[serde(default, with = "cis_networking_core::datetime", skip_serializing_if = "Option::is_none")]
    pub modified_on: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permitted_network: Option<PermittedNetworkVpc>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub network_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<PermittedNetworkState>,
}

/// Link to a page of a paginated listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageLink {
    pub href: String,
}

/// One page of permitted networks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListPermittedNetworks {
    #[serde(default)]
    pub permitted_networks: Vec<PermittedNetwork>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first: Option<PageLink>,
    /// Absent on the last page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<PageLink>,
}

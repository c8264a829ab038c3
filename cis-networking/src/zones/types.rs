use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::envelope::{Envelope, IdResult};

/// A zone and its delegation details.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, with = "cis_networking_core::datetime", skip_serializing_if = "Option::is_none")]
    pub created_on: Option<DateTime<Utc>>,
    #[serde(default, with = "cis_networking_core::datetime", skip_serializing_if = "Option::is_none")]
    pub modified_on: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_registrar: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_dnshost: Option<String>,
    /// `pending` until the name servers are delegated, then `active`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paused: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub original_name_servers: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub name_servers: Vec<String>,
}

impl ZoneDetails {
    pub fn is_active(&self) -> bool {
        self.status.as_deref() == Some("active")
    }
}

pub type ZoneResp = Envelope<ZoneDetails>;

pub type ListZonesResp = Envelope<Vec<ZoneDetails>>;

pub type DeleteZoneResp = Envelope<IdResult>;

pub type ZoneActivationcheckResp = Envelope<IdResult>;

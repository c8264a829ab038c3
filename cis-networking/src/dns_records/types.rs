//! DNS record API types.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::envelope::{Envelope, IdResult};

/// Record types CIS accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DnsRecordType {
    A,
    Aaaa,
    Cname,
    Ns,
    Mx,
    Txt,
    Loc,
    Srv,
    Spf,
    Caa,
    Ptr,
}

impl DnsRecordType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::Aaaa => "AAAA",
            Self::Cname => "CNAME",
            Self::Ns => "NS",
            Self::Mx => "MX",
            Self::Txt => "TXT",
            Self::Loc => "LOC",
            Self::Srv => "SRV",
            Self::Spf => "SPF",
            Self::Caa => "CAA",
            Self::Ptr => "PTR",
        }
    }

    /// Record types whose value lives in `data` instead of `content`.
    pub fn uses_data(self) -> bool {
        matches!(self, Self::Loc | Self::Srv | Self::Caa)
    }
}

impl fmt::Display for DnsRecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A DNS record as returned by the API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DnsrecordObject {
    pub id: Option<String>,
    #[serde(default, with = "cis_networking_core::datetime", skip_serializing_if = "Option::is_none")]
    pub created_on: Option<DateTime<Utc>>,
    #[serde(default, with = "cis_networking_core::datetime", skip_serializing_if = "Option::is_none")]
    pub modified_on: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Record type. Kept as a string so types added server-side still decode.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub record_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zone_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zone_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proxiable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proxied: Option<bool>,
    /// Seconds; `1` means automatic.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ttl: Option<i64>,
    /// MX/SRV priority.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<i64>,
    /// Structured value of LOC, SRV and CAA records.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

/// One record.
pub type DnsrecordResp = Envelope<DnsrecordObject>;

/// A page of records.
pub type ListDnsrecordsResp = Envelope<Vec<DnsrecordObject>>;

/// Identifier of a deleted record.
pub type DeleteDnsrecordResp = Envelope<IdResult>;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn decodes_record() {
        let body = r#"{
            "success": true, "errors": [], "messages": [],
            "result": {
                "id": "f1aba936b94213e5b8dca0c0dbf1f9cc",
                "created_on": "2014-01-01T05:20:00.12345Z",
                "modified_on": "2014-01-01T05:20:00.12345Z",
                "name": "host-1.test-example.com",
                "type": "A",
                "content": "169.154.10.10",
                "zone_id": "023e105f4ecef8ad9ca31a8372d0c353",
                "zone_name": "test-example.com",
                "proxiable": true,
                "proxied": false,
                "ttl": 120
            }
        }"#;
        let resp: DnsrecordResp = serde_json::from_str(body).unwrap();
        let record = resp.result.unwrap();
        assert_eq!(record.record_type.as_deref(), Some("A"));
        assert_eq!(record.ttl, Some(120));
        assert!(record.created_on.is_some());
        assert!(record.data.is_none());
    }

    #[test]
    fn record_type_wire_names() {
        assert_eq!(serde_json::to_string(&DnsRecordType::Aaaa).unwrap(), r#""AAAA""#);
        assert_eq!(DnsRecordType::Cname.to_string(), "CNAME");
        assert!(DnsRecordType::Srv.uses_data());
        assert!(!DnsRecordType::Mx.uses_data());
    }
}

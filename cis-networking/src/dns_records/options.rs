//! Per-operation options for the DNS records client.

use std::collections::HashMap;
use std::fmt;

use serde::Serialize;
use serde_json::Value;

use super::types::DnsRecordType;
use crate::common::{MatchMode, SortDirection};

/// Field a record listing is ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DnsRecordOrder {
    Type,
    Name,
    Content,
    Ttl,
    Proxied,
}

impl DnsRecordOrder {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Type => "type",
            Self::Name => "name",
            Self::Content => "content",
            Self::Ttl => "ttl",
            Self::Proxied => "proxied",
        }
    }
}

impl fmt::Display for DnsRecordOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Options for `list_all_dns_records`. Every filter is optional.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListAllDnsRecordsOptions {
    pub record_type: Option<DnsRecordType>,
    pub name: Option<String>,
    pub content: Option<String>,
    /// Page number, from 1.
    pub page: Option<i64>,
    /// Records per page, 5 to 1000.
    pub per_page: Option<i64>,
    pub order: Option<DnsRecordOrder>,
    pub direction: Option<SortDirection>,
    /// Whether every filter must match (`all`) or one suffices (`any`).
    pub match_mode: Option<MatchMode>,
    pub headers: HashMap<String, String>,
}

impl ListAllDnsRecordsOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_type(mut self, record_type: DnsRecordType) -> Self {
        self.record_type = Some(record_type);
        self
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
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
    pub fn with_order(mut self, order: DnsRecordOrder) -> Self {
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

/// Options for `create_dns_record`. Serialized as the request body.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CreateDnsRecordOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub record_type: Option<DnsRecordType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ttl: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(skip)]
    pub headers: HashMap<String, String>,
}

impl CreateDnsRecordOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_type(mut self, record_type: DnsRecordType) -> Self {
        self.record_type = Some(record_type);
        self
    }

    #[must_use]
    pub fn with_ttl(mut self, ttl: i64) -> Self {
        self.ttl = Some(ttl);
        self
    }

    #[must_use]
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    #[must_use]
    pub fn with_priority(mut self, priority: i64) -> Self {
        self.priority = Some(priority);
        self
    }

    #[must_use]
    pub fn with_data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }

    #[must_use]
    pub fn with_headers(mut self, headers: HashMap<String, String>) -> Self {
        self.headers = headers;
        self
    }
}

/// Options for `delete_dns_record`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteDnsRecordOptions {
    /// Required.
    pub dnsrecord_identifier: Option<String>,
    pub headers: HashMap<String, String>,
}

impl DeleteDnsRecordOptions {
    pub fn new(dnsrecord_identifier: impl Into<String>) -> Self {
        Self {
            dnsrecord_identifier: Some(dnsrecord_identifier.into()),
            headers: HashMap::new(),
        }
    }

    #[must_use]
    pub fn with_dnsrecord_identifier(mut self, dnsrecord_identifier: impl Into<String>) -> Self {
        self.dnsrecord_identifier = Some(dnsrecord_identifier.into());
        self
    }

    #[must_use]
    pub fn with_headers(mut self, headers: HashMap<String, String>) -> Self {
        self.headers = headers;
        self
    }
}

/// Options for `get_dns_record`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetDnsRecordOptions {
    /// Required.
    pub dnsrecord_identifier: Option<String>,
    pub headers: HashMap<String, String>,
}

impl GetDnsRecordOptions {
    pub fn new(dnsrecord_identifier: impl Into<String>) -> Self {
        Self {
            dnsrecord_identifier: Some(dnsrecord_identifier.into()),
            headers: HashMap::new(),
        }
    }

    #[must_use]
    pub fn with_dnsrecord_identifier(mut self, dnsrecord_identifier: impl Into<String>) -> Self {
        self.dnsrecord_identifier = Some(dnsrecord_identifier.into());
        self
    }

    #[must_use]
    pub fn with_headers(mut self, headers: HashMap<String, String>) -> Self {
        self.headers = headers;
        self
    }
}

/// Options for `update_dns_record`. Everything but the identifier and the
/// headers is sent as the request body.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdateDnsRecordOptions {
    /// Required.
    #[serde(skip)]
    pub dnsrecord_identifier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub record_type: Option<DnsRecordType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ttl: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proxied: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(skip)]
    pub headers: HashMap<String, String>,
}

impl UpdateDnsRecordOptions {
    pub fn new(dnsrecord_identifier: impl Into<String>) -> Self {
        Self {
            dnsrecord_identifier: Some(dnsrecord_identifier.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_dnsrecord_identifier(mut self, dnsrecord_identifier: impl Into<String>) -> Self {
        self.dnsrecord_identifier = Some(dnsrecord_identifier.into());
        self
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_type(mut self, record_type: DnsRecordType) -> Self {
        self.record_type = Some(record_type);
        self
    }

    #[must_use]
    pub fn with_ttl(mut self, ttl: i64) -> Self {
        self.ttl = Some(ttl);
        self
    }

    #[must_use]
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    #[must_use]
    pub fn with_priority(mut self, priority: i64) -> Self {
        self.priority = Some(priority);
        self
    }

    #[must_use]
    pub fn with_proxied(mut self, proxied: bool) -> Self {
        self.proxied = Some(proxied);
        self
    }

    #[must_use]
    pub fn with_data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }

    #[must_use]
    pub fn with_headers(mut self, headers: HashMap<String, String>) -> Self {
        self.headers = headers;
        self
    }
}

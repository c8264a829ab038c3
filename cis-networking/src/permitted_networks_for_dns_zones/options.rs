use std::collections::HashMap;

use serde::Serialize;

use super::types::{PermittedNetworkType, PermittedNetworkVpc};

/// Options for `list_permitted_networks`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListPermittedNetworksOptions {
    /// Required. DNS Services instance.
    pub instance_id: Option<String>,
    /// Required. Zone within the instance.
    pub dnszone_id: Option<String>,
    /// Sent as `X-Correlation-ID`.
    pub x_correlation_id: Option<String>,
    /// Index of the first item, from 0.
    pub offset: Option<i64>,
    /// Page size.
    pub limit: Option<i64>,
    pub headers: HashMap<String, String>,
}

impl ListPermittedNetworksOptions {
    pub fn new(instance_id: impl Into<String>, dnszone_id: impl Into<String>) -> Self {
        Self {
            instance_id: Some(instance_id.into()),
            dnszone_id: Some(dnszone_id.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_instance_id(mut self, instance_id: impl Into<String>) -> Self {
        self.instance_id = Some(instance_id.into());
        self
    }

    #[must_use]
    pub fn with_dnszone_id(mut self, dnszone_id: impl Into<String>) -> Self {
        self.dnszone_id = Some(dnszone_id.into());
        self
    }

    #[must_use]
    pub fn with_x_correlation_id(mut self, x_correlation_id: impl Into<String>) -> Self {
        self.x_correlation_id = Some(x_correlation_id.into());
        self
    }

    #[must_use]
    pub fn with_offset(mut self, offset: i64) -> Self {
        self.offset = Some(offset);
        self
    }

    #[must_use]
    pub fn with_limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }

    #[must_use]
    pub fn with_headers(mut self, headers: HashMap<String, String>) -> Self {
        self.headers = headers;
        self
    }
}

/// Options for `create_permitted_network`. `type` and `permitted_network`
/// form the body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CreatePermittedNetworkOptions {
    /// Required.
    #[serde(skip)]
    pub instance_id: Option<String>,
    /// Required.
    #[serde(skip)]
    pub dnszone_id: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub network_type: Option<PermittedNetworkType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permitted_network: Option<PermittedNetworkVpc>,
    #[serde(skip)]
    pub x_correlation_id: Option<String>,
    #[serde(skip)]
    pub headers: HashMap<String, String>,
}

impl CreatePermittedNetworkOptions {
    pub fn new(instance_id: impl Into<String>, dnszone_id: impl Into<String>) -> Self {
        Self {
            instance_id: Some(instance_id.into()),
            dnszone_id: Some(dnszone_id.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_instance_id(mut self, instance_id: impl Into<String>) -> Self {
        self.instance_id = Some(instance_id.into());
        self
    }

    #[must_use]
    pub fn with_dnszone_id(mut self, dnszone_id: impl Into<String>) -> Self {
        self.dnszone_id = Some(dnszone_id.into());
        self
    }

    #[must_use]
    pub fn with_type(mut self, network_type: PermittedNetworkType) -> Self {
        self.network_type = Some(network_type);
        self
    }

    #[must_use]
    pub fn with_permitted_network(mut self, permitted_network: PermittedNetworkVpc) -> Self {
        self.permitted_network = Some(permitted_network);
        self
    }

    #[must_use]
    pub fn with_x_correlation_id(mut self, x_correlation_id: impl Into<String>) -> Self {
        self.x_correlation_id = Some(x_correlation_id.into());
        self
    }

    #[must_use]
    pub fn with_headers(mut self, headers: HashMap<String, String>) -> Self {
        self.headers = headers;
        self
    }
}

/// Options for `delete_permitted_network`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeletePermittedNetworkOptions {
    /// Required.
    pub instance_id: Option<String>,
    /// Required.
    pub dnszone_id: Option<String>,
    /// Required.
    pub permitted_network_id: Option<String>,
    pub x_correlation_id: Option<String>,
    pub headers: HashMap<String, String>,
}

impl DeletePermittedNetworkOptions {
    pub fn new(
        instance_id: impl Into<String>,
        dnszone_id: impl Into<String>,
        permitted_network_id: impl Into<String>,
    ) -> Self {
        Self {
            instance_id: Some(instance_id.into()),
            dnszone_id: Some(dnszone_id.into()),
            permitted_network_id: Some(permitted_network_id.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_instance_id(mut self, instance_id: impl Into<String>) -> Self {
        self.instance_id = Some(instance_id.into());
        self
    }

    #[must_use]
    pub fn with_dnszone_id(mut self, dnszone_id: impl Into<String>) -> Self {
        self.dnszone_id = Some(dnszone_id.into());
        self
    }

    #[must_use]
    pub fn with_permitted_network_id(mut self, permitted_network_id: impl Into<String>) -> Self {
        self.permitted_network_id = Some(permitted_network_id.into());
        self
    }

    #[must_use]
    pub fn with_x_correlation_id(mut self, x_correlation_id: impl Into<String>) -> Self {
        self.x_correlation_id = Some(x_correlation_id.into());
        self
    }

    #[must_use]
    pub fn with_headers(mut self, headers: HashMap<String, String>) -> Self {
        self.headers = headers;
        self
    }
}

/// Options for `get_permitted_network`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetPermittedNetworkOptions {
    /// Required.
    pub instance_id: Option<String>,
    /// Required.
    pub dnszone_id: Option<String>,
    /// Required.
    pub permitted_network_id: Option<String>,
    pub x_correlation_id: Option<String>,
    pub headers: HashMap<String, String>,
}

impl GetPermittedNetworkOptions {
    pub fn new(
        instance_id: impl Into<String>,
        dnszone_id: impl Into<String>,
        permitted_network_id: impl Into<String>,
    ) -> Self {
        Self {
            instance_id: Some(instance_id.into()),
            dnszone_id: Some(dnszone_id.into()),
            permitted_network_id: Some(permitted_network_id.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_instance_id(mut self, instance_id: impl Into<String>) -> Self {
        self.instance_id = Some(instance_id.into());
        self
    }

    #[must_use]
    pub fn with_dnszone_id(mut self, dnszone_id: impl Into<String>) -> Self {
        self.dnszone_id = Some(dnszone_id.into());
        self
    }

    #[must_use]
    pub fn with_permitted_network_id(mut self, permitted_network_id: impl Into<String>) -> Self {
        self.permitted_network_id = Some(permitted_network_id.into());
        self
    }

    #[must_use]
    pub fn with_x_correlation_id(mut self, x_correlation_id: impl Into<String>) -> Self {
        self.x_correlation_id = Some(x_correlation_id.into());
        self
    }

    #[must_use]
    pub fn with_headers(mut self, headers: HashMap<String, String>) -> Self {
        self.headers = headers;
        self
    }
}

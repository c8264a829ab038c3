use std::collections::HashMap;

use serde::Serialize;

/// Options for `list_zones`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListZonesOptions {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
    pub headers: HashMap<String, String>,
}

impl ListZonesOptions {
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

/// Options for `create_zone`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CreateZoneOptions {
    /// Domain name of the new zone.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip)]
    pub headers: HashMap<String, String>,
}

impl CreateZoneOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_headers(mut self, headers: HashMap<String, String>) -> Self {
        self.headers = headers;
        self
    }
}

/// Options for `delete_zone`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteZoneOptions {
    /// Required.
    pub zone_identifier: Option<String>,
    pub headers: HashMap<String, String>,
}

impl DeleteZoneOptions {
    pub fn new(zone_identifier: impl Into<String>) -> Self {
        Self {
            zone_identifier: Some(zone_identifier.into()),
            headers: HashMap::new(),
        }
    }

    #[must_use]
    pub fn with_zone_identifier(mut self, zone_identifier: impl Into<String>) -> Self {
        self.zone_identifier = Some(zone_identifier.into());
        self
    }

    #[must_use]
    pub fn with_headers(mut self, headers: HashMap<String, String>) -> Self {
        self.headers = headers;
        self
    }
}

/// Options for `get_zone`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetZoneOptions {
    /// Required.
    pub zone_identifier: Option<String>,
    pub headers: HashMap<String, String>,
}

impl GetZoneOptions {
    pub fn new(zone_identifier: impl Into<String>) -> Self {
        Self {
            zone_identifier: Some(zone_identifier.into()),
            headers: HashMap::new(),
        }
    }

    #[must_use]
    pub fn with_zone_identifier(mut self, zone_identifier: impl Into<String>) -> Self {
        self.zone_identifier = Some(zone_identifier.into());
        self
    }

    #[must_use]
    pub fn with_headers(mut self, headers: HashMap<String, String>) -> Self {
        self.headers = headers;
        self
    }
}

/// Options for `update_zone`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UpdateZoneOptions {
    /// Required.
    #[serde(skip)]
    pub zone_identifier: Option<String>,
    /// Pause or resume the zone.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paused: Option<bool>,
    #[serde(skip)]
    pub headers: HashMap<String, String>,
}

impl UpdateZoneOptions {
    pub fn new(zone_identifier: impl Into<String>) -> Self {
        Self {
            zone_identifier: Some(zone_identifier.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_zone_identifier(mut self, zone_identifier: impl Into<String>) -> Self {
        self.zone_identifier = Some(zone_identifier.into());
        self
    }

    #[must_use]
    pub fn with_paused(mut self, paused: bool) -> Self {
        self.paused = Some(paused);
        self
    }

    #[must_use]
    pub fn with_headers(mut self, headers: HashMap<String, String>) -> Self {
        self.headers = headers;
        self
    }
}

/// Options for `zone_activation_check`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ZoneActivationCheckOptions {
    /// Required.
    pub zone_identifier: Option<String>,
    pub headers: HashMap<String, String>,
}

impl ZoneActivationCheckOptions {
    pub fn new(zone_identifier: impl Into<String>) -> Self {
        Self {
            zone_identifier: Some(zone_identifier.into()),
            headers: HashMap::new(),
        }
    }

    #[must_use]
    pub fn with_zone_identifier(mut self, zone_identifier: impl Into<String>) -> Self {
        self.zone_identifier = Some(zone_identifier.into());
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
    fn setters() {
        let list = ListZonesOptions::new().with_page(3).with_per_page(20);
        assert_eq!((list.page, list.per_page), (Some(3), Some(20)));

        let create = CreateZoneOptions::new().with_name("test-example.com");
        assert_eq!(create.name.as_deref(), Some("test-example.com"));

        let update = UpdateZoneOptions::default()
            .with_zone_identifier("z-1")
            .with_paused(true);
        assert_eq!(update.zone_identifier.as_deref(), Some("z-1"));
        assert_eq!(update.paused, Some(true));
    }

    #[test]
    fn update_body_is_paused_only() {
        let update = UpdateZoneOptions::new("z-1").with_paused(false);
        assert_eq!(
            serde_json::to_value(&update).unwrap(),
            serde_json::json!({"paused": false})
        );
    }
}

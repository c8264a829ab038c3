//! Serde helpers for the ISO-8601 timestamps CIS returns.
//!
//! Use as `#[serde(default, with = "cis_networking_core::datetime")]` on an
//! `Option<DateTime<Utc>>` field:
//! - serialize: `DateTime<Utc>` -> RFC3339 string
//! - deserialize: RFC3339 string, or a zone-less `YYYY-MM-DDTHH:MM:SS[.fff]`
//!   string interpreted as UTC. Empty strings and `null` map to `None`.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serializer};

/// Serialize `Option<DateTime<Utc>>` as an optional RFC3339 string.
#[allow(clippy::ref_option)]
pub fn serialize<S>(dt: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match dt {
        Some(dt) => serializer.serialize_some(&dt.to_rfc3339()),
        None => serializer.serialize_none(),
    }
}

/// Deserialize an optional ISO-8601 timestamp.
pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    match Option::<String>::deserialize(deserializer)? {
        None => Ok(None),
        Some(s) if s.is_empty() => Ok(None),
        Some(s) => parse_timestamp(&s)
            .map(Some)
            .ok_or_else(|| Error::custom(format!("Invalid ISO-8601 timestamp: {s}"))),
    }
}

fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use chrono::{Datelike, Timelike};
    use serde::{Deserialize, Serialize};

    #[derive(Serialize, Deserialize)]
    struct Stamped {
        #[serde(default, with = "super")]
        created_on: Option<chrono::DateTime<chrono::Utc>>,
    }

    #[test]
    fn parses_rfc3339() {
        let s: Stamped = serde_json::from_str(r#"{"created_on":"2014-01-01T05:20:00.12345Z"}"#)
            .unwrap_or_else(|e| panic!("{e}"));
        let dt = s.created_on.unwrap_or_default();
        assert_eq!(dt.year(), 2014);
        assert_eq!(dt.hour(), 5);
    }

    #[test]
    fn parses_zoneless_as_utc() {
        let s: Stamped = serde_json::from_str(r#"{"created_on":"2020-06-30T10:01:02"}"#)
            .unwrap_or_else(|e| panic!("{e}"));
        assert_eq!(s.created_on.map(|d| d.minute()), Some(1));
    }

    #[test]
    fn missing_null_and_empty_are_none() {
        for body in ["{}", r#"{"created_on":null}"#, r#"{"created_on":""}"#] {
            let s: Stamped = serde_json::from_str(body).unwrap_or_else(|e| panic!("{e}"));
            assert!(s.created_on.is_none(), "{body}");
        }
    }

    #[test]
    fn rejects_garbage() {
        assert!(serde_json::from_str::<Stamped>(r#"{"created_on":"yesterday"}"#).is_err());
    }

    #[test]
    fn serializes_rfc3339() {
        let s: Stamped = serde_json::from_str(r#"{"created_on":"2021-03-04T05:06:07Z"}"#)
            .unwrap_or_else(|e| panic!("{e}"));
        let json = serde_json::to_string(&s).unwrap_or_default();
        assert_eq!(json, r#"{"created_on":"2021-03-04T05:06:07+00:00"}"#);
    }
}

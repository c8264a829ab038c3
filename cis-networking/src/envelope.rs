//! The response envelope every CIS endpoint wraps its result in.

use serde::{Deserialize, Serialize};

/// `{success, errors, messages, result, result_info}`.
///
/// `errors` and `messages` are lists of string lists. `result` is an object
/// or an array depending on the operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    /// Operation success flag.
    pub success: bool,
    /// Error details, empty on success.
    #[serde(default)]
    pub errors: Vec<Vec<String>>,
    /// Informational messages.
    #[serde(default)]
    pub messages: Vec<Vec<String>>,
    /// Operation result. Missing and `null` both decode to `None`.
    pub result: Option<T>,
    /// Pagination details, present on list operations.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result_info: Option<ResultInfo>,
}

/// Pagination details of a list response.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultInfo {
    /// Current page (1-indexed).
    pub page: i64,
    /// Items per page.
    pub per_page: i64,
    /// Items on this page.
    pub count: i64,
    /// Items across all pages.
    pub total_count: i64,
}

impl ResultInfo {
    /// Whether pages follow this one.
    pub fn has_more(&self) -> bool {
        self.page.saturating_mul(self.per_page) < self.total_count
    }
}

/// Result of operations that only echo the affected identifier
/// (deletes, webhook writes, zone activation checks).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdResult {
    /// Identifier.
    pub id: String,
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn decodes_list_envelope() {
        let body = r#"{
            "success": true,
            "errors": [],
            "messages": [["listed"]],
            "result": [{"id": "a"}, {"id": "b"}],
            "result_info": {"page": 1, "per_page": 2, "count": 2, "total_count": 5}
        }"#;
        let env: Envelope<Vec<IdResult>> =
            serde_json::from_str(body).unwrap_or_else(|e| panic!("{e}"));
        assert!(env.success);
        assert_eq!(env.messages, vec![vec!["listed".to_string()]]);
        assert_eq!(env.result.map(|r| r.len()), Some(2));
        let info = env.result_info.unwrap_or_default();
        assert_eq!(info.total_count, 5);
        assert!(info.has_more());
    }

    #[test]
    fn decodes_error_strings() {
        let body = r#"{"success":false,"errors":[["1003","Invalid or missing zone id."]],"messages":[],"result":null}"#;
        let env: Envelope<IdResult> = serde_json::from_str(body).unwrap_or_else(|e| panic!("{e}"));
        assert!(!env.success);
        assert_eq!(env.errors[0][1], "Invalid or missing zone id.");
        assert!(env.result.is_none());
        assert!(env.result_info.is_none());
    }

    #[test]
    fn result_may_be_absent_for_non_default_payloads() {
        let body = r#"{"success":true,"errors":[],"messages":[]}"#;
        let env: Envelope<IdResult> = serde_json::from_str(body).unwrap_or_else(|e| panic!("{e}"));
        assert!(env.success);
        assert!(env.result.is_none());

        let body = r#"{"success":true,"result":{"id":"w9"}}"#;
        let env: Envelope<IdResult> = serde_json::from_str(body).unwrap_or_else(|e| panic!("{e}"));
        assert_eq!(env.result.map(|r| r.id).as_deref(), Some("w9"));
    }

    #[test]
    fn last_page_has_no_more() {
        let info = ResultInfo {
            page: 3,
            per_page: 20,
            count: 5,
            total_count: 45,
        };
        assert!(!info.has_more());
    }
}

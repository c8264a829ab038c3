//! Utility modules.

/// ISO-8601 timestamp serde helpers shared by resource models.
pub mod datetime;

/// Log sanitization utilities to prevent credential exposure.
pub mod log_sanitizer;

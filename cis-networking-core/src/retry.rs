//! Retry policy with exponential backoff.

use std::time::Duration;

use crate::error::SdkError;

/// Retries used when `enable_retries` is called with `max_retries == 0`.
pub const DEFAULT_MAX_RETRIES: u32 = 4;
/// Backoff cap used when `enable_retries` is called with a zero interval.
pub const DEFAULT_MAX_INTERVAL: Duration = Duration::from_secs(30);

/// First backoff step; doubles on each attempt.
const BASE_DELAY_MS: u64 = 100;

/// How failed attempts are retried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Retries after the first attempt.
    pub max_retries: u32,
    /// Upper bound for any single backoff sleep.
    pub max_interval: Duration,
}

impl RetryPolicy {
    /// Zero values select the defaults.
    pub fn new(max_retries: u32, max_interval: Duration) -> Self {
        Self {
            max_retries: if max_retries == 0 {
                DEFAULT_MAX_RETRIES
            } else {
                max_retries
            },
            max_interval: if max_interval.is_zero() {
                DEFAULT_MAX_INTERVAL
            } else {
                max_interval
            },
        }
    }

    /// Delay before retry number `attempt + 1`.
    ///
    /// A numeric `Retry-After` header on the failed response wins over the
    /// backoff schedule; both are capped at `max_interval`.
    pub fn delay_for(&self, error: &SdkError, attempt: u32) -> Duration {
        let retry_after = error
            .response()
            .and_then(|r| r.headers.get("retry-after"))
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.trim().parse::<u64>().ok())
            .map(Duration::from_secs);

        retry_after
            .unwrap_or_else(|| backoff_delay(attempt))
            .min(self.max_interval)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_RETRIES, DEFAULT_MAX_INTERVAL)
    }
}

/// Exponential backoff: 100ms, 200ms, 400ms, 800ms, 1.6s, ...
fn backoff_delay(attempt: u32) -> Duration {
    let capped_attempt = attempt.min(20); // Prevent 2^attempt from overflowing
    Duration::from_millis(BASE_DELAY_MS.saturating_mul(1_u64 << capped_attempt))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::response::RawResponse;
    use reqwest::header::{HeaderMap, HeaderValue};

    fn http_error(status_code: u16, retry_after: Option<&'static str>) -> SdkError {
        let mut headers = HeaderMap::new();
        if let Some(v) = retry_after {
            headers.insert("retry-after", HeaderValue::from_static(v));
        }
        SdkError::Http {
            status_code,
            message: String::new(),
            response: Box::new(RawResponse {
                status_code,
                headers,
                body: String::new(),
            }),
        }
    }

    #[test]
    fn zero_values_select_defaults() {
        let p = RetryPolicy::new(0, Duration::ZERO);
        assert_eq!(p.max_retries, DEFAULT_MAX_RETRIES);
        assert_eq!(p.max_interval, DEFAULT_MAX_INTERVAL);
    }

    #[test]
    fn backoff_doubles() {
        assert_eq!(backoff_delay(0), Duration::from_millis(100));
        assert_eq!(backoff_delay(1), Duration::from_millis(200));
        assert_eq!(backoff_delay(3), Duration::from_millis(800));
    }

    #[test]
    fn backoff_capped_by_max_interval() {
        let p = RetryPolicy::new(10, Duration::from_millis(500));
        let e = SdkError::Request("refused".into());
        assert_eq!(p.delay_for(&e, 0), Duration::from_millis(100));
        assert_eq!(p.delay_for(&e, 7), Duration::from_millis(500));
    }

    #[test]
    fn retry_after_header_wins() {
        let p = RetryPolicy::new(3, Duration::from_secs(30));
        assert_eq!(
            p.delay_for(&http_error(429, Some("2")), 0),
            Duration::from_secs(2)
        );
    }

    #[test]
    fn retry_after_capped() {
        let p = RetryPolicy::new(3, Duration::from_secs(5));
        assert_eq!(
            p.delay_for(&http_error(503, Some("120")), 0),
            Duration::from_secs(5)
        );
    }
}

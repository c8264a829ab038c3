//! Keeps credentials out of logs.
//!
//! IAM API keys and bearer tokens travel in request headers, and response
//! bodies can be large. Anything logged at debug/trace goes through here.

/// Byte budget for a logged body.
const BODY_LOG_LIMIT: usize = 256;

const REDACTED: &str = "[REDACTED]";

/// Header names (lowercase) masked in trace output.
const MASKED_HEADERS: &[&str] = &[
    "authorization",
    "x-auth-key",
    "x-api-key",
    "cookie",
    "set-cookie",
];

/// Shorten a body to the log budget, cut on a char boundary.
pub fn truncate_for_log(body: &str) -> String {
    if body.len() <= BODY_LOG_LIMIT {
        return body.to_owned();
    }
    let cut = body
        .char_indices()
        .map(|(idx, _)| idx)
        .take_while(|&idx| idx <= BODY_LOG_LIMIT)
        .last()
        .unwrap_or(0);
    format!("{}... ({} of {} bytes shown)", &body[..cut], cut, body.len())
}

/// Header value as it may appear in a log line.
///
/// For masked headers the auth scheme (`Bearer`, `Basic`) is kept so the
/// line still shows which authenticator ran.
pub fn header_for_log(name: &str, value: &str) -> String {
    let masked = MASKED_HEADERS
        .iter()
        .any(|candidate| candidate.eq_ignore_ascii_case(name));
    if !masked {
        return value.to_owned();
    }
    match value.split_once(' ') {
        Some((scheme, _)) => format!("{scheme} {REDACTED}"),
        None => REDACTED.to_owned(),
    }
}

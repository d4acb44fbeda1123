//! Display-only text transforms.

use chrono::{DateTime, NaiveDateTime, Utc};

/// Output format for upload timestamps.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";

/// First `max_chars` characters of `text` followed by `...`.
///
/// Counts Unicode scalar values so a multi-byte character is never split.
/// The ellipsis is always appended, matching the comparison table layout.
pub fn excerpt(text: &str, max_chars: usize) -> String {
    let head: String = text.chars().take(max_chars).collect();
    format!("{}...", head)
}

/// Render a backend timestamp for humans.
///
/// Accepts RFC 3339 and the naive ISO form the backend emits (assumed UTC).
/// Anything else is returned unchanged.
pub fn format_timestamp(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return String::new();
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return dt.with_timezone(&Utc).format(TIMESTAMP_FORMAT).to_string();
    }

    for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, pattern) {
            return naive.and_utc().format(TIMESTAMP_FORMAT).to_string();
        }
    }

    raw.to_string()
}

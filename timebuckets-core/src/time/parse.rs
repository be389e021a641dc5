use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Utc};
use serde::Deserialize;

use crate::BucketsError;

/// A value that may denote an instant.
///
/// Deserializes untagged, so JSON bounds may be RFC 3339 strings, other date
/// strings, or epoch milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum TimeLike {
    /// An already-parsed instant.
    Instant(DateTime<Utc>),
    /// Milliseconds since the Unix epoch.
    EpochMillis(i64),
    /// Free-form text, parsed on demand.
    Text(String),
}

impl From<DateTime<Utc>> for TimeLike {
    fn from(v: DateTime<Utc>) -> Self {
        Self::Instant(v)
    }
}

impl From<DateTime<FixedOffset>> for TimeLike {
    fn from(v: DateTime<FixedOffset>) -> Self {
        Self::Instant(v.with_timezone(&Utc))
    }
}

impl From<NaiveDateTime> for TimeLike {
    fn from(v: NaiveDateTime) -> Self {
        Self::Instant(v.and_utc())
    }
}

impl From<i64> for TimeLike {
    fn from(v: i64) -> Self {
        Self::EpochMillis(v)
    }
}

impl From<&str> for TimeLike {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for TimeLike {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Resolve a time-like value to a UTC instant.
///
/// Accepted text: RFC 3339, `YYYY-MM-DDTHH:MM:SS[.fff]` and
/// `YYYY-MM-DD HH:MM:SS[.fff]` (read as UTC), `YYYY-MM-DD` (midnight UTC), and
/// all-digit epoch milliseconds.
///
/// # Errors
/// Returns `InvalidBounds` describing the value that could not be parsed.
pub fn parse_time_like(value: &TimeLike) -> Result<DateTime<Utc>, BucketsError> {
    match value {
        TimeLike::Instant(t) => Ok(*t),
        TimeLike::EpochMillis(ms) => from_millis(*ms),
        TimeLike::Text(s) => parse_instant_str(s),
    }
}

fn from_millis(ms: i64) -> Result<DateTime<Utc>, BucketsError> {
    DateTime::from_timestamp_millis(ms)
        .ok_or_else(|| BucketsError::invalid_bounds(format!("epoch millis {ms} out of range")))
}

fn parse_instant_str(raw: &str) -> Result<DateTime<Utc>, BucketsError> {
    let s = raw.trim();
    if s.is_empty() {
        return Err(BucketsError::invalid_bounds("empty time string"));
    }

    let digits = s.strip_prefix('-').unwrap_or(s);
    if digits.chars().all(|c| c.is_ascii_digit()) {
        let ms = s
            .parse::<i64>()
            .map_err(|e| BucketsError::invalid_bounds(format!("{raw:?}: {e}")))?;
        return from_millis(ms);
    }

    if let Ok(t) = DateTime::parse_from_rfc3339(s) {
        return Ok(t.with_timezone(&Utc));
    }
    for fmt in NAIVE_FORMATS {
        if let Ok(t) = NaiveDateTime::parse_from_str(s, fmt) {
            return Ok(t.and_utc());
        }
    }
    if let Some(t) = NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
    {
        return Ok(t.and_utc());
    }

    Err(BucketsError::invalid_bounds(format!(
        "unrecognized time {raw:?}"
    )))
}

//! Persisted form of a bucket calculator: `{ lb?, ub?, i? }`.

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

use crate::BucketsError;

/// Interval as persisted: `"auto"`, a millisecond magnitude, or an expression
/// (`"3h"`, `"hour"`) written by hand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawInterval", into = "RawInterval")]
pub enum PersistedInterval {
    /// Choose the interval from the bar target.
    Auto,
    /// Fixed interval in milliseconds.
    Millis(i64),
    /// Unresolved interval expression; validated when the state is applied.
    Expression(String),
}

impl PersistedInterval {
    /// Persist a concrete duration as its millisecond magnitude.
    #[must_use]
    pub fn from_duration(d: TimeDelta) -> Self {
        Self::Millis(d.num_milliseconds())
    }
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum RawInterval {
    Number(i64),
    Text(String),
}

impl TryFrom<RawInterval> for PersistedInterval {
    type Error = BucketsError;

    fn try_from(raw: RawInterval) -> Result<Self, Self::Error> {
        match raw {
            RawInterval::Number(ms) if ms > 0 => Ok(Self::Millis(ms)),
            RawInterval::Number(ms) => Err(BucketsError::invalid_interval(format!(
                "persisted interval must be positive, got {ms}"
            ))),
            RawInterval::Text(s) if s.trim().eq_ignore_ascii_case("auto") => Ok(Self::Auto),
            RawInterval::Text(s) => Ok(Self::Expression(s)),
        }
    }
}

impl From<PersistedInterval> for RawInterval {
    fn from(p: PersistedInterval) -> Self {
        match p {
            PersistedInterval::Auto => Self::Text("auto".to_string()),
            PersistedInterval::Millis(ms) => Self::Number(ms),
            PersistedInterval::Expression(s) => Self::Text(s),
        }
    }
}

/// Plain, owned snapshot of a calculator's bounds and interval.
///
/// Shares nothing with the live calculator it was taken from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializableState {
    /// Lower bound.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lb: Option<DateTime<Utc>>,
    /// Upper bound.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ub: Option<DateTime<Utc>>,
    /// Requested interval.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub i: Option<PersistedInterval>,
}

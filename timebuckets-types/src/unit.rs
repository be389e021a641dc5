//! Time units understood by interval expressions and the query engine.

use std::fmt;
use std::str::FromStr;

use chrono::TimeDelta;
use serde::{Deserialize, Serialize};

use crate::BucketsError;

const SECOND_MS: i64 = 1_000;
const MINUTE_MS: i64 = 60 * SECOND_MS;
const HOUR_MS: i64 = 60 * MINUTE_MS;
const DAY_MS: i64 = 24 * HOUR_MS;

/// A fixed-length time unit.
///
/// Calendar units are approximated: a month is 30 days and a year 365 days.
/// Abbreviations are case-sensitive (`m` is a minute, `M` a month).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TimeUnit {
    /// `ms`
    #[serde(rename = "ms")]
    Millisecond,
    /// `s`
    #[serde(rename = "s")]
    Second,
    /// `m`
    #[serde(rename = "m")]
    Minute,
    /// `h`
    #[serde(rename = "h")]
    Hour,
    /// `d`
    #[serde(rename = "d")]
    Day,
    /// `w`
    #[serde(rename = "w")]
    Week,
    /// `M`
    #[serde(rename = "M")]
    Month,
    /// `y`
    #[serde(rename = "y")]
    Year,
}

impl TimeUnit {
    /// All units, largest first.
    pub const DESCENDING: [Self; 8] = [
        Self::Year,
        Self::Month,
        Self::Week,
        Self::Day,
        Self::Hour,
        Self::Minute,
        Self::Second,
        Self::Millisecond,
    ];

    /// Short form used in engine interval expressions (`"3h"`).
    #[must_use]
    pub const fn abbreviation(self) -> &'static str {
        match self {
            Self::Millisecond => "ms",
            Self::Second => "s",
            Self::Minute => "m",
            Self::Hour => "h",
            Self::Day => "d",
            Self::Week => "w",
            Self::Month => "M",
            Self::Year => "y",
        }
    }

    /// Singular human-readable name (`"hour"`).
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Millisecond => "millisecond",
            Self::Second => "second",
            Self::Minute => "minute",
            Self::Hour => "hour",
            Self::Day => "day",
            Self::Week => "week",
            Self::Month => "month",
            Self::Year => "year",
        }
    }

    /// Length of one unit in milliseconds.
    #[must_use]
    pub const fn millis(self) -> i64 {
        match self {
            Self::Millisecond => 1,
            Self::Second => SECOND_MS,
            Self::Minute => MINUTE_MS,
            Self::Hour => HOUR_MS,
            Self::Day => DAY_MS,
            Self::Week => 7 * DAY_MS,
            Self::Month => 30 * DAY_MS,
            Self::Year => 365 * DAY_MS,
        }
    }

    /// Length of `n` units, or `None` on overflow.
    #[must_use]
    pub fn times(self, n: i64) -> Option<TimeDelta> {
        self.millis()
            .checked_mul(n)
            .and_then(TimeDelta::try_milliseconds)
    }

    /// Whether the unit varies in length on a real calendar.
    ///
    /// Engines only accept these with a multiplier of one.
    #[must_use]
    pub const fn is_calendar(self) -> bool {
        matches!(self, Self::Month | Self::Year)
    }

    /// Parse an abbreviation or a (possibly plural) unit name.
    ///
    /// Abbreviations are matched case-sensitively, names case-insensitively.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        let by_abbreviation = match s {
            "ms" => Some(Self::Millisecond),
            "s" => Some(Self::Second),
            "m" => Some(Self::Minute),
            "h" => Some(Self::Hour),
            "d" => Some(Self::Day),
            "w" => Some(Self::Week),
            "M" => Some(Self::Month),
            "y" => Some(Self::Year),
            _ => None,
        };
        if by_abbreviation.is_some() {
            return by_abbreviation;
        }
        let lower = s.to_ascii_lowercase();
        let singular = lower.strip_suffix('s').unwrap_or(&lower);
        match singular {
            "millisecond" => Some(Self::Millisecond),
            "sec" | "second" => Some(Self::Second),
            "min" | "minute" => Some(Self::Minute),
            "hour" | "hr" => Some(Self::Hour),
            "day" => Some(Self::Day),
            "week" | "wk" => Some(Self::Week),
            "month" | "mon" => Some(Self::Month),
            "year" | "yr" => Some(Self::Year),
            _ => None,
        }
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbreviation())
    }
}

impl FromStr for TimeUnit {
    type Err = BucketsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| BucketsError::invalid_interval(format!("unknown unit {s:?}")))
    }
}

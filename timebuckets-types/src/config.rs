//! Histogram settings and the keys they are stored under.

use chrono::TimeDelta;
use serde::{Deserialize, Serialize};

use crate::BucketsError;
use crate::iso_duration::{format_iso8601, parse_iso8601};

/// Preferred number of buckets for automatically chosen intervals.
pub const BAR_TARGET_KEY: &str = "histogram:barTarget";
/// Upper bound on the number of buckets before the interval is scaled up.
pub const MAX_BARS_KEY: &str = "histogram:maxBars";
/// Ordered `[threshold, format]` table used to pick a date format per interval.
pub const SCALED_DATE_FORMAT_KEY: &str = "dateFormat:scaled";

/// Default for [`BAR_TARGET_KEY`].
pub const DEFAULT_BAR_TARGET: u32 = 50;
/// Default for [`MAX_BARS_KEY`].
pub const DEFAULT_MAX_BARS: u32 = 100;

/// One row of the scaled date-format table.
///
/// Serialized as a two-element array `["PT1H", "YYYY-MM-DD HH:mm"]`; an empty
/// threshold string means the rule always matches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "(String, String)", into = "(String, String)")]
pub struct DateFormatRule {
    /// Smallest interval this rule applies to; `None` matches any interval.
    pub threshold: Option<TimeDelta>,
    /// Moment-style format pattern, e.g. `"HH:mm"`.
    pub format: String,
}

impl DateFormatRule {
    /// Create a rule.
    pub fn new(threshold: Option<TimeDelta>, format: impl Into<String>) -> Self {
        Self {
            threshold,
            format: format.into(),
        }
    }

    /// Whether this rule applies to an interval of the given length.
    #[must_use]
    pub fn matches(&self, interval: TimeDelta) -> bool {
        self.threshold.is_none_or(|t| t <= interval)
    }
}

impl TryFrom<(String, String)> for DateFormatRule {
    type Error = BucketsError;

    fn try_from((threshold, format): (String, String)) -> Result<Self, Self::Error> {
        let threshold = if threshold.trim().is_empty() {
            None
        } else {
            Some(parse_iso8601(&threshold)?)
        };
        Ok(Self { threshold, format })
    }
}

impl From<DateFormatRule> for (String, String) {
    fn from(rule: DateFormatRule) -> Self {
        (
            rule.threshold.map(format_iso8601).unwrap_or_default(),
            rule.format,
        )
    }
}

/// The stock scaled date-format table, least specific first.
#[must_use]
pub fn default_scaled_date_format() -> Vec<DateFormatRule> {
    vec![
        DateFormatRule::new(None, "HH:mm:ss.SSS"),
        DateFormatRule::new(Some(TimeDelta::seconds(1)), "HH:mm:ss"),
        DateFormatRule::new(Some(TimeDelta::minutes(1)), "HH:mm"),
        DateFormatRule::new(Some(TimeDelta::hours(1)), "YYYY-MM-DD HH:mm"),
        DateFormatRule::new(Some(TimeDelta::days(1)), "YYYY-MM-DD"),
        DateFormatRule::new(Some(TimeDelta::days(365)), "YYYY"),
    ]
}

/// Typed snapshot of the histogram settings.
///
/// A snapshot is taken on every interval computation; it is never cached by
/// the calculator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HistogramSettings {
    /// Preferred number of buckets for `auto` intervals (>= 1).
    pub bar_target: u32,
    /// Maximum number of buckets before scaling kicks in (>= 1).
    pub max_bars: u32,
    /// Scaled date-format table, least specific first.
    pub scaled_date_format: Vec<DateFormatRule>,
}

impl Default for HistogramSettings {
    fn default() -> Self {
        Self {
            bar_target: DEFAULT_BAR_TARGET,
            max_bars: DEFAULT_MAX_BARS,
            scaled_date_format: default_scaled_date_format(),
        }
    }
}

impl HistogramSettings {
    /// Check that the bar counts are usable.
    ///
    /// # Errors
    /// Returns `InvalidSetting` if either bar count is zero.
    pub fn validate(&self) -> Result<(), BucketsError> {
        if self.bar_target == 0 {
            return Err(BucketsError::invalid_setting(BAR_TARGET_KEY, "must be at least 1"));
        }
        if self.max_bars == 0 {
            return Err(BucketsError::invalid_setting(MAX_BARS_KEY, "must be at least 1"));
        }
        Ok(())
    }
}

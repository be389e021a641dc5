use chrono::TimeDelta;
use serde::{Deserialize, Serialize};
use timebuckets_core::{BucketsError, TimeUnit, parse_interval_expression};

use crate::TimeBuckets;

/// Requested interval after input normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntervalSpec {
    /// Ask the auto-interval calculator.
    Auto,
    /// One of a unit, e.g. `"hour"`.
    NamedUnit(TimeUnit),
    /// Fixed duration, a positive whole number of milliseconds.
    Explicit(TimeDelta),
}

impl IntervalSpec {
    /// Fixed duration, or `None` for auto.
    #[must_use]
    pub fn duration(&self) -> Option<TimeDelta> {
        match self {
            Self::Auto => None,
            Self::NamedUnit(unit) => Some(TimeDelta::milliseconds(unit.millis())),
            Self::Explicit(d) => Some(*d),
        }
    }
}

/// A selectable interval as shown in a picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntervalOption {
    /// Label.
    pub display: String,
    /// Value passed back to [`TimeBuckets::set_interval`].
    pub value: String,
}

impl IntervalOption {
    fn new(display: &str, value: &str) -> Self {
        Self {
            display: display.to_string(),
            value: value.to_string(),
        }
    }
}

/// The stock list of selectable intervals: auto, then millisecond to year.
#[must_use]
pub fn interval_options() -> Vec<IntervalOption> {
    let mut options = vec![IntervalOption::new("Auto", "auto")];
    options.extend(TimeUnit::DESCENDING.iter().rev().map(|u| {
        let label = match u {
            TimeUnit::Millisecond => "Millisecond",
            TimeUnit::Second => "Second",
            TimeUnit::Minute => "Minute",
            TimeUnit::Hour => "Hourly",
            TimeUnit::Day => "Daily",
            TimeUnit::Week => "Weekly",
            TimeUnit::Month => "Monthly",
            TimeUnit::Year => "Yearly",
        };
        IntervalOption::new(label, u.abbreviation())
    }));
    options
}

/// Anything [`TimeBuckets::set_interval`] accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntervalInput {
    /// Nothing selected; behaves as auto.
    Absent,
    /// `"auto"`, a unit name, or an interval expression.
    Text(String),
    /// Fixed duration.
    Duration(TimeDelta),
    /// Fixed duration in milliseconds.
    Millis(i64),
    /// A picker entry; its `value` is used.
    Option(IntervalOption),
}

impl From<&str> for IntervalInput {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for IntervalInput {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<TimeDelta> for IntervalInput {
    fn from(d: TimeDelta) -> Self {
        Self::Duration(d)
    }
}

impl From<i64> for IntervalInput {
    fn from(ms: i64) -> Self {
        Self::Millis(ms)
    }
}

impl From<IntervalOption> for IntervalInput {
    fn from(o: IntervalOption) -> Self {
        Self::Option(o)
    }
}

impl From<IntervalSpec> for IntervalInput {
    fn from(spec: IntervalSpec) -> Self {
        match spec {
            IntervalSpec::Auto => Self::Absent,
            IntervalSpec::NamedUnit(u) => Self::Text(u.abbreviation().to_string()),
            IntervalSpec::Explicit(d) => Self::Duration(d),
        }
    }
}

impl<T: Into<IntervalInput>> From<Option<T>> for IntervalInput {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Absent, Into::into)
    }
}

/// Intervals are whole milliseconds, at least one.
fn positive(d: TimeDelta) -> Result<IntervalSpec, BucketsError> {
    if d < TimeDelta::milliseconds(1) {
        return Err(BucketsError::invalid_interval(format!(
            "interval must be at least 1ms, got {}µs",
            d.num_microseconds().unwrap_or(i64::MIN)
        )));
    }
    if d.subsec_nanos() % 1_000_000 != 0 {
        return Err(BucketsError::invalid_interval(format!(
            "interval must be a whole number of milliseconds, got {}µs",
            d.num_microseconds().unwrap_or(i64::MAX)
        )));
    }
    Ok(IntervalSpec::Explicit(d))
}

fn from_text(s: &str) -> Result<IntervalSpec, BucketsError> {
    let s = s.trim();
    if s.is_empty() || s.eq_ignore_ascii_case("auto") {
        return Ok(IntervalSpec::Auto);
    }
    if let Some(unit) = TimeUnit::parse(s) {
        return Ok(IntervalSpec::NamedUnit(unit));
    }
    parse_interval_expression(s).map(IntervalSpec::Explicit)
}

impl TryFrom<IntervalInput> for IntervalSpec {
    type Error = BucketsError;

    fn try_from(input: IntervalInput) -> Result<Self, Self::Error> {
        match input {
            IntervalInput::Absent => Ok(Self::Auto),
            IntervalInput::Text(s) => from_text(&s),
            IntervalInput::Option(o) => from_text(&o.value),
            IntervalInput::Duration(d) => positive(d),
            IntervalInput::Millis(ms) => TimeDelta::try_milliseconds(ms)
                .ok_or_else(|| BucketsError::invalid_interval(format!("{ms}ms is out of range")))
                .and_then(positive),
        }
    }
}

impl TimeBuckets {
    /// Replace the requested interval.
    ///
    /// # Errors
    /// Returns `InvalidInterval` if the input is not auto and not a positive
    /// whole number of milliseconds; the previous interval is kept.
    pub fn set_interval(&mut self, input: impl Into<IntervalInput>) -> Result<(), BucketsError> {
        let spec = IntervalSpec::try_from(input.into())?;
        self.interval = Some(spec);
        Ok(())
    }

    /// Whether an interval has been set.
    #[must_use]
    pub const fn has_interval(&self) -> bool {
        self.interval.is_some()
    }

    /// The requested interval, before resolution.
    #[must_use]
    pub const fn interval(&self) -> Option<IntervalSpec> {
        self.interval
    }

    /// Turn the requested interval into a duration.
    ///
    /// Fixed intervals pass through; auto (or unset) asks the auto calculator
    /// for roughly `target_bars` buckets over the current span.
    #[must_use]
    pub fn resolve(&self, target_bars: u32) -> TimeDelta {
        match self.interval.and_then(|spec| spec.duration()) {
            Some(d) => d,
            None => self.auto.near(target_bars, self.get_duration()),
        }
    }
}

//! Resolved intervals and their query-engine representation.

use std::fmt;

use chrono::TimeDelta;
use serde::{Deserialize, Serialize};

use crate::TimeUnit;

/// Query-engine-native representation of an interval, e.g. `12h`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EngineInterval {
    /// Multiplier of `unit`.
    pub value: i64,
    /// Unit the value is expressed in.
    pub unit: TimeUnit,
    /// Native interval syntax, e.g. `"12h"` or `"1M"`.
    pub expression: String,
}

impl EngineInterval {
    /// Build an interval whose expression is `{value}{unit}`.
    #[must_use]
    pub fn new(value: i64, unit: TimeUnit) -> Self {
        Self {
            value,
            unit,
            expression: format!("{value}{}", unit.abbreviation()),
        }
    }
}

/// Scaling applied to keep the bucket count within range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scaling {
    /// `pre_scaled / interval`; multiply per-bucket values by this to express
    /// them per originally requested interval.
    pub scale: f64,
    /// The interval before scaling.
    pub pre_scaled: TimeDelta,
}

/// The final bucketing interval together with its decoration.
///
/// Values are immutable; every `get_interval` call produces a fresh one.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedInterval {
    duration: TimeDelta,
    description: String,
    query: EngineInterval,
    scaling: Option<Scaling>,
}

impl ResolvedInterval {
    /// Assemble a resolved interval.
    #[must_use]
    pub const fn new(
        duration: TimeDelta,
        description: String,
        query: EngineInterval,
        scaling: Option<Scaling>,
    ) -> Self {
        Self {
            duration,
            description,
            query,
            scaling,
        }
    }

    /// Bucket width.
    #[must_use]
    pub const fn duration(&self) -> TimeDelta {
        self.duration
    }

    /// Human-readable description, e.g. `"hour"` or `"3 years"`.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Engine multiplier.
    #[must_use]
    pub const fn query_value(&self) -> i64 {
        self.query.value
    }

    /// Engine unit.
    #[must_use]
    pub const fn query_unit(&self) -> TimeUnit {
        self.query.unit
    }

    /// Engine interval expression, e.g. `"12h"`.
    #[must_use]
    pub fn query_expression(&self) -> &str {
        &self.query.expression
    }

    /// Full engine representation.
    #[must_use]
    pub const fn query(&self) -> &EngineInterval {
        &self.query
    }

    /// Whether the interval was changed to fit the bucket range.
    #[must_use]
    pub const fn scaled(&self) -> bool {
        self.scaling.is_some()
    }

    /// Ratio `pre_scaled / duration` when scaled.
    #[must_use]
    pub fn scale(&self) -> Option<f64> {
        self.scaling.map(|s| s.scale)
    }

    /// Interval before scaling, when scaled.
    #[must_use]
    pub fn pre_scaled(&self) -> Option<TimeDelta> {
        self.scaling.map(|s| s.pre_scaled)
    }
}

impl From<ResolvedInterval> for TimeDelta {
    fn from(r: ResolvedInterval) -> Self {
        r.duration
    }
}

impl fmt::Display for ResolvedInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description)
    }
}

//! A validated time range.

use chrono::{DateTime, TimeDelta, Utc};

use crate::BucketsError;

/// Inclusive `[lower, upper]` time range with `lower <= upper`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimeBounds {
    lower: DateTime<Utc>,
    upper: DateTime<Utc>,
}

impl TimeBounds {
    /// Build a range, rejecting spans that run backwards.
    ///
    /// # Errors
    /// Returns `NegativeSpan` if `upper < lower`.
    pub fn new(lower: DateTime<Utc>, upper: DateTime<Utc>) -> Result<Self, BucketsError> {
        if upper < lower {
            return Err(BucketsError::NegativeSpan {
                lower: lower.to_rfc3339(),
                upper: upper.to_rfc3339(),
            });
        }
        Ok(Self { lower, upper })
    }

    /// Lower bound.
    #[must_use]
    pub const fn min(&self) -> DateTime<Utc> {
        self.lower
    }

    /// Upper bound.
    #[must_use]
    pub const fn max(&self) -> DateTime<Utc> {
        self.upper
    }

    /// `upper - lower`; never negative.
    #[must_use]
    pub fn span(&self) -> TimeDelta {
        self.upper - self.lower
    }
}

use chrono::{DateTime, TimeDelta, Utc};
use serde::Deserialize;
use timebuckets_core::{BucketsError, TimeBounds, TimeLike, parse_time_like};

use crate::TimeBuckets;

/// Bounds as handed to [`TimeBuckets::set_bounds`].
///
/// Deserializes from `{"min": .., "max": ..}`, a two-element array, or
/// `null`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum BoundsInput {
    /// `[lower, upper]`; extra elements are ignored.
    Sequence(Vec<TimeLike>),
    /// Explicit pair.
    Range {
        /// Lower end.
        min: TimeLike,
        /// Upper end.
        max: TimeLike,
    },
    /// No bounds; same as [`TimeBuckets::clear_bounds`].
    Absent,
}

impl From<TimeBounds> for BoundsInput {
    fn from(b: TimeBounds) -> Self {
        Self::Range {
            min: b.min().into(),
            max: b.max().into(),
        }
    }
}

impl From<Option<TimeBounds>> for BoundsInput {
    fn from(b: Option<TimeBounds>) -> Self {
        b.map_or(Self::Absent, Self::from)
    }
}

impl<A: Into<TimeLike>, B: Into<TimeLike>> From<(A, B)> for BoundsInput {
    fn from((min, max): (A, B)) -> Self {
        Self::Range {
            min: min.into(),
            max: max.into(),
        }
    }
}

impl From<Vec<TimeLike>> for BoundsInput {
    fn from(v: Vec<TimeLike>) -> Self {
        Self::Sequence(v)
    }
}

/// What [`TimeBuckets::set_bounds`] did with its input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoundsUpdate {
    /// Bounds stored.
    Set(TimeBounds),
    /// Bounds removed; `reason` is set when the input could not be parsed.
    Cleared {
        /// Why the input was rejected, if it was.
        reason: Option<BucketsError>,
    },
}

impl BoundsUpdate {
    /// Whether bounds are now set.
    #[must_use]
    pub const fn is_set(&self) -> bool {
        matches!(self, Self::Set(_))
    }
}

fn parse_pair(
    min: &TimeLike,
    max: &TimeLike,
) -> Result<(DateTime<Utc>, DateTime<Utc>), BucketsError> {
    Ok((parse_time_like(min)?, parse_time_like(max)?))
}

impl TimeBuckets {
    /// Replace the bounds.
    ///
    /// Unparseable input, or fewer than two instants, clears the bounds and
    /// reports the problem in [`BoundsUpdate::Cleared`].
    ///
    /// # Errors
    /// Returns `NegativeSpan` when the upper bound precedes the lower one; the
    /// previous bounds are kept.
    pub fn set_bounds(
        &mut self,
        input: impl Into<BoundsInput>,
    ) -> Result<BoundsUpdate, BucketsError> {
        let parsed = match input.into() {
            BoundsInput::Absent => {
                self.clear_bounds();
                return Ok(BoundsUpdate::Cleared { reason: None });
            }
            BoundsInput::Range { min, max } => parse_pair(&min, &max),
            BoundsInput::Sequence(items) => match items.as_slice() {
                [min, max, rest @ ..] => {
                    if !rest.is_empty() {
                        #[cfg(feature = "tracing")]
                        tracing::debug!(extra = rest.len(), "ignoring bounds past the second");
                    }
                    parse_pair(min, max)
                }
                _ => Err(BucketsError::invalid_bounds(format!(
                    "expected two instants, got {}",
                    items.len()
                ))),
            },
        };

        let (lower, upper) = match parsed {
            Ok(pair) => pair,
            Err(err) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(error = %err, "unusable bounds; clearing");
                self.clear_bounds();
                return Ok(BoundsUpdate::Cleared { reason: Some(err) });
            }
        };

        let bounds = TimeBounds::new(lower, upper)?;
        self.bounds = Some(bounds);
        Ok(BoundsUpdate::Set(bounds))
    }

    /// Remove both bounds.
    pub fn clear_bounds(&mut self) {
        self.bounds = None;
    }

    /// Whether both bounds are set.
    #[must_use]
    pub const fn has_bounds(&self) -> bool {
        self.bounds.is_some()
    }

    /// Current bounds.
    #[must_use]
    pub const fn get_bounds(&self) -> Option<TimeBounds> {
        self.bounds
    }

    /// `upper - lower`, or `None` without bounds.
    #[must_use]
    pub fn get_duration(&self) -> Option<TimeDelta> {
        self.bounds.map(|b| b.span())
    }
}

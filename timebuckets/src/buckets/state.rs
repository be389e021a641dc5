use timebuckets_core::{BucketsError, PersistedInterval, SerializableState};

use crate::TimeBuckets;
use crate::buckets::bounds::{BoundsInput, BoundsUpdate};
use crate::buckets::selector::{IntervalInput, IntervalSpec};

impl TimeBuckets {
    /// Owned snapshot of the bounds and requested interval.
    ///
    /// Fixed intervals are written as milliseconds.
    #[must_use]
    pub fn serialize(&self) -> SerializableState {
        SerializableState {
            lb: self.bounds.map(|b| b.min()),
            ub: self.bounds.map(|b| b.max()),
            i: self.interval.map(|spec| match spec.duration() {
                Some(d) => PersistedInterval::from_duration(d),
                None => PersistedInterval::Auto,
            }),
        }
    }

    /// Replace bounds and interval with those in `state`.
    ///
    /// Goes through [`TimeBuckets::set_bounds`] and
    /// [`TimeBuckets::set_interval`]; a state with only one of `lb`/`ub`
    /// clears the bounds. Nothing changes when an error is returned.
    ///
    /// # Errors
    /// Returns `NegativeSpan` or `InvalidInterval` from the setters.
    pub fn from_state(&mut self, state: &SerializableState) -> Result<BoundsUpdate, BucketsError> {
        let mut next = self.clone();

        let bounds = match (state.lb, state.ub) {
            (Some(lb), Some(ub)) => BoundsInput::from((lb, ub)),
            (None, None) => BoundsInput::Absent,
            (lb, ub) => BoundsInput::Sequence(lb.or(ub).into_iter().map(Into::into).collect()),
        };
        let update = next.set_bounds(bounds)?;

        match &state.i {
            None => next.interval = None,
            Some(PersistedInterval::Auto) => next.interval = Some(IntervalSpec::Auto),
            Some(PersistedInterval::Millis(ms)) => next.set_interval(IntervalInput::Millis(*ms))?,
            Some(PersistedInterval::Expression(text)) => next.set_interval(text.as_str())?,
        }

        *self = next;
        Ok(update)
    }
}

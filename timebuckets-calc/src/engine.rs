use chrono::TimeDelta;
use timebuckets_core::{EngineInterval, EngineIntervalCalculator, TimeUnit};

/// Expresses an interval in the coarsest unit that divides it evenly.
///
/// Calendar units (`M`, `y`) are only used with a multiplier of one; anything
/// else falls through to a finer fixed-length unit, down to milliseconds.
#[derive(Debug, Clone, Copy, Default)]
pub struct WholeUnitEngineInterval;

impl WholeUnitEngineInterval {
    /// Stable identifier.
    pub const NAME: &'static str = "whole-unit";

    /// Construct the calculator.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl EngineIntervalCalculator for WholeUnitEngineInterval {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn resolve(&self, interval: TimeDelta) -> EngineInterval {
        let ms = interval.num_milliseconds();
        if ms < 1 {
            #[cfg(feature = "tracing")]
            tracing::debug!(ms, "non-positive interval clamped to 1ms");
            return EngineInterval::new(1, TimeUnit::Millisecond);
        }
        TimeUnit::DESCENDING
            .iter()
            .find_map(|&unit| {
                let step = unit.millis();
                let value = ms / step;
                let whole = ms % step == 0 && value >= 1;
                (whole && (!unit.is_calendar() || value == 1))
                    .then(|| EngineInterval::new(value, unit))
            })
            .unwrap_or_else(|| EngineInterval::new(ms, TimeUnit::Millisecond))
    }
}

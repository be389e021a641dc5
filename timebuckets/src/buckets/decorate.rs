use chrono::TimeDelta;
use timebuckets_core::{EngineInterval, EngineIntervalCalculator, ResolvedInterval, Scaling};

/// Human description of an engine interval: `"hour"`, `"3 years"`.
#[must_use]
pub fn describe(query: &EngineInterval) -> String {
    let name = query.unit.name();
    if query.value == 1 {
        name.to_string()
    } else {
        format!("{} {name}s", query.value)
    }
}

/// Attach the engine expression and description to `interval`.
#[must_use]
pub fn decorate(
    engine: &dyn EngineIntervalCalculator,
    interval: TimeDelta,
    scaling: Option<Scaling>,
) -> ResolvedInterval {
    let query = engine.resolve(interval);
    let description = describe(&query);
    ResolvedInterval::new(interval, description, query, scaling)
}

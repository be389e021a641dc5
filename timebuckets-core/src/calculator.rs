use chrono::TimeDelta;

use timebuckets_types::EngineInterval;

/// Picks "nice" bucket widths for a span.
///
/// Every method returns a strictly positive duration. Implementations own the
/// heuristics; the bucket calculator only relies on the guarantees below.
pub trait AutoIntervalCalculator: Send + Sync {
    /// A stable identifier used in diagnostics.
    fn name(&self) -> &'static str {
        "unknown"
    }

    /// An interval yielding roughly `target_bars` buckets over `span`.
    ///
    /// `span` is `None` when no bounds are set; the implementation decides
    /// what a sensible interval is in that case.
    fn near(&self, target_bars: u32, span: Option<TimeDelta>) -> TimeDelta;

    /// The largest interval that still yields at least `min_bars` buckets
    /// over `span`.
    fn at_least(&self, min_bars: u32, span: TimeDelta) -> TimeDelta;

    /// The smallest interval that yields fewer than `max_bars` buckets over
    /// `span`.
    fn less_than(&self, max_bars: u32, span: TimeDelta) -> TimeDelta;
}

/// Converts a bucket width into the query engine's native interval syntax.
///
/// Must be deterministic: the same duration always maps to the same
/// [`EngineInterval`], and the expression is always valid engine syntax.
pub trait EngineIntervalCalculator: Send + Sync {
    /// A stable identifier used in diagnostics.
    fn name(&self) -> &'static str {
        "unknown"
    }

    /// Express `interval` as `{value, unit, expression}`.
    fn resolve(&self, interval: TimeDelta) -> EngineInterval;
}

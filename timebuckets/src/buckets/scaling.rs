use chrono::TimeDelta;
use timebuckets_core::{AutoIntervalCalculator, Scaling, TimeBounds};

/// Interval after scaling, with the scaling record when one was applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaledInterval {
    /// Interval to use.
    pub interval: TimeDelta,
    /// Set when `interval` differs from the requested one.
    pub scaling: Option<Scaling>,
}

/// Keep `span / interval` within `[1, max_bars]`, both ends inclusive.
///
/// Too few buckets asks `auto.at_least(1, span)`, too many asks
/// `auto.less_than(max_bars, span)`. Without bounds the interval is returned
/// as-is.
#[must_use]
pub fn apply(
    auto: &dyn AutoIntervalCalculator,
    bounds: Option<&TimeBounds>,
    interval: TimeDelta,
    max_bars: u32,
) -> ScaledInterval {
    let unscaled = ScaledInterval {
        interval,
        scaling: None,
    };
    let Some(bounds) = bounds else {
        return unscaled;
    };

    let span = bounds.span();
    let original_ms = interval.num_milliseconds() as f64;
    let approx = span.num_milliseconds() as f64 / original_ms;

    let candidate = if approx < 1.0 {
        auto.at_least(1, span)
    } else if approx > f64::from(max_bars) {
        auto.less_than(max_bars, span)
    } else {
        return unscaled;
    };

    if candidate == interval {
        return unscaled;
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(
        requested_ms = interval.num_milliseconds(),
        scaled_ms = candidate.num_milliseconds(),
        approx_buckets = approx,
        max_bars,
        "interval scaled"
    );
    ScaledInterval {
        interval: candidate,
        scaling: Some(Scaling {
            scale: original_ms / candidate.num_milliseconds() as f64,
            pre_scaled: interval,
        }),
    }
}

use chrono::TimeDelta;
use timebuckets_core::{AutoIntervalCalculator, BucketsError, TimeUnit};

/// One row of the rounding table: targets below `bound` round to `interval`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundingRule {
    /// Exclusive upper limit for the target interval; `None` is unbounded.
    pub bound: Option<TimeDelta>,
    /// Interval chosen for targets under `bound`.
    pub interval: TimeDelta,
}

impl RoundingRule {
    /// Rule mapping targets under `bound` to `interval`.
    #[must_use]
    pub const fn new(bound: Option<TimeDelta>, interval: TimeDelta) -> Self {
        Self { bound, interval }
    }

    fn bound_exceeds(&self, target_ms: f64) -> bool {
        self.bound.is_none_or(|b| ms(b) > target_ms)
    }
}

fn ms(d: TimeDelta) -> f64 {
    d.num_milliseconds() as f64
}

/// Whole milliseconds, never below one.
fn whole_ms(target_ms: f64) -> TimeDelta {
    #[allow(clippy::cast_possible_truncation)]
    let n = target_ms.floor().clamp(1.0, i64::MAX as f64) as i64;
    TimeDelta::try_milliseconds(n).unwrap_or(TimeDelta::MAX)
}

/// The stock rounding table, coarsest first.
#[must_use]
pub fn default_rules() -> Vec<RoundingRule> {
    let u = |n: i64, unit: TimeUnit| TimeDelta::milliseconds(unit.millis() * n);
    vec![
        RoundingRule::new(None, u(1, TimeUnit::Year)),
        RoundingRule::new(Some(u(1, TimeUnit::Year)), u(1, TimeUnit::Month)),
        RoundingRule::new(Some(u(3, TimeUnit::Week)), u(1, TimeUnit::Week)),
        RoundingRule::new(Some(u(1, TimeUnit::Week)), u(1, TimeUnit::Day)),
        RoundingRule::new(Some(u(24, TimeUnit::Hour)), u(12, TimeUnit::Hour)),
        RoundingRule::new(Some(u(6, TimeUnit::Hour)), u(3, TimeUnit::Hour)),
        RoundingRule::new(Some(u(2, TimeUnit::Hour)), u(1, TimeUnit::Hour)),
        RoundingRule::new(Some(u(45, TimeUnit::Minute)), u(30, TimeUnit::Minute)),
        RoundingRule::new(Some(u(20, TimeUnit::Minute)), u(10, TimeUnit::Minute)),
        RoundingRule::new(Some(u(9, TimeUnit::Minute)), u(5, TimeUnit::Minute)),
        RoundingRule::new(Some(u(3, TimeUnit::Minute)), u(1, TimeUnit::Minute)),
        RoundingRule::new(Some(u(45, TimeUnit::Second)), u(30, TimeUnit::Second)),
        RoundingRule::new(Some(u(15, TimeUnit::Second)), u(10, TimeUnit::Second)),
        RoundingRule::new(Some(TimeDelta::milliseconds(7_500)), u(5, TimeUnit::Second)),
        RoundingRule::new(Some(u(5, TimeUnit::Second)), u(1, TimeUnit::Second)),
        RoundingRule::new(Some(u(500, TimeUnit::Millisecond)), u(100, TimeUnit::Millisecond)),
    ]
}

/// Auto-interval calculator driven by a table of "nice" intervals.
///
/// - `near`: the interval of the tightest rule whose bound still exceeds
///   `span / target`; spans finer than the whole table fall back to whole
///   milliseconds.
/// - `less_than`: the smallest table interval strictly above `span / max`.
/// - `at_least`: the largest table interval at or below `span / min`.
#[derive(Debug, Clone)]
pub struct RoundingAutoInterval {
    rules: Vec<RoundingRule>,
    unbounded_span: TimeDelta,
}

impl Default for RoundingAutoInterval {
    fn default() -> Self {
        Self::new()
    }
}

impl RoundingAutoInterval {
    /// Stable identifier.
    pub const NAME: &'static str = "rounding-table";

    /// Calculator with the stock table.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rules: default_rules(),
            unbounded_span: TimeDelta::minutes(15),
        }
    }

    /// Calculator with a custom table.
    ///
    /// # Errors
    /// Returns `InvalidSetting` unless the table is non-empty, every interval
    /// is positive, only the first rule is unbounded, and both bounds and
    /// intervals strictly decrease.
    pub fn with_rules(rules: Vec<RoundingRule>) -> Result<Self, BucketsError> {
        let invalid = |reason: &str| BucketsError::invalid_setting("rounding rules", reason);
        if rules.is_empty() {
            return Err(invalid("table is empty"));
        }
        if rules.iter().any(|r| r.interval <= TimeDelta::zero()) {
            return Err(invalid("intervals must be positive"));
        }
        if rules.iter().skip(1).any(|r| r.bound.is_none()) {
            return Err(invalid("only the first rule may be unbounded"));
        }
        for pair in rules.windows(2) {
            let bounds_decrease = match (pair[0].bound, pair[1].bound) {
                (None, Some(_)) => true,
                (Some(a), Some(b)) => a > b,
                _ => false,
            };
            if !bounds_decrease || pair[0].interval <= pair[1].interval {
                return Err(invalid("rules must be ordered coarsest first"));
            }
        }
        Ok(Self {
            rules,
            unbounded_span: TimeDelta::minutes(15),
        })
    }

    /// Span assumed by `near` when no bounds are known.
    #[must_use]
    pub const fn unbounded_span(mut self, span: TimeDelta) -> Self {
        self.unbounded_span = span;
        self
    }

    /// The table, coarsest first.
    #[must_use]
    pub fn rules(&self) -> &[RoundingRule] {
        &self.rules
    }

    fn target_ms(bars: u32, span: TimeDelta) -> f64 {
        ms(span) / f64::from(bars.max(1))
    }
}

impl AutoIntervalCalculator for RoundingAutoInterval {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn near(&self, target_bars: u32, span: Option<TimeDelta>) -> TimeDelta {
        let target = Self::target_ms(target_bars, span.unwrap_or(self.unbounded_span));
        let mut last = None;
        for rule in &self.rules {
            if !rule.bound_exceeds(target) {
                break;
            }
            last = Some(rule.interval);
        }
        // Every bound exceeded the target: finer than the table can express.
        let exhausted = self
            .rules
            .last()
            .is_some_and(|r| r.bound_exceeds(target));
        match last {
            Some(interval) if !exhausted => interval,
            _ => {
                #[cfg(feature = "tracing")]
                tracing::debug!(
                    target_ms = target,
                    "auto interval below table; using whole milliseconds"
                );
                whole_ms(target)
            }
        }
    }

    fn at_least(&self, min_bars: u32, span: TimeDelta) -> TimeDelta {
        let target = Self::target_ms(min_bars, span);
        self.rules
            .iter()
            .rev()
            .map(|r| r.interval)
            .take_while(|&i| ms(i) <= target)
            .last()
            .unwrap_or_else(|| whole_ms(target))
    }

    fn less_than(&self, max_bars: u32, span: TimeDelta) -> TimeDelta {
        let target = Self::target_ms(max_bars, span);
        self.rules
            .iter()
            .rev()
            .map(|r| r.interval)
            .find(|&i| ms(i) > target)
            .unwrap_or_else(|| whole_ms(target + 1.0))
    }
}

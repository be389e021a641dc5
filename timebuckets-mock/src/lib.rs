//! timebuckets-mock
//!
//! Scriptable stand-ins for the collaborator traits. Each mock delegates to
//! the stock calculator in `timebuckets-calc` unless a closure overrides the
//! method, and records every call so tests can assert on what was asked.
#![warn(missing_docs)]

use std::sync::{Arc, Mutex, PoisonError};

use chrono::TimeDelta;
use timebuckets_calc::{RoundingAutoInterval, WholeUnitEngineInterval};
use timebuckets_core::{AutoIntervalCalculator, EngineInterval, EngineIntervalCalculator};

type NearFn = Arc<dyn Fn(u32, Option<TimeDelta>) -> TimeDelta + Send + Sync>;
type SpanFn = Arc<dyn Fn(u32, TimeDelta) -> TimeDelta + Send + Sync>;
type ResolveFn = Arc<dyn Fn(TimeDelta) -> EngineInterval + Send + Sync>;

/// A recorded auto-interval call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutoCall {
    /// `near(target_bars, span)`.
    Near {
        /// Requested bar count.
        target_bars: u32,
        /// Span passed in, if any.
        span: Option<TimeDelta>,
    },
    /// `at_least(min_bars, span)`.
    AtLeast {
        /// Requested minimum bar count.
        min_bars: u32,
        /// Span passed in.
        span: TimeDelta,
    },
    /// `less_than(max_bars, span)`.
    LessThan {
        /// Requested maximum bar count.
        max_bars: u32,
        /// Span passed in.
        span: TimeDelta,
    },
}

/// Auto-interval calculator with per-method overrides.
pub struct MockAutoInterval {
    fallback: RoundingAutoInterval,
    near_fn: Option<NearFn>,
    at_least_fn: Option<SpanFn>,
    less_than_fn: Option<SpanFn>,
    calls: Mutex<Vec<AutoCall>>,
}

impl Default for MockAutoInterval {
    fn default() -> Self {
        Self::new()
    }
}

impl MockAutoInterval {
    /// Identifier reported by [`AutoIntervalCalculator::name`].
    pub const NAME: &'static str = "mock-auto";

    /// A mock that behaves like [`RoundingAutoInterval`] until overridden.
    #[must_use]
    pub fn new() -> Self {
        Self {
            fallback: RoundingAutoInterval::new(),
            near_fn: None,
            at_least_fn: None,
            less_than_fn: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Override `near`.
    #[must_use]
    pub fn with_near_fn(
        mut self,
        f: impl Fn(u32, Option<TimeDelta>) -> TimeDelta + Send + Sync + 'static,
    ) -> Self {
        self.near_fn = Some(Arc::new(f));
        self
    }

    /// Make `near` always return `interval`.
    #[must_use]
    pub fn with_fixed_near(self, interval: TimeDelta) -> Self {
        self.with_near_fn(move |_, _| interval)
    }

    /// Override `at_least`.
    #[must_use]
    pub fn with_at_least_fn(
        mut self,
        f: impl Fn(u32, TimeDelta) -> TimeDelta + Send + Sync + 'static,
    ) -> Self {
        self.at_least_fn = Some(Arc::new(f));
        self
    }

    /// Override `less_than`.
    #[must_use]
    pub fn with_less_than_fn(
        mut self,
        f: impl Fn(u32, TimeDelta) -> TimeDelta + Send + Sync + 'static,
    ) -> Self {
        self.less_than_fn = Some(Arc::new(f));
        self
    }

    /// Snapshot of the calls made so far, oldest first.
    #[must_use]
    pub fn calls(&self) -> Vec<AutoCall> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Forget recorded calls.
    pub fn reset_calls(&self) {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    fn record(&self, call: AutoCall) {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(call);
    }
}

impl AutoIntervalCalculator for MockAutoInterval {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn near(&self, target_bars: u32, span: Option<TimeDelta>) -> TimeDelta {
        self.record(AutoCall::Near { target_bars, span });
        match &self.near_fn {
            Some(f) => f(target_bars, span),
            None => self.fallback.near(target_bars, span),
        }
    }

    fn at_least(&self, min_bars: u32, span: TimeDelta) -> TimeDelta {
        self.record(AutoCall::AtLeast { min_bars, span });
        match &self.at_least_fn {
            Some(f) => f(min_bars, span),
            None => self.fallback.at_least(min_bars, span),
        }
    }

    fn less_than(&self, max_bars: u32, span: TimeDelta) -> TimeDelta {
        self.record(AutoCall::LessThan { max_bars, span });
        match &self.less_than_fn {
            Some(f) => f(max_bars, span),
            None => self.fallback.less_than(max_bars, span),
        }
    }
}

/// Engine-interval calculator with an overridable `resolve`.
pub struct MockEngineInterval {
    resolve_fn: Option<ResolveFn>,
    calls: Mutex<Vec<TimeDelta>>,
}

impl Default for MockEngineInterval {
    fn default() -> Self {
        Self::new()
    }
}

impl MockEngineInterval {
    /// Identifier reported by [`EngineIntervalCalculator::name`].
    pub const NAME: &'static str = "mock-engine";

    /// A mock that behaves like [`WholeUnitEngineInterval`] until overridden.
    #[must_use]
    pub fn new() -> Self {
        Self {
            resolve_fn: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Override `resolve`.
    #[must_use]
    pub fn with_resolve_fn(
        mut self,
        f: impl Fn(TimeDelta) -> EngineInterval + Send + Sync + 'static,
    ) -> Self {
        self.resolve_fn = Some(Arc::new(f));
        self
    }

    /// Intervals passed to `resolve` so far, oldest first.
    #[must_use]
    pub fn calls(&self) -> Vec<TimeDelta> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl EngineIntervalCalculator for MockEngineInterval {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn resolve(&self, interval: TimeDelta) -> EngineInterval {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(interval);
        match &self.resolve_fn {
            Some(f) => f(interval),
            None => WholeUnitEngineInterval.resolve(interval),
        }
    }
}

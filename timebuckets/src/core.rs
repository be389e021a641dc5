use std::fmt;
use std::sync::Arc;

use timebuckets_calc::{RoundingAutoInterval, WholeUnitEngineInterval};
use timebuckets_core::{
    AutoIntervalCalculator, BucketsError, ConfigStore, EngineIntervalCalculator,
    HistogramSettings, ResolvedInterval, SerializableState, TimeBounds,
};

use crate::buckets::{decorate, scaling, selector::IntervalSpec};

/// Bucket interval calculator for one time range.
///
/// Holds the current bounds and requested interval; every other input (bar
/// target, max bars, date formats) is read from the injected [`ConfigStore`]
/// each time [`TimeBuckets::get_interval`] runs.
#[derive(Clone)]
pub struct TimeBuckets {
    pub(crate) bounds: Option<TimeBounds>,
    pub(crate) interval: Option<IntervalSpec>,
    pub(crate) auto: Arc<dyn AutoIntervalCalculator>,
    pub(crate) engine: Arc<dyn EngineIntervalCalculator>,
    pub(crate) config: Arc<dyn ConfigStore>,
}

impl fmt::Debug for TimeBuckets {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TimeBuckets")
            .field("bounds", &self.bounds)
            .field("interval", &self.interval)
            .field("auto", &self.auto.name())
            .field("engine", &self.engine.name())
            .finish_non_exhaustive()
    }
}

impl Default for TimeBuckets {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for a [`TimeBuckets`] with custom collaborators.
pub struct TimeBucketsBuilder {
    auto: Arc<dyn AutoIntervalCalculator>,
    engine: Arc<dyn EngineIntervalCalculator>,
    config: Arc<dyn ConfigStore>,
    state: Option<SerializableState>,
}

impl Default for TimeBucketsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeBucketsBuilder {
    /// Builder using the stock calculators and default settings.
    ///
    /// - Auto interval: [`RoundingAutoInterval`].
    /// - Engine interval: [`WholeUnitEngineInterval`].
    /// - Settings: [`HistogramSettings::default`] (bar target 50, max bars
    ///   100, the stock scaled date format table).
    #[must_use]
    pub fn new() -> Self {
        Self {
            auto: Arc::new(RoundingAutoInterval::new()),
            engine: Arc::new(WholeUnitEngineInterval::new()),
            config: Arc::new(HistogramSettings::default()),
            state: None,
        }
    }

    /// Replace the auto-interval calculator.
    #[must_use]
    pub fn auto_interval(mut self, calc: Arc<dyn AutoIntervalCalculator>) -> Self {
        self.auto = calc;
        self
    }

    /// Replace the engine-interval calculator.
    #[must_use]
    pub fn engine_interval(mut self, calc: Arc<dyn EngineIntervalCalculator>) -> Self {
        self.engine = calc;
        self
    }

    /// Read settings from `store`.
    ///
    /// Keep a clone of the `Arc` to change settings after building; changes
    /// are picked up by the next `get_interval` call.
    #[must_use]
    pub fn config(mut self, store: Arc<dyn ConfigStore>) -> Self {
        self.config = store;
        self
    }

    /// Use fixed settings.
    #[must_use]
    pub fn settings(self, settings: HistogramSettings) -> Self {
        self.config(Arc::new(settings))
    }

    /// Restore bounds and interval from a persisted snapshot.
    #[must_use]
    pub fn state(mut self, state: SerializableState) -> Self {
        self.state = Some(state);
        self
    }

    /// Build the calculator.
    ///
    /// # Errors
    /// Fails when the persisted state carries a negative span or an invalid
    /// interval. Unparseable or half-present bounds only clear the bounds.
    pub fn build(self) -> Result<TimeBuckets, BucketsError> {
        let mut buckets = TimeBuckets {
            bounds: None,
            interval: None,
            auto: self.auto,
            engine: self.engine,
            config: self.config,
        };
        if let Some(state) = self.state {
            buckets.from_state(&state)?;
        }
        Ok(buckets)
    }
}

impl TimeBuckets {
    /// Calculator with the stock collaborators, no bounds and no interval.
    #[must_use]
    pub fn new() -> Self {
        Self {
            bounds: None,
            interval: None,
            auto: Arc::new(RoundingAutoInterval::new()),
            engine: Arc::new(WholeUnitEngineInterval::new()),
            config: Arc::new(HistogramSettings::default()),
        }
    }

    /// Start building a calculator with custom collaborators or state.
    ///
    /// ```rust
    /// use std::sync::Arc;
    /// use timebuckets::{MemoryConfigStore, TimeBuckets};
    ///
    /// let store = Arc::new(MemoryConfigStore::new());
    /// store.set("histogram:barTarget", 20);
    ///
    /// let mut buckets = TimeBuckets::builder().config(store.clone()).build()?;
    /// buckets.set_bounds(("2024-01-01T00:00:00Z", "2024-01-08T00:00:00Z"))?;
    /// buckets.set_interval("auto")?;
    /// assert_eq!(buckets.get_interval().query_expression(), "12h");
    /// # Ok::<(), timebuckets::BucketsError>(())
    /// ```
    #[must_use]
    pub fn builder() -> TimeBucketsBuilder {
        TimeBucketsBuilder::new()
    }

    /// Settings as currently visible in the config store.
    #[must_use]
    pub fn settings(&self) -> HistogramSettings {
        self.config.histogram_settings()
    }

    /// Compute the bucket interval for the current bounds and settings.
    ///
    /// Pipeline: resolve the requested interval (asking the auto calculator
    /// when it is auto), scale it so the bucket count stays within
    /// `[1, max_bars]`, then decorate it with its engine expression.
    /// Nothing is cached.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "timebuckets::core::get_interval",
            skip(self),
            fields(auto = self.auto.name(), engine = self.engine.name()),
        )
    )]
    #[must_use]
    pub fn get_interval(&self) -> ResolvedInterval {
        self.get_interval_with(&self.settings())
    }

    /// [`TimeBuckets::get_interval`] against an already-read settings snapshot.
    pub(crate) fn get_interval_with(&self, settings: &HistogramSettings) -> ResolvedInterval {
        let candidate = self.resolve(settings.bar_target);
        let scaled = scaling::apply(
            self.auto.as_ref(),
            self.bounds.as_ref(),
            candidate,
            settings.max_bars,
        );
        decorate::decorate(self.engine.as_ref(), scaled.interval, scaled.scaling)
    }
}

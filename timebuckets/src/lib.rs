//! timebuckets picks the bucket interval for a time-series histogram.
//!
//! Overview
//! - Holds a `[lower, upper]` time range and a requested interval (a fixed
//!   duration, a named unit, or "auto").
//! - "auto" asks an [`AutoIntervalCalculator`] for roughly `histogram:barTarget`
//!   buckets over the range.
//! - The interval is then scaled so the bucket count stays within
//!   `[1, histogram:maxBars]`, and decorated with the query engine's interval
//!   syntax (`12h`, `1M`) and a description (`"12 hours"`).
//! - Settings are read from a [`ConfigStore`] on every call; nothing is cached.
//!
//! Key behaviors and trade-offs
//! - Unparseable bounds clear the bounds instead of failing, and the outcome
//!   is returned as a [`BoundsUpdate`]. A range whose upper end precedes its
//!   lower end is an error and leaves the previous range in place.
//! - Scaling replaces the requested interval outright. The returned
//!   [`ResolvedInterval`] records the original as `pre_scaled` and
//!   `scale = pre_scaled / interval`, so per-bucket values can be expressed
//!   per requested interval.
//! - Months and years are fixed at 30 and 365 days; there is no calendar or
//!   time zone arithmetic.
//!
//! Example
//! ```rust
//! use timebuckets::TimeBuckets;
//!
//! let mut buckets = TimeBuckets::new();
//! buckets.set_bounds(("2024-01-01T00:00:00Z", "2024-01-02T00:00:00Z"))?;
//! buckets.set_interval("auto")?;
//!
//! let interval = buckets.get_interval();
//! // 24h / 50 bars rounds to 30 minutes
//! assert_eq!(interval.query_expression(), "30m");
//! assert_eq!(interval.description(), "30 minutes");
//! assert_eq!(buckets.get_scaled_date_format().as_deref(), Some("HH:mm"));
//! # Ok::<(), timebuckets::BucketsError>(())
//! ```
#![warn(missing_docs)]

pub(crate) mod buckets;
pub(crate) mod core;

pub use buckets::bounds::{BoundsInput, BoundsUpdate};
pub use buckets::date_format::scaled_date_format;
pub use buckets::decorate::{decorate, describe};
pub use buckets::scaling::{ScaledInterval, apply as apply_scaling};
pub use buckets::selector::{IntervalInput, IntervalOption, IntervalSpec, interval_options};
pub use self::core::{TimeBuckets, TimeBucketsBuilder};

pub use timebuckets_calc::{RoundingAutoInterval, RoundingRule, WholeUnitEngineInterval};
pub use timebuckets_core::{
    AutoIntervalCalculator, BucketsError, ConfigStore, DateFormatRule, EngineInterval,
    EngineIntervalCalculator, HistogramSettings, MemoryConfigStore, PersistedInterval,
    ResolvedInterval, Scaling, SerializableState, TimeBounds, TimeLike, TimeUnit,
};
pub use timebuckets_core::{BAR_TARGET_KEY, MAX_BARS_KEY, SCALED_DATE_FORMAT_KEY};

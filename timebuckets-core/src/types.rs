//! Re-export of the shared data types from `timebuckets-types`.
// Consolidated re-exports so downstream crates can depend on `timebuckets-core` only

pub use timebuckets_types::iso_duration;
pub use timebuckets_types::{
    BAR_TARGET_KEY, DEFAULT_BAR_TARGET, DEFAULT_MAX_BARS, MAX_BARS_KEY, SCALED_DATE_FORMAT_KEY,
};
pub use timebuckets_types::{
    BucketsError, DateFormatRule, EngineInterval, HistogramSettings, PersistedInterval,
    ResolvedInterval, Scaling, SerializableState, TimeBounds, TimeUnit,
    default_scaled_date_format,
};

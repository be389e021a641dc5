//! Data transfer objects, settings, and the error type shared across the
//! timebuckets workspace.
#![warn(missing_docs)]

mod bounds;
mod config;
mod error;
mod interval;
/// ISO-8601 duration codec used by the scaled date-format settings.
pub mod iso_duration;
mod state;
mod unit;

pub use bounds::TimeBounds;
pub use config::{
    BAR_TARGET_KEY, DEFAULT_BAR_TARGET, DEFAULT_MAX_BARS, DateFormatRule, HistogramSettings,
    MAX_BARS_KEY, SCALED_DATE_FORMAT_KEY, default_scaled_date_format,
};
pub use error::BucketsError;
pub use interval::{EngineInterval, ResolvedInterval, Scaling};
pub use state::{PersistedInterval, SerializableState};
pub use unit::TimeUnit;

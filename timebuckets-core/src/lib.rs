//! timebuckets-core
//!
//! Traits and utilities shared across the timebuckets workspace.
//!
//! - `calculator`: the auto-interval and engine-interval collaborator traits.
//! - `config`: the `ConfigStore` trait and an in-memory store.
//! - `time`: parsing of time-like values and interval expressions, and
//!   date-pattern translation.
//! - `types`: re-exports of the data types in `timebuckets-types`.
//!
//! Everything here is synchronous; no async runtime is involved.
#![warn(missing_docs)]

/// Collaborator traits consumed by the bucket calculator.
pub mod calculator;
/// Settings store abstraction.
pub mod config;
/// Time parsing and formatting helpers.
pub mod time;
pub mod types;

pub use calculator::{AutoIntervalCalculator, EngineIntervalCalculator};
pub use config::{ConfigStore, MemoryConfigStore};
pub use time::{
    TimeLike, format_with_moment_pattern, moment_to_strftime, parse_interval_expression,
    parse_time_like,
};
pub use types::*;

//! Time helpers shared by the bucket calculator and its collaborators.
//!
//! - `parse`: time-like values (instants, strings, epoch millis) to UTC instants
//! - `expr`: interval expressions such as `3h` or `hour` to durations
//! - `format`: moment-style date patterns to chrono `strftime`
/// Interval expression parsing.
pub mod expr;
/// Moment-style pattern translation.
pub mod format;
/// Time-like value parsing.
pub mod parse;

pub use expr::parse_interval_expression;
pub use format::{format_with_moment_pattern, moment_to_strftime};
pub use parse::{TimeLike, parse_time_like};

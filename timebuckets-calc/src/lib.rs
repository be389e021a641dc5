//! timebuckets-calc
//!
//! Stock implementations of the collaborator traits in `timebuckets-core`:
//!
//! - [`RoundingAutoInterval`]: rounds `span / bars` to a table of "nice"
//!   intervals (1s, 5m, 12h, 1w, ...).
//! - [`WholeUnitEngineInterval`]: renders an interval as `{value}{unit}` in
//!   the coarsest unit dividing it evenly.
#![warn(missing_docs)]

/// Table-driven auto-interval calculator.
pub mod auto;
/// Engine interval rendering.
pub mod engine;

pub use auto::{RoundingAutoInterval, RoundingRule, default_rules};
pub use engine::WholeUnitEngineInterval;

use chrono::TimeDelta;

use crate::{BucketsError, TimeUnit};

/// Parse an interval expression into a positive duration.
///
/// Accepted forms: `"3h"`, `"1.5 d"`, `"30 minutes"`, a bare unit (`"hour"`,
/// `"w"`) meaning one of that unit, and bare digits meaning milliseconds.
///
/// # Errors
/// Returns `InvalidInterval` if the text is not an expression or denotes a
/// non-positive duration.
pub fn parse_interval_expression(input: &str) -> Result<TimeDelta, BucketsError> {
    let s = input.trim();
    let split = s
        .find(|c: char| !(c.is_ascii_digit() || c == '.'))
        .unwrap_or(s.len());
    let (number, unit) = (&s[..split], s[split..].trim());

    let value: f64 = if number.is_empty() {
        1.0
    } else {
        number
            .parse()
            .map_err(|_| BucketsError::invalid_interval(format!("bad magnitude in {input:?}")))?
    };
    let unit = if unit.is_empty() {
        if number.is_empty() {
            return Err(BucketsError::invalid_interval("empty interval expression"));
        }
        TimeUnit::Millisecond
    } else {
        TimeUnit::parse(unit)
            .ok_or_else(|| BucketsError::invalid_interval(format!("unknown unit in {input:?}")))?
    };

    let ms = (value * unit.millis() as f64).round();
    if !ms.is_finite() || ms < 1.0 || ms > i64::MAX as f64 {
        return Err(BucketsError::invalid_interval(format!(
            "{input:?} is not a positive duration"
        )));
    }
    #[allow(clippy::cast_possible_truncation)]
    let ms = ms as i64;
    TimeDelta::try_milliseconds(ms)
        .ok_or_else(|| BucketsError::invalid_interval(format!("{input:?} is out of range")))
}

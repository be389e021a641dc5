//! ISO-8601 durations (`PT1H`, `P1DT`, `P1Y`) as used by the scaled date-format table.
//!
//! Years and months use the fixed lengths of [`TimeUnit`]. A trailing `T`
//! with no time components (`P1DT`) is accepted.

use chrono::TimeDelta;

use crate::{BucketsError, TimeUnit};

/// Parse an ISO-8601 duration into a `TimeDelta`.
///
/// # Errors
/// Returns `InvalidSetting` if the string is not a duration of the form
/// `[-]P[nY][nM][nW][nD][T[nH][nM][nS]]` with at least one component.
pub fn parse_iso8601(input: &str) -> Result<TimeDelta, BucketsError> {
    let fail = |reason: &str| BucketsError::invalid_setting(input, reason);

    let s = input.trim();
    let (negative, s) = s.strip_prefix('-').map_or((false, s), |rest| (true, rest));
    let Some(body) = s.strip_prefix('P').or_else(|| s.strip_prefix('p')) else {
        return Err(fail("duration must start with 'P'"));
    };

    let mut in_time = false;
    let mut components = 0usize;
    let mut number = String::new();
    let mut total_ms = 0f64;

    for ch in body.chars() {
        match ch {
            '0'..='9' | '.' => number.push(ch),
            ',' => number.push('.'),
            'T' | 't' => {
                if in_time || !number.is_empty() {
                    return Err(fail("misplaced 'T'"));
                }
                in_time = true;
            }
            designator => {
                let unit = match (in_time, designator.to_ascii_uppercase()) {
                    (false, 'Y') => TimeUnit::Year,
                    (false, 'M') => TimeUnit::Month,
                    (false, 'W') => TimeUnit::Week,
                    (false, 'D') => TimeUnit::Day,
                    (true, 'H') => TimeUnit::Hour,
                    (true, 'M') => TimeUnit::Minute,
                    (true, 'S') => TimeUnit::Second,
                    _ => return Err(fail("unknown designator")),
                };
                let value: f64 = number.parse().map_err(|_| fail("missing number"))?;
                number.clear();
                total_ms += value * unit.millis() as f64;
                components += 1;
            }
        }
    }

    if !number.is_empty() {
        return Err(fail("number without designator"));
    }
    if components == 0 {
        return Err(fail("no duration components"));
    }
    if !total_ms.is_finite() || total_ms.abs() > i64::MAX as f64 {
        return Err(fail("duration out of range"));
    }

    #[allow(clippy::cast_possible_truncation)]
    let ms = total_ms.round() as i64;
    let ms = if negative { -ms } else { ms };
    TimeDelta::try_milliseconds(ms).ok_or_else(|| fail("duration out of range"))
}

/// Format a `TimeDelta` as an ISO-8601 duration using days and clock units.
///
/// The output always parses back to the same number of milliseconds.
#[must_use]
pub fn format_iso8601(d: TimeDelta) -> String {
    let total = d.num_milliseconds();
    if total == 0 {
        return "PT0S".to_string();
    }
    let mut out = String::new();
    if total < 0 {
        out.push('-');
    }
    out.push('P');

    let mut rem = total.unsigned_abs();
    let take = |rem: &mut u64, unit: TimeUnit| {
        let len = unit.millis().unsigned_abs();
        let n = *rem / len;
        *rem %= len;
        n
    };
    let days = take(&mut rem, TimeUnit::Day);
    let hours = take(&mut rem, TimeUnit::Hour);
    let minutes = take(&mut rem, TimeUnit::Minute);
    let seconds = take(&mut rem, TimeUnit::Second);
    let millis = rem;

    if days > 0 {
        out.push_str(&format!("{days}D"));
    }
    if hours > 0 || minutes > 0 || seconds > 0 || millis > 0 {
        out.push('T');
        if hours > 0 {
            out.push_str(&format!("{hours}H"));
        }
        if minutes > 0 {
            out.push_str(&format!("{minutes}M"));
        }
        if millis > 0 {
            let frac = format!("{millis:03}");
            out.push_str(&format!("{seconds}.{}S", frac.trim_end_matches('0')));
        } else if seconds > 0 {
            out.push_str(&format!("{seconds}S"));
        }
    }
    out
}

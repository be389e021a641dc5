use chrono::{DateTime, TimeDelta, Utc};
use timebuckets_core::{DateFormatRule, format_with_moment_pattern, moment_to_strftime};

use crate::TimeBuckets;

/// Most specific rule in `rules` matching `interval`.
///
/// `rules` is ordered least to most specific, as the `dateFormat:scaled`
/// setting is written; it is scanned from the end.
#[must_use]
pub fn scaled_date_format(rules: &[DateFormatRule], interval: TimeDelta) -> Option<&str> {
    rules
        .iter()
        .rev()
        .find(|rule| rule.matches(interval))
        .map(|rule| rule.format.as_str())
}

impl TimeBuckets {
    /// Date pattern suited to the current interval, e.g. `"HH:mm"` for
    /// minute buckets.
    #[must_use]
    pub fn get_scaled_date_format(&self) -> Option<String> {
        let settings = self.settings();
        let interval = self.get_interval_with(&settings).duration();
        scaled_date_format(&settings.scaled_date_format, interval).map(str::to_string)
    }

    /// [`TimeBuckets::get_scaled_date_format`] as a chrono `strftime` pattern.
    #[must_use]
    pub fn scaled_strftime(&self) -> Option<String> {
        self.get_scaled_date_format()
            .map(|pattern| moment_to_strftime(&pattern))
    }

    /// Render `instant` (UTC) with the scaled date format.
    #[must_use]
    pub fn format_instant(&self, instant: DateTime<Utc>) -> Option<String> {
        self.get_scaled_date_format()
            .map(|pattern| format_with_moment_pattern(instant, &pattern))
    }
}

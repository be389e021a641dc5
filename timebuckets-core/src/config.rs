//! Configuration store abstraction and an in-memory implementation.

use std::sync::{PoisonError, RwLock};

use serde_json::{Map, Value};
use timebuckets_types::{
    BAR_TARGET_KEY, BucketsError, DEFAULT_BAR_TARGET, DEFAULT_MAX_BARS, DateFormatRule,
    HistogramSettings, MAX_BARS_KEY, SCALED_DATE_FORMAT_KEY, default_scaled_date_format,
};

/// Key/value source for tunable settings.
///
/// The bucket calculator calls [`ConfigStore::histogram_settings`] on every
/// interval computation, so a store whose values change is observed on the
/// next call.
pub trait ConfigStore: Send + Sync {
    /// Raw value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<Value>;

    /// Read all histogram settings, failing on the first malformed value.
    ///
    /// Missing keys take their defaults.
    ///
    /// # Errors
    /// Returns `InvalidSetting` naming the offending key.
    fn try_histogram_settings(&self) -> Result<HistogramSettings, BucketsError> {
        let settings = HistogramSettings {
            bar_target: self
                .get(BAR_TARGET_KEY)
                .map(|v| parse_bar_count(BAR_TARGET_KEY, &v))
                .transpose()?
                .unwrap_or(DEFAULT_BAR_TARGET),
            max_bars: self
                .get(MAX_BARS_KEY)
                .map(|v| parse_bar_count(MAX_BARS_KEY, &v))
                .transpose()?
                .unwrap_or(DEFAULT_MAX_BARS),
            scaled_date_format: self
                .get(SCALED_DATE_FORMAT_KEY)
                .map(parse_scaled_table)
                .transpose()?
                .unwrap_or_else(default_scaled_date_format),
        };
        settings.validate()?;
        Ok(settings)
    }

    /// Read all histogram settings, replacing malformed values by their
    /// defaults key by key.
    fn histogram_settings(&self) -> HistogramSettings {
        let bar_target = lenient(BAR_TARGET_KEY, self.get(BAR_TARGET_KEY), |v| {
            parse_bar_count(BAR_TARGET_KEY, &v)
        })
        .unwrap_or(DEFAULT_BAR_TARGET);
        let max_bars = lenient(MAX_BARS_KEY, self.get(MAX_BARS_KEY), |v| {
            parse_bar_count(MAX_BARS_KEY, &v)
        })
        .unwrap_or(DEFAULT_MAX_BARS);
        let scaled_date_format = lenient(
            SCALED_DATE_FORMAT_KEY,
            self.get(SCALED_DATE_FORMAT_KEY),
            parse_scaled_table,
        )
        .unwrap_or_else(default_scaled_date_format);

        HistogramSettings {
            bar_target,
            max_bars,
            scaled_date_format,
        }
    }
}

fn lenient<T>(
    key: &str,
    raw: Option<Value>,
    parse: impl FnOnce(Value) -> Result<T, BucketsError>,
) -> Option<T> {
    match raw.map(parse) {
        Some(Ok(v)) => Some(v),
        Some(Err(e)) => {
            #[cfg(feature = "tracing")]
            tracing::warn!(key, error = %e, "ignoring malformed setting; using default");
            #[cfg(not(feature = "tracing"))]
            let _ = (key, e);
            None
        }
        None => None,
    }
}

/// Accepts positive integers given as numbers (`15`, `15.0`) or numeric strings.
fn parse_bar_count(key: &str, value: &Value) -> Result<u32, BucketsError> {
    let n = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
    .ok_or_else(|| BucketsError::invalid_setting(key, format!("expected a number, got {value}")))?;

    if n.fract() != 0.0 || n < 1.0 || n > f64::from(u32::MAX) {
        return Err(BucketsError::invalid_setting(
            key,
            format!("expected a positive whole number, got {n}"),
        ));
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let count = n as u32;
    Ok(count)
}

fn parse_scaled_table(value: Value) -> Result<Vec<DateFormatRule>, BucketsError> {
    serde_json::from_value(value)
        .map_err(|e| BucketsError::invalid_setting(SCALED_DATE_FORMAT_KEY, e.to_string()))
}

impl ConfigStore for HistogramSettings {
    fn get(&self, key: &str) -> Option<Value> {
        match key {
            BAR_TARGET_KEY => Some(Value::from(self.bar_target)),
            MAX_BARS_KEY => Some(Value::from(self.max_bars)),
            SCALED_DATE_FORMAT_KEY => serde_json::to_value(&self.scaled_date_format).ok(),
            _ => None,
        }
    }
}

/// Thread-safe in-memory settings map.
///
/// Writes through a shared handle (`Arc<MemoryConfigStore>`) are visible to
/// every calculator holding the same store.
#[derive(Debug, Default)]
pub struct MemoryConfigStore {
    values: RwLock<Map<String, Value>>,
}

impl MemoryConfigStore {
    /// Create an empty store; every setting takes its default.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated from typed settings.
    #[must_use]
    pub fn with_settings(settings: &HistogramSettings) -> Self {
        let store = Self::new();
        for key in [BAR_TARGET_KEY, MAX_BARS_KEY, SCALED_DATE_FORMAT_KEY] {
            if let Some(v) = settings.get(key) {
                store.set(key, v);
            }
        }
        store
    }

    /// Create a store from a JSON object of `key: value` pairs.
    ///
    /// # Errors
    /// Returns `InvalidSetting` if the document is not a JSON object.
    pub fn from_json(json: &str) -> Result<Self, BucketsError> {
        let values: Map<String, Value> = serde_json::from_str(json)
            .map_err(|e| BucketsError::invalid_setting("<document>", e.to_string()))?;
        Ok(Self {
            values: RwLock::new(values),
        })
    }

    /// Store `value` under `key`, replacing any previous value.
    pub fn set(&self, key: impl Into<String>, value: impl Into<Value>) {
        self.values
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.into(), value.into());
    }

    /// Remove `key`, restoring its default.
    pub fn remove(&self, key: &str) -> Option<Value> {
        self.values
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key)
    }
}

impl ConfigStore for MemoryConfigStore {
    fn get(&self, key: &str) -> Option<Value> {
        self.values
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }
}

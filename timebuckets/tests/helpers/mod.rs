#![allow(dead_code)]

use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use timebuckets::{
    AutoIntervalCalculator, ConfigStore, HistogramSettings, TimeBuckets, TimeBucketsBuilder,
};
use timebuckets_mock::{MockAutoInterval, MockEngineInterval};

pub fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
}

/// 2024-01-01T00:00Z .. 2024-01-08T00:00Z
pub fn week() -> (DateTime<Utc>, DateTime<Utc>) {
    (at(2024, 1, 1, 0), at(2024, 1, 8, 0))
}

pub fn settings(bar_target: u32, max_bars: u32) -> HistogramSettings {
    HistogramSettings {
        bar_target,
        max_bars,
        ..HistogramSettings::default()
    }
}

pub fn builder_with(auto: Arc<MockAutoInterval>) -> TimeBucketsBuilder {
    let auto: Arc<dyn AutoIntervalCalculator> = auto;
    TimeBuckets::builder()
        .auto_interval(auto)
        .engine_interval(Arc::new(MockEngineInterval::new()))
}

pub fn buckets(auto: Arc<MockAutoInterval>, config: Arc<dyn ConfigStore>) -> TimeBuckets {
    builder_with(auto).config(config).build().unwrap()
}

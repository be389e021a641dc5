use std::sync::Arc;

use chrono::TimeDelta;
use serde_json::json;
use timebuckets::{MemoryConfigStore, TimeBuckets};
use timebuckets_mock::MockAutoInterval;

use crate::helpers::{buckets, week};

#[test]
fn settings_changes_are_seen_by_the_next_call() {
    let store = Arc::new(MemoryConfigStore::new());
    let mut tb = buckets(Arc::new(MockAutoInterval::new()), store.clone());
    tb.set_bounds(week()).unwrap();
    tb.set_interval("1h").unwrap();

    // 168 buckets > default 100
    assert!(tb.get_interval().scaled());

    store.set("histogram:maxBars", 200);
    let got = tb.get_interval();
    assert!(!got.scaled());
    assert_eq!(got.duration(), TimeDelta::hours(1));

    store.remove("histogram:maxBars");
    assert!(tb.get_interval().scaled());
}

#[test]
fn malformed_settings_fall_back_to_defaults() {
    let store = Arc::new(MemoryConfigStore::new());
    store.set("histogram:barTarget", "lots");
    store.set("histogram:maxBars", -3);
    let tb = buckets(Arc::new(MockAutoInterval::new()), store);

    let s = tb.settings();
    assert_eq!((s.bar_target, s.max_bars), (50, 100));
}

#[test]
fn store_from_json_document() {
    let store = MemoryConfigStore::from_json(
        &json!({
            "histogram:barTarget": 20,
            "histogram:maxBars": 15,
            "dateFormat:scaled": [["", "HH:mm"], ["P1D", "MMM D"]]
        })
        .to_string(),
    )
    .unwrap();
    let mut tb = TimeBuckets::builder().config(Arc::new(store)).build().unwrap();
    tb.set_bounds(week()).unwrap();
    tb.set_interval("auto").unwrap();

    // 7d / 20 -> 12h; 14 buckets is within 15
    assert_eq!(tb.get_interval().query_expression(), "12h");
    assert_eq!(tb.get_scaled_date_format().as_deref(), Some("HH:mm"));

    tb.set_interval("1d").unwrap();
    assert_eq!(tb.get_scaled_date_format().as_deref(), Some("MMM D"));
}

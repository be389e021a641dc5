use std::sync::Arc;

use chrono::TimeDelta;
use timebuckets::{MemoryConfigStore, TimeBuckets};
use timebuckets_mock::{AutoCall, MockAutoInterval};

use crate::helpers::{buckets, week};

#[test]
fn auto_interval_scaled_to_max_bars() {
    // near() answers 8h (21 buckets over a week); max 15 forces less_than(15, 7d).
    let auto = Arc::new(MockAutoInterval::new().with_fixed_near(TimeDelta::hours(8)));
    let store = Arc::new(MemoryConfigStore::new());
    store.set("histogram:barTarget", 20);
    store.set("histogram:maxBars", 15);

    let mut tb = buckets(auto.clone(), store);
    tb.set_bounds(week()).unwrap();
    tb.set_interval("auto").unwrap();

    let got = tb.get_interval();
    assert_eq!(got.duration(), TimeDelta::hours(12));
    assert_eq!(got.query_expression(), "12h");
    assert_eq!(got.description(), "12 hours");
    assert!(got.scaled());
    assert_eq!(got.pre_scaled(), Some(TimeDelta::hours(8)));
    assert!((got.scale().unwrap() - 8.0 / 12.0).abs() < 1e-12);
    assert_eq!(TimeDelta::from(got), TimeDelta::hours(12));

    assert_eq!(
        auto.calls(),
        vec![
            AutoCall::Near {
                target_bars: 20,
                span: Some(TimeDelta::days(7))
            },
            AutoCall::LessThan {
                max_bars: 15,
                span: TimeDelta::days(7)
            },
        ]
    );
}

#[test]
fn stock_collaborators_end_to_end() {
    let mut tb = TimeBuckets::new();
    tb.set_bounds(("2024-01-01T00:00:00Z", "2024-01-01T01:00:00Z"))
        .unwrap();
    tb.set_interval("auto").unwrap();

    // 1h / 50 = 72s -> 1m
    let got = tb.get_interval();
    assert_eq!(got.query_expression(), "1m");
    assert_eq!(got.description(), "minute");
    assert!(!got.scaled());
    assert_eq!(got.to_string(), "minute");
}

#[test]
fn recomputed_on_every_call() {
    let mut tb = TimeBuckets::new();
    tb.set_interval("auto").unwrap();
    tb.set_bounds(week()).unwrap();
    let week_interval = tb.get_interval();
    tb.set_bounds(("2024-01-01T00:00:00Z", "2024-01-01T01:00:00Z"))
        .unwrap();
    assert_ne!(tb.get_interval(), week_interval);
}

use std::sync::Arc;

use chrono::TimeDelta;
use timebuckets_mock::{AutoCall, MockAutoInterval};

use crate::helpers::{buckets, settings, week};

#[test]
fn scales_up_when_too_many_buckets() {
    // 7d / 1h = 168 buckets > 100
    let auto = Arc::new(MockAutoInterval::new().with_less_than_fn(|_, _| TimeDelta::hours(3)));
    let mut tb = buckets(auto.clone(), Arc::new(settings(50, 100)));
    tb.set_bounds(week()).unwrap();
    tb.set_interval("1h").unwrap();

    let got = tb.get_interval();
    assert_eq!(got.duration(), TimeDelta::hours(3));
    assert!(got.scaled());
    assert_eq!(got.pre_scaled(), Some(TimeDelta::hours(1)));
    assert!((got.scale().unwrap() - 1.0 / 3.0).abs() < 1e-12);
    assert_eq!(
        auto.calls(),
        vec![AutoCall::LessThan {
            max_bars: 100,
            span: TimeDelta::days(7)
        }]
    );
}

#[test]
fn scales_down_when_under_one_bucket() {
    let auto = Arc::new(MockAutoInterval::new().with_at_least_fn(|_, _| TimeDelta::days(1)));
    let mut tb = buckets(auto.clone(), Arc::new(settings(50, 100)));
    tb.set_bounds(week()).unwrap();
    tb.set_interval(TimeDelta::days(14)).unwrap();

    let got = tb.get_interval();
    assert_eq!(got.duration(), TimeDelta::days(1));
    assert_eq!(got.pre_scaled(), Some(TimeDelta::days(14)));
    assert!((got.scale().unwrap() - 14.0).abs() < 1e-12);
    assert_eq!(
        auto.calls(),
        vec![AutoCall::AtLeast {
            min_bars: 1,
            span: TimeDelta::days(7)
        }]
    );
}

#[test]
fn exact_boundaries_are_not_scaled() {
    let auto = Arc::new(MockAutoInterval::new());
    let mut tb = buckets(auto.clone(), Arc::new(settings(50, 7)));
    tb.set_bounds(week()).unwrap();

    tb.set_interval("1d").unwrap();
    assert!(!tb.get_interval().scaled());
    tb.set_interval("1w").unwrap();
    assert!(!tb.get_interval().scaled());
    assert!(auto.calls().is_empty());
}

#[test]
fn same_candidate_is_unscaled() {
    let auto = Arc::new(MockAutoInterval::new().with_less_than_fn(|_, _| TimeDelta::hours(1)));
    let mut tb = buckets(auto, Arc::new(settings(50, 100)));
    tb.set_bounds(week()).unwrap();
    tb.set_interval("1h").unwrap();

    let got = tb.get_interval();
    assert_eq!(got.duration(), TimeDelta::hours(1));
    assert!(!got.scaled());
    assert_eq!(got.scale(), None);
}

#[test]
fn no_bounds_never_scales() {
    let auto = Arc::new(MockAutoInterval::new());
    let mut tb = buckets(auto.clone(), Arc::new(settings(50, 1)));
    tb.set_interval("1ms").unwrap();

    let got = tb.get_interval();
    assert_eq!(got.duration(), TimeDelta::milliseconds(1));
    assert!(!got.scaled());
    assert!(auto.calls().is_empty());
}

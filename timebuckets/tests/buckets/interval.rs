use std::sync::Arc;

use chrono::TimeDelta;
use timebuckets::{
    BucketsError, IntervalInput, IntervalSpec, TimeBuckets, TimeUnit, interval_options,
};
use timebuckets_mock::{AutoCall, MockAutoInterval};

use crate::helpers::{buckets, settings, week};

#[test]
fn text_inputs_normalize() {
    let mut tb = TimeBuckets::new();
    assert!(!tb.has_interval());

    for (input, want) in [
        ("auto", IntervalSpec::Auto),
        ("AUTO", IntervalSpec::Auto),
        ("", IntervalSpec::Auto),
        ("hour", IntervalSpec::NamedUnit(TimeUnit::Hour)),
        ("d", IntervalSpec::NamedUnit(TimeUnit::Day)),
        ("week", IntervalSpec::NamedUnit(TimeUnit::Week)),
        ("M", IntervalSpec::NamedUnit(TimeUnit::Month)),
        ("3h", IntervalSpec::Explicit(TimeDelta::hours(3))),
        ("90m", IntervalSpec::Explicit(TimeDelta::minutes(90))),
        ("1500", IntervalSpec::Explicit(TimeDelta::milliseconds(1_500))),
    ] {
        tb.set_interval(input).unwrap();
        assert_eq!(tb.interval(), Some(want), "{input:?}");
    }
    assert!(tb.has_interval());
}

#[test]
fn durations_and_options() {
    let mut tb = TimeBuckets::new();
    tb.set_interval(TimeDelta::minutes(5)).unwrap();
    assert_eq!(tb.interval(), Some(IntervalSpec::Explicit(TimeDelta::minutes(5))));

    tb.set_interval(60_000i64).unwrap();
    assert_eq!(tb.interval(), Some(IntervalSpec::Explicit(TimeDelta::minutes(1))));

    let daily = interval_options()
        .into_iter()
        .find(|o| o.display == "Daily")
        .unwrap();
    tb.set_interval(daily).unwrap();
    assert_eq!(tb.interval(), Some(IntervalSpec::NamedUnit(TimeUnit::Day)));

    tb.set_interval(None::<&str>).unwrap();
    assert_eq!(tb.interval(), Some(IntervalSpec::Auto));
}

#[test]
fn invalid_interval_keeps_previous() {
    let mut tb = TimeBuckets::new();
    tb.set_interval("3h").unwrap();
    for bad in [
        IntervalInput::from("fortnight"),
        IntervalInput::from("0h"),
        IntervalInput::from(TimeDelta::zero()),
        IntervalInput::from(-5i64),
    ] {
        let err = tb.set_interval(bad).unwrap_err();
        assert!(matches!(err, BucketsError::InvalidInterval(_)));
    }
    assert_eq!(tb.interval(), Some(IntervalSpec::Explicit(TimeDelta::hours(3))));
}

#[test]
fn options_list_auto_then_units() {
    let opts = interval_options();
    let values: Vec<&str> = opts.iter().map(|o| o.value.as_str()).collect();
    assert_eq!(values, ["auto", "ms", "s", "m", "h", "d", "w", "M", "y"]);
    assert_eq!(opts[0].display, "Auto");
}

#[test]
fn explicit_interval_skips_auto_calculator() {
    let auto = Arc::new(MockAutoInterval::new());
    let mut tb = buckets(auto.clone(), Arc::new(settings(50, 100)));
    tb.set_bounds(week()).unwrap();
    tb.set_interval("hour").unwrap();

    assert_eq!(tb.resolve(50), TimeDelta::hours(1));
    assert!(auto.calls().is_empty());
}

#[test]
fn auto_uses_bar_target_and_span() {
    let auto = Arc::new(MockAutoInterval::new().with_fixed_near(TimeDelta::hours(2)));
    let mut tb = buckets(auto.clone(), Arc::new(settings(40, 100)));
    tb.set_bounds(week()).unwrap();
    tb.set_interval("auto").unwrap();

    let got = tb.get_interval();
    assert_eq!(got.duration(), TimeDelta::hours(2));
    assert!(!got.scaled());
    assert_eq!(
        auto.calls(),
        vec![AutoCall::Near {
            target_bars: 40,
            span: Some(TimeDelta::days(7))
        }]
    );
}

#[test]
fn unset_interval_resolves_like_auto_without_span() {
    let auto = Arc::new(MockAutoInterval::new().with_fixed_near(TimeDelta::minutes(1)));
    let tb = buckets(auto.clone(), Arc::new(settings(50, 100)));

    assert_eq!(tb.get_interval().duration(), TimeDelta::minutes(1));
    assert_eq!(
        auto.calls(),
        vec![AutoCall::Near {
            target_bars: 50,
            span: None
        }]
    );
}

#[test]
fn sub_millisecond_durations_are_rejected() {
    let mut tb = TimeBuckets::new();
    tb.set_interval("3h").unwrap();
    for bad in [
        TimeDelta::microseconds(500),
        TimeDelta::microseconds(1_500),
        TimeDelta::nanoseconds(1),
        TimeDelta::seconds(2) + TimeDelta::microseconds(1),
    ] {
        let err = tb.set_interval(bad).unwrap_err();
        assert!(matches!(err, BucketsError::InvalidInterval(_)), "{bad:?}");
    }
    assert_eq!(tb.interval(), Some(IntervalSpec::Explicit(TimeDelta::hours(3))));

    tb.set_interval(TimeDelta::microseconds(1_000)).unwrap();
    assert_eq!(tb.interval(), Some(IntervalSpec::Explicit(TimeDelta::milliseconds(1))));
    assert_eq!(tb.get_interval().duration(), TimeDelta::milliseconds(1));
}

use std::sync::Arc;

use chrono::TimeDelta;
use timebuckets::{
    BoundsUpdate, BucketsError, IntervalSpec, PersistedInterval, SerializableState, TimeBuckets,
};
use timebuckets_mock::MockAutoInterval;

use crate::helpers::{builder_with, settings, week};

#[test]
fn serialize_then_restore_reproduces_interval() {
    let mut tb = TimeBuckets::new();
    tb.set_bounds(week()).unwrap();
    tb.set_interval("auto").unwrap();

    let state = tb.serialize();
    assert_eq!(state.i, Some(PersistedInterval::Auto));

    let restored = TimeBuckets::builder().state(state.clone()).build().unwrap();
    assert_eq!(restored.get_bounds(), tb.get_bounds());
    assert_eq!(restored.get_interval(), tb.get_interval());
    assert_eq!(restored.serialize(), state);
}

#[test]
fn fixed_intervals_persist_as_millis() {
    let mut tb = TimeBuckets::new();
    tb.set_interval("hour").unwrap();
    let json = serde_json::to_string(&tb.serialize()).unwrap();
    assert_eq!(json, r#"{"i":3600000}"#);

    let state: SerializableState = serde_json::from_str(&json).unwrap();
    let restored = TimeBuckets::builder().state(state).build().unwrap();
    assert_eq!(
        restored.interval(),
        Some(IntervalSpec::Explicit(TimeDelta::hours(1)))
    );
    assert_eq!(restored.get_interval(), tb.get_interval());
}

#[test]
fn snapshot_is_detached() {
    let mut tb = TimeBuckets::new();
    tb.set_bounds(week()).unwrap();
    let state = tb.serialize();
    tb.clear_bounds();
    assert!(state.lb.is_some() && state.ub.is_some());
}

#[test]
fn half_present_bounds_clear() {
    let (lo, _) = week();
    let mut tb = TimeBuckets::new();
    tb.set_bounds(week()).unwrap();

    let update = tb
        .from_state(&SerializableState {
            lb: Some(lo),
            ub: None,
            i: None,
        })
        .unwrap();
    assert!(matches!(update, BoundsUpdate::Cleared { reason: Some(_) }));
    assert!(!tb.has_bounds());
    assert!(!tb.has_interval());
}

#[test]
fn failed_restore_changes_nothing() {
    let (lo, hi) = week();
    let mut tb = TimeBuckets::new();
    tb.set_bounds((lo, hi)).unwrap();
    tb.set_interval("1d").unwrap();
    let before = tb.serialize();

    let negative = SerializableState {
        lb: Some(hi),
        ub: Some(lo),
        i: Some(PersistedInterval::Auto),
    };
    assert!(matches!(
        tb.from_state(&negative),
        Err(BucketsError::NegativeSpan { .. })
    ));
    assert_eq!(tb.serialize(), before);

    let bad_interval = SerializableState {
        lb: None,
        ub: None,
        i: Some(PersistedInterval::Expression("soon".into())),
    };
    assert!(matches!(
        tb.from_state(&bad_interval),
        Err(BucketsError::InvalidInterval(_))
    ));
    assert_eq!(tb.serialize(), before);
}

#[test]
fn builder_surfaces_state_errors() {
    let (lo, hi) = week();
    let err = builder_with(Arc::new(MockAutoInterval::new()))
        .settings(settings(50, 100))
        .state(SerializableState {
            lb: Some(hi),
            ub: Some(lo),
            i: None,
        })
        .build()
        .unwrap_err();
    assert!(matches!(err, BucketsError::NegativeSpan { .. }));
}

#[test]
fn hand_written_expressions_are_accepted() {
    let state: SerializableState = serde_json::from_str(
        r#"{"lb":"2024-01-01T00:00:00Z","ub":"2024-01-08T00:00:00Z","i":"12h"}"#,
    )
    .unwrap();
    let tb = TimeBuckets::builder().state(state).build().unwrap();
    assert_eq!(tb.get_duration(), Some(TimeDelta::days(7)));
    assert_eq!(tb.get_interval().query_expression(), "12h");
}

#[test]
fn stored_intervals_always_restore() {
    let mut tb = TimeBuckets::new();
    tb.set_interval(TimeDelta::milliseconds(1_500)).unwrap();
    assert!(tb.set_interval(TimeDelta::microseconds(500)).is_err());

    let state = tb.serialize();
    assert_eq!(state.i, Some(PersistedInterval::Millis(1_500)));
    let json = serde_json::to_string(&state).unwrap();
    assert_eq!(json, r#"{"i":1500}"#);

    let parsed: SerializableState = serde_json::from_str(&json).unwrap();
    let restored = TimeBuckets::builder().state(parsed).build().unwrap();
    assert_eq!(restored.interval(), tb.interval());
    assert_eq!(restored.get_interval(), tb.get_interval());
}

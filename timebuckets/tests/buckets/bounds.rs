use chrono::TimeDelta;
use timebuckets::{BoundsInput, BoundsUpdate, BucketsError, TimeBounds, TimeBuckets, TimeLike};

use crate::helpers::{at, week};

#[test]
fn set_bounds_from_pairs_and_sequences() {
    let (lo, hi) = week();
    let mut tb = TimeBuckets::new();

    let update = tb.set_bounds((lo, hi)).unwrap();
    assert!(update.is_set());
    assert_eq!(tb.get_duration(), Some(TimeDelta::days(7)));

    let seq: Vec<TimeLike> = vec!["2024-01-01".into(), 1_704_672_000_000i64.into()];
    tb.set_bounds(seq).unwrap();
    let b = tb.get_bounds().unwrap();
    assert_eq!((b.min(), b.max()), (lo, hi));
}

#[test]
fn extra_sequence_elements_are_ignored() {
    let (lo, hi) = week();
    let mut tb = TimeBuckets::new();
    let seq: Vec<TimeLike> = vec![lo.into(), hi.into(), "garbage".into()];
    assert!(tb.set_bounds(seq).unwrap().is_set());
    assert_eq!(tb.get_duration(), Some(TimeDelta::days(7)));
}

#[test]
fn negative_span_is_fatal_and_keeps_previous_bounds() {
    let (lo, hi) = week();
    let mut tb = TimeBuckets::new();
    tb.set_bounds((lo, hi)).unwrap();

    let err = tb.set_bounds((hi, lo)).unwrap_err();
    assert!(matches!(err, BucketsError::NegativeSpan { .. }));
    assert_eq!(tb.get_bounds(), Some(TimeBounds::new(lo, hi).unwrap()));
}

#[test]
fn unparseable_bounds_clear_and_report() {
    let (lo, hi) = week();
    let mut tb = TimeBuckets::new();
    tb.set_bounds((lo, hi)).unwrap();

    let update = tb.set_bounds(("not a date", hi)).unwrap();
    match update {
        BoundsUpdate::Cleared { reason: Some(err) } => assert!(err.is_recoverable()),
        other => panic!("unexpected {other:?}"),
    }
    assert!(!tb.has_bounds());
    assert_eq!(tb.get_duration(), None);
}

#[test]
fn short_sequence_clears() {
    let mut tb = TimeBuckets::new();
    tb.set_bounds(week()).unwrap();
    let update = tb.set_bounds(vec![TimeLike::from(at(2024, 1, 1, 0))]).unwrap();
    assert!(matches!(update, BoundsUpdate::Cleared { reason: Some(_) }));
    assert!(!tb.has_bounds());
}

#[test]
fn absent_equals_clear() {
    let mut tb = TimeBuckets::new();
    tb.set_bounds(week()).unwrap();
    assert_eq!(
        tb.set_bounds(BoundsInput::Absent).unwrap(),
        BoundsUpdate::Cleared { reason: None }
    );
    assert!(!tb.has_bounds());

    tb.set_bounds(week()).unwrap();
    tb.clear_bounds();
    assert!(!tb.has_bounds());
}

#[test]
fn empty_range_is_allowed() {
    let lo = at(2024, 1, 1, 0);
    let mut tb = TimeBuckets::new();
    tb.set_bounds((lo, lo)).unwrap();
    assert_eq!(tb.get_duration(), Some(TimeDelta::zero()));
}

#[test]
fn bounds_input_from_json() {
    let range: BoundsInput =
        serde_json::from_str(r#"{"min": "2024-01-01T00:00:00Z", "max": 1704672000000}"#).unwrap();
    let seq: BoundsInput = serde_json::from_str(r#"["2024-01-01", "2024-01-08"]"#).unwrap();
    let absent: BoundsInput = serde_json::from_str("null").unwrap();
    assert!(matches!(range, BoundsInput::Range { .. }));
    assert!(matches!(seq, BoundsInput::Sequence(_)));
    assert_eq!(absent, BoundsInput::Absent);

    let mut tb = TimeBuckets::new();
    tb.set_bounds(range).unwrap();
    assert_eq!(tb.get_duration(), Some(TimeDelta::days(7)));
    tb.set_bounds(seq).unwrap();
    assert_eq!(tb.get_duration(), Some(TimeDelta::days(7)));
}

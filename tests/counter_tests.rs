// Host-side tests for the counter animation.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod counter {
    include!("../src/core/counter.rs");
}

use counter::*;

const DURATION_MS: f64 = 2000.0;

#[test]
fn counts_up_to_grouped_target_with_suffix() {
    let spec = CounterSpec::from_attrs(Some("1200"), Some("+")).unwrap();
    let anim = CounterAnimation::new(spec, DURATION_MS);

    let first = anim.frame(0.0);
    assert_eq!(first.text, "0");
    assert!(!first.done);

    let last = anim.frame(DURATION_MS);
    assert_eq!(last.text, "1,200+");
    assert!(last.done);

    // Past the end still shows the final text.
    assert_eq!(anim.frame(DURATION_MS * 3.0).text, "1,200+");
}

#[test]
fn suffix_only_appears_on_the_final_frame() {
    let spec = CounterSpec::from_attrs(Some("500"), Some("%")).unwrap();
    let anim = CounterAnimation::new(spec, DURATION_MS);
    let mut ms = 0.0;
    while ms < DURATION_MS {
        let frame = anim.frame(ms);
        assert!(!frame.text.ends_with('%'), "suffix early at {ms}ms");
        assert!(!frame.done);
        ms += 16.0;
    }
}

#[test]
fn displayed_value_never_decreases() {
    let target = 98_765;
    let mut prev = i64::MIN;
    let mut ms = 0.0;
    while ms <= DURATION_MS + 50.0 {
        let v = value_at(target, ms, DURATION_MS);
        assert!(v >= prev, "value dropped from {prev} to {v} at {ms}ms");
        assert!(v <= target);
        prev = v;
        ms += 7.0;
    }
    assert_eq!(prev, target);
}

#[test]
fn ease_is_front_loaded() {
    assert_eq!(ease_out_quart(0.0), 0.0);
    assert_eq!(ease_out_quart(1.0), 1.0);
    // Half the time covers far more than half the distance.
    assert!((ease_out_quart(0.5) - 0.9375).abs() < 1e-12);
    assert_eq!(ease_out_quart(-1.0), 0.0);
    assert_eq!(ease_out_quart(2.0), 1.0);
}

#[test]
fn non_numeric_counts_are_skipped() {
    assert!(CounterSpec::from_attrs(Some("lots"), None).is_none());
    assert!(CounterSpec::from_attrs(Some(""), Some("+")).is_none());
    assert!(CounterSpec::from_attrs(None, Some("+")).is_none());
}

#[test]
fn empty_suffix_is_no_suffix() {
    let spec = CounterSpec::from_attrs(Some("42"), Some("")).unwrap();
    assert_eq!(spec.suffix, None);
    assert_eq!(spec.final_text(), "42");
}

#[test]
fn leading_integer_parse_is_lenient() {
    assert_eq!(parse_leading_int("1200"), Some(1200));
    assert_eq!(parse_leading_int("  35 dogs"), Some(35));
    assert_eq!(parse_leading_int("12.9"), Some(12));
    assert_eq!(parse_leading_int("-7"), Some(-7));
    assert_eq!(parse_leading_int("+8"), Some(8));
    assert_eq!(parse_leading_int("+"), None);
    assert_eq!(parse_leading_int("x12"), None);
}

#[test]
fn thousands_grouping() {
    assert_eq!(group_thousands(0), "0");
    assert_eq!(group_thousands(999), "999");
    assert_eq!(group_thousands(1000), "1,000");
    assert_eq!(group_thousands(1_234_567), "1,234,567");
    assert_eq!(group_thousands(-45_000), "-45,000");
}

#[test]
fn zero_duration_finishes_immediately() {
    let spec = CounterSpec::from_attrs(Some("10"), None).unwrap();
    let frame = CounterAnimation::new(spec, 0.0).frame(0.0);
    assert!(frame.done);
    assert_eq!(frame.text, "10");
}

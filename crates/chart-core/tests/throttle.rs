// File: crates/chart-core/tests/throttle.rs
// Purpose: Pointer throttle drops bursts and accepts spaced events.

use std::time::{Duration, Instant};

use column_chart_core::{Throttle, POINTER_THROTTLE};

#[test]
fn burst_within_interval_accepts_at_most_one() {
    let t0 = Instant::now();
    let mut throttle = Throttle::default();
    let accepted = (0..20)
        .map(|i| throttle.try_accept(t0 + Duration::from_millis(i * 2)))
        .filter(|ok| *ok)
        .count();
    assert_eq!(accepted, 1);
}

#[test]
fn spaced_events_are_all_accepted() {
    let t0 = Instant::now();
    let mut throttle = Throttle::default();
    let spacing = POINTER_THROTTLE + Duration::from_millis(1);
    for i in 0..10u32 {
        assert!(throttle.try_accept(t0 + spacing * i), "event {i} dropped");
    }
}

#[test]
fn interval_is_about_24_hz() {
    assert_eq!(POINTER_THROTTLE, Duration::from_millis(42));
    assert_eq!(Throttle::default().interval(), POINTER_THROTTLE);
}

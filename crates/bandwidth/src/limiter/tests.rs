use super::{RateWindow, recorded_sleep_session, sleep_for};
use crate::RateLimit;
use proptest::prelude::*;
use std::time::Duration;

const T0: u64 = 1_600_000_000;

fn pace(window: &mut RateWindow, limit: RateLimit, len: u64, second: u64) {
    let delay = window.admit(limit, len, second);
    sleep_for(delay);
}

#[test]
fn unlimited_stream_never_sleeps() {
    let mut session = recorded_sleep_session();
    session.clear();

    let mut window = RateWindow::new();
    for _ in 0..100 {
        pace(&mut window, RateLimit::UNLIMITED, 4096, T0);
    }

    assert!(session.is_empty());
}

#[test]
fn pacing_schedule_follows_overage() {
    let mut session = recorded_sleep_session();
    session.clear();

    let mut window = RateWindow::new();
    let limit = RateLimit::from(10);
    pace(&mut window, limit, 6, T0);
    pace(&mut window, limit, 6, T0);
    pace(&mut window, limit, 6, T0);

    assert_eq!(
        session.take(),
        [Duration::from_millis(200), Duration::from_millis(800)]
    );
}

#[test]
fn second_boundary_clears_debt() {
    let mut session = recorded_sleep_session();
    session.clear();

    let mut window = RateWindow::new();
    let limit = RateLimit::from(100);
    pace(&mut window, limit, 150, T0);
    pace(&mut window, limit, 50, T0 + 2);
    pace(&mut window, limit, 50, T0 + 2);

    assert_eq!(session.take(), [Duration::from_millis(500)]);
}

proptest! {
    #[test]
    fn unlimited_always_zero(lens in proptest::collection::vec(any::<u64>(), 0..32)) {
        let mut window = RateWindow::new();
        for len in lens {
            prop_assert_eq!(window.admit(RateLimit::UNLIMITED, len, T0), Duration::ZERO);
        }
    }

    #[test]
    fn delay_matches_window_overage(
        ceiling in 1u64..1_000_000,
        lens in proptest::collection::vec(0u64..100_000, 1..32),
    ) {
        let limit = RateLimit::from(ceiling);
        let mut window = RateWindow::new();
        for len in lens {
            let delay = window.admit(limit, len, T0);
            let over = window.bytes().saturating_sub(ceiling);
            let expected = u128::from(over) * 1_000_000 / u128::from(ceiling);
            prop_assert_eq!(delay.as_micros(), expected);
        }
    }

    #[test]
    fn window_holds_only_current_second(
        first in 0u64..10_000,
        second in 0u64..10_000,
        gap in 1u64..100,
    ) {
        let limit = RateLimit::from(1);
        let mut window = RateWindow::new();
        let _ = window.admit(limit, first, T0);
        let _ = window.admit(limit, second, T0 + gap);
        prop_assert_eq!(window.bytes(), second);
    }
}

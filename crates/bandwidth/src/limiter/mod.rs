use std::time::Duration;

mod sleep;
mod window;

pub use sleep::{LimiterSleep, sleep_for};
pub use window::RateWindow;

pub(super) use sleep::duration_from_microseconds;

pub(super) const MICROS_PER_SECOND: u128 = 1_000_000;
pub(super) const MAX_REPRESENTABLE_MICROSECONDS: u128 =
    (u64::MAX as u128) * MICROS_PER_SECOND + (MICROS_PER_SECOND - 1);
pub(super) const MAX_SLEEP_DURATION: Duration = Duration::new(i64::MAX as u64, 999_999_999);

#[cfg(any(test, feature = "test-support"))]
mod test_support;
#[cfg(any(test, feature = "test-support"))]
pub(super) use self::test_support::append_recorded_sleeps;
#[cfg(any(test, feature = "test-support"))]
pub use self::test_support::{RecordedSleepSession, recorded_sleep_session};

#[cfg(test)]
mod tests;

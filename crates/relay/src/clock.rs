use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Time source and sleeper used by [`Relay`](crate::Relay).
pub trait Clock {
    /// Current wall-clock time.
    fn now(&self) -> SystemTime;

    /// Blocks for `duration`.
    fn sleep(&mut self, duration: Duration);
}

/// The process wall clock; sleeps block the thread.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> SystemTime {
        SystemTime::now()
    }

    fn sleep(&mut self, duration: Duration) {
        bandwidth::sleep_for(duration);
    }
}

/// Whole seconds since the Unix epoch, `0` for times before it.
#[must_use]
pub fn unix_second(time: SystemTime) -> u64 {
    time.duration_since(UNIX_EPOCH)
        .map_or(0, |since| since.as_secs())
}

#[cfg(any(test, feature = "test-support"))]
mod manual {
    use super::Clock;
    use std::cell::Cell;
    use std::time::{Duration, SystemTime, UNIX_EPOCH};

    /// Deterministic clock for tests.
    ///
    /// Time only moves when [`advance`](Self::advance) is called, when a sleep
    /// is requested, or by the optional per-read tick. Sleeps are recorded
    /// instead of blocking.
    #[derive(Debug)]
    pub struct ManualClock {
        now: Cell<SystemTime>,
        tick: Duration,
        sleeps: Vec<Duration>,
    }

    impl ManualClock {
        /// Starts the clock at `now`.
        #[must_use]
        pub fn starting_at(now: SystemTime) -> Self {
            Self {
                now: Cell::new(now),
                tick: Duration::ZERO,
                sleeps: Vec::new(),
            }
        }

        /// Starts the clock exactly at the given Unix second.
        #[must_use]
        pub fn at_unix_second(second: u64) -> Self {
            Self::starting_at(UNIX_EPOCH + Duration::from_secs(second))
        }

        /// Moves time forward by `tick` after every [`Clock::now`] call.
        #[must_use]
        pub fn with_tick(mut self, tick: Duration) -> Self {
            self.tick = tick;
            self
        }

        /// Moves time forward without recording a sleep.
        pub fn advance(&self, by: Duration) {
            self.now.set(self.now.get() + by);
        }

        /// Every sleep requested so far, in order.
        #[must_use]
        pub fn sleeps(&self) -> &[Duration] {
            &self.sleeps
        }

        /// Sum of all recorded sleeps.
        #[must_use]
        pub fn total_slept(&self) -> Duration {
            self.sleeps.iter().sum()
        }
    }

    impl Default for ManualClock {
        fn default() -> Self {
            Self::starting_at(UNIX_EPOCH)
        }
    }

    impl Clock for ManualClock {
        fn now(&self) -> SystemTime {
            let current = self.now.get();
            self.now.set(current + self.tick);
            current
        }

        fn sleep(&mut self, duration: Duration) {
            self.sleeps.push(duration);
            self.advance(duration);
        }
    }
}

#[cfg(any(test, feature = "test-support"))]
pub use manual::ManualClock;

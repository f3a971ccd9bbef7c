use super::{MICROS_PER_SECOND, duration_from_microseconds};
use crate::RateLimit;
use std::time::Duration;

/// Byte accounting for the current one-second window.
///
/// The window is keyed by whole wall-clock seconds. The first admission in a
/// new second discards whatever the previous second accumulated; admissions
/// within the same second add up until the ceiling is crossed, at which point
/// the caller is told to pause for `overage / ceiling` seconds.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct RateWindow {
    second: Option<u64>,
    bytes: u64,
}

impl RateWindow {
    /// Creates an empty window that has not observed any second yet.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            second: None,
            bytes: 0,
        }
    }

    /// Second the window currently accounts for, if any admission happened.
    #[must_use]
    pub const fn second(&self) -> Option<u64> {
        self.second
    }

    /// Bytes admitted during [`second`](Self::second).
    #[must_use]
    pub const fn bytes(&self) -> u64 {
        self.bytes
    }

    /// Admits `len` bytes observed at `now_second` and returns the pause owed.
    ///
    /// Unlimited configurations return [`Duration::ZERO`] without touching
    /// the window. The returned duration is never negative and saturates at
    /// [`Duration::MAX`] for absurd overages.
    pub fn admit(&mut self, limit: RateLimit, len: u64, now_second: u64) -> Duration {
        let Some(ceiling) = limit.ceiling() else {
            return Duration::ZERO;
        };

        if self.second != Some(now_second) {
            self.second = Some(now_second);
            self.bytes = 0;
        }

        self.bytes = self.bytes.saturating_add(len);

        let ceiling = ceiling.get();
        if self.bytes <= ceiling {
            return Duration::ZERO;
        }

        let overage = u128::from(self.bytes - ceiling);
        let micros = overage.saturating_mul(MICROS_PER_SECOND) / u128::from(ceiling);
        duration_from_microseconds(micros)
    }
}

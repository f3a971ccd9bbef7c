use std::mem;
use std::sync::{Mutex, MutexGuard, OnceLock};
use std::time::Duration;

fn recorded_sleeps() -> &'static Mutex<Vec<Duration>> {
    static RECORDED_SLEEPS: OnceLock<Mutex<Vec<Duration>>> = OnceLock::new();
    RECORDED_SLEEPS.get_or_init(|| Mutex::new(Vec::new()))
}

fn session_lock() -> &'static Mutex<()> {
    static SESSION_LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    SESSION_LOCK.get_or_init(|| Mutex::new(()))
}

fn lock_recorded_sleeps() -> MutexGuard<'static, Vec<Duration>> {
    recorded_sleeps()
        .lock()
        .unwrap_or_else(|poison| poison.into_inner())
}

pub(crate) fn append_recorded_sleeps(chunks: Vec<Duration>) {
    lock_recorded_sleeps().extend(chunks);
}

#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
/// Exclusive handle on the durations recorded by [`sleep_for`](crate::sleep_for).
///
/// Obtain one at the start of a test, [`clear`](Self::clear) it, run the code
/// under test and inspect the captured chunks. Holding the session keeps
/// other tests from draining or appending to the shared buffer meanwhile.
pub struct RecordedSleepSession<'a> {
    _guard: MutexGuard<'a, ()>,
}

impl RecordedSleepSession<'_> {
    /// Discards everything recorded so far.
    pub fn clear(&mut self) {
        lock_recorded_sleeps().clear();
    }

    /// Returns `true` when nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        lock_recorded_sleeps().is_empty()
    }

    /// Number of recorded chunks.
    #[must_use]
    pub fn len(&self) -> usize {
        lock_recorded_sleeps().len()
    }

    /// Saturating sum of every recorded chunk.
    ///
    /// ```
    /// # #[cfg(feature = "test-support")]
    /// # {
    /// use bandwidth::{recorded_sleep_session, sleep_for};
    /// use std::time::Duration;
    ///
    /// let mut session = recorded_sleep_session();
    /// session.clear();
    /// sleep_for(Duration::from_millis(2));
    /// sleep_for(Duration::from_millis(3));
    ///
    /// assert_eq!(session.total_duration(), Duration::from_millis(5));
    /// # }
    /// ```
    #[must_use]
    pub fn total_duration(&self) -> Duration {
        lock_recorded_sleeps()
            .iter()
            .fold(Duration::ZERO, |acc, chunk| acc.saturating_add(*chunk))
    }

    /// Drains the recorded chunks.
    pub fn take(&mut self) -> Vec<Duration> {
        mem::take(&mut *lock_recorded_sleeps())
    }
}

#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
/// Locks the shared sleep recorder for the lifetime of the returned session.
#[must_use]
pub fn recorded_sleep_session() -> RecordedSleepSession<'static> {
    RecordedSleepSession {
        _guard: session_lock()
            .lock()
            .unwrap_or_else(|poison| poison.into_inner()),
    }
}

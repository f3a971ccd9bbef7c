use std::fmt;
use std::io::{self, Write};
use std::time::{Duration, SystemTime};

use crate::state::TransferState;

/// One rendering of the in-place throughput line.
///
/// Elapsed time is counted in whole seconds, so every report issued during
/// the first second of a run shows a rate of zero.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ProgressReport {
    total_bytes: u64,
    elapsed: Duration,
}

impl ProgressReport {
    /// Builds a report from raw figures.
    #[must_use]
    pub const fn new(total_bytes: u64, elapsed: Duration) -> Self {
        Self {
            total_bytes,
            elapsed,
        }
    }

    /// Snapshot of `state` as seen at `now`.
    #[must_use]
    pub fn from_state(state: &TransferState, now: SystemTime) -> Self {
        Self::new(state.total_bytes(), state.elapsed(now))
    }

    /// Bytes relayed so far.
    #[must_use]
    pub const fn total_bytes(&self) -> u64 {
        self.total_bytes
    }

    /// Whole seconds since the run started.
    #[must_use]
    pub const fn elapsed_secs(&self) -> u64 {
        self.elapsed.as_secs()
    }

    /// Average rate since the start, `0.0` when no full second has passed.
    #[must_use]
    pub fn bytes_per_second(&self) -> f64 {
        match self.elapsed_secs() {
            0 => 0.0,
            secs => self.total_bytes as f64 / secs as f64,
        }
    }

    /// [`bytes_per_second`](Self::bytes_per_second) in KiB/s.
    #[must_use]
    pub fn kib_per_second(&self) -> f64 {
        self.bytes_per_second() / 1024.0
    }
}

impl fmt::Display for ProgressReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "\r{} bytes ({:6.1} KB/s)",
            self.total_bytes,
            self.kib_per_second()
        )
    }
}

/// Overwrites the progress line on `writer` and flushes it.
pub fn report<W>(state: &TransferState, now: SystemTime, writer: &mut W) -> io::Result<()>
where
    W: Write + ?Sized,
{
    write!(writer, "{}", ProgressReport::from_state(state, now))?;
    writer.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::UNIX_EPOCH;

    #[test]
    fn zero_elapsed_reports_zero_rate() {
        let report = ProgressReport::new(4096, Duration::ZERO);
        assert_eq!(report.bytes_per_second(), 0.0);
        assert_eq!(report.to_string(), "\r4096 bytes (   0.0 KB/s)");
    }

    #[test]
    fn sub_second_elapsed_still_reports_zero() {
        let report = ProgressReport::new(10, Duration::from_millis(999));
        assert_eq!(report.kib_per_second(), 0.0);
    }

    #[test]
    fn rate_is_kib_with_one_decimal() {
        let report = ProgressReport::new(2048, Duration::from_secs(2));
        assert_eq!(report.to_string(), "\r2048 bytes (   1.0 KB/s)");

        let report = ProgressReport::new(3 * 1024 * 1024, Duration::from_secs(3));
        assert_eq!(report.to_string(), "\r3145728 bytes (1024.0 KB/s)");

        let report = ProgressReport::new(100, Duration::from_secs(1));
        assert_eq!(report.to_string(), "\r100 bytes (   0.1 KB/s)");
    }

    #[test]
    fn wide_rates_are_not_truncated() {
        let report = ProgressReport::new(1024 * 1024 * 1024, Duration::from_secs(1));
        assert_eq!(report.to_string(), "\r1073741824 bytes (1048576.0 KB/s)");
    }

    #[test]
    fn report_renders_state_and_flushes() {
        let mut state = TransferState::new();
        let start = UNIX_EPOCH + Duration::from_secs(1_000);
        state.mark_started(start);
        state.record_line(5120);

        let mut out = Vec::new();
        report(&state, start + Duration::from_secs(5), &mut out).expect("report");
        assert_eq!(out, b"\r5120 bytes (   1.0 KB/s)");
    }

    #[test]
    fn report_with_clock_at_start_is_zero_rate() {
        let mut state = TransferState::new();
        let start = UNIX_EPOCH + Duration::from_secs(7);
        state.mark_started(start);
        state.record_line(1);

        let mut out = Vec::new();
        report(&state, start, &mut out).expect("report");
        assert_eq!(out, b"\r1 bytes (   0.0 KB/s)");
    }
}

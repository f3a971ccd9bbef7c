use std::time::{Duration, SystemTime};

use bandwidth::RateWindow;

/// Mutable bookkeeping for one run, owned by the [`Relay`](crate::Relay).
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct TransferState {
    total_bytes: u64,
    lines: u64,
    start_time: Option<SystemTime>,
    window: RateWindow,
}

impl TransferState {
    /// Creates an empty state; the clock starts at the first source.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            total_bytes: 0,
            lines: 0,
            start_time: None,
            window: RateWindow::new(),
        }
    }

    /// Bytes relayed so far, terminators included.
    #[must_use]
    pub const fn total_bytes(&self) -> u64 {
        self.total_bytes
    }

    /// Lines relayed so far.
    #[must_use]
    pub const fn lines(&self) -> u64 {
        self.lines
    }

    /// When the first source was opened.
    #[must_use]
    pub const fn start_time(&self) -> Option<SystemTime> {
        self.start_time
    }

    /// Current rate window.
    #[must_use]
    pub const fn window(&self) -> &RateWindow {
        &self.window
    }

    pub(crate) fn window_mut(&mut self) -> &mut RateWindow {
        &mut self.window
    }

    /// Records the run start. Later calls keep the first timestamp.
    pub fn mark_started(&mut self, now: SystemTime) {
        self.start_time.get_or_insert(now);
    }

    /// Counts one emitted line of `len` bytes.
    pub fn record_line(&mut self, len: u64) {
        self.total_bytes = self.total_bytes.saturating_add(len);
        self.lines = self.lines.saturating_add(1);
    }

    /// Time since the run started; zero before the start or if the clock went backwards.
    #[must_use]
    pub fn elapsed(&self, now: SystemTime) -> Duration {
        self.start_time
            .and_then(|start| now.duration_since(start).ok())
            .unwrap_or_default()
    }
}

/// Totals reported once a run has finished.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct TransferSummary {
    pub(crate) total_bytes: u64,
    pub(crate) lines: u64,
    pub(crate) sources_relayed: usize,
    pub(crate) sources_failed: usize,
    pub(crate) read_errors: usize,
    pub(crate) elapsed: Duration,
}

impl TransferSummary {
    /// Bytes written to the output.
    #[must_use]
    pub const fn total_bytes(&self) -> u64 {
        self.total_bytes
    }

    /// Lines written to the output.
    #[must_use]
    pub const fn lines(&self) -> u64 {
        self.lines
    }

    /// Sources that were opened and relayed, including those cut short by a read error.
    #[must_use]
    pub const fn sources_relayed(&self) -> usize {
        self.sources_relayed
    }

    /// Sources that could not be opened.
    #[must_use]
    pub const fn sources_failed(&self) -> usize {
        self.sources_failed
    }

    /// Sources that ended early because of a read error.
    #[must_use]
    pub const fn read_errors(&self) -> usize {
        self.read_errors
    }

    /// Wall-clock time between the first open and the end of the run.
    #[must_use]
    pub const fn elapsed(&self) -> Duration {
        self.elapsed
    }
}

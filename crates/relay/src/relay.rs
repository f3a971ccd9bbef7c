use std::io::{BufRead, Write};
use std::time::Duration;

use bandwidth::LimiterSleep;
use logging::{Diagnostic, MessageSink};
use tracing::{debug, trace, warn};

use crate::clock::{Clock, SystemClock, unix_second};
use crate::config::RunConfig;
use crate::error::{RelayError, describe_io_error};
use crate::reader::LineReader;
use crate::source::InputSpec;
use crate::state::{TransferState, TransferSummary};
use crate::stats::report;

/// How a single source ended.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SourceOutcome {
    /// Every line was relayed.
    Completed,
    /// The source could not be opened and was skipped.
    OpenFailed,
    /// A read error stopped the source early.
    ReadFailed,
}

/// The rate-limited line relay.
///
/// Writes relayed lines to `Out` and progress plus diagnostics to `Err`.
/// All counters are cumulative across every source handed to the same relay.
pub struct Relay<'a, Out, Err, C = SystemClock> {
    config: &'a RunConfig,
    state: TransferState,
    clock: C,
    output: Out,
    diagnostics: MessageSink<Err>,
    sources_relayed: usize,
    sources_failed: usize,
    read_errors: usize,
    progress_pending: bool,
}

impl<'a, Out, Err> Relay<'a, Out, Err, SystemClock>
where
    Out: Write,
    Err: Write,
{
    /// Creates a relay driven by the system clock.
    pub fn new(config: &'a RunConfig, output: Out, diagnostics: Err) -> Self {
        Self::with_clock(config, output, diagnostics, SystemClock)
    }
}

impl<'a, Out, Err, C> Relay<'a, Out, Err, C>
where
    Out: Write,
    Err: Write,
    C: Clock,
{
    /// Creates a relay driven by `clock`.
    pub fn with_clock(config: &'a RunConfig, output: Out, diagnostics: Err, clock: C) -> Self {
        Self {
            config,
            state: TransferState::new(),
            clock,
            output,
            diagnostics: MessageSink::new(diagnostics),
            sources_relayed: 0,
            sources_failed: 0,
            read_errors: 0,
            progress_pending: false,
        }
    }

    /// Relays every source in order, then [`finish`](Self::finish)es the run.
    pub fn run<I>(&mut self, sources: I) -> Result<TransferSummary, RelayError>
    where
        I: IntoIterator<Item = InputSpec>,
    {
        for spec in sources {
            if let Err(error) = self.relay_spec(&spec) {
                self.end_progress_line();
                return Err(error);
            }
        }
        Ok(self.finish())
    }

    /// Opens `spec` and relays it. Open failures are reported and skipped.
    pub fn relay_spec(&mut self, spec: &InputSpec) -> Result<SourceOutcome, RelayError> {
        let label = spec.label();
        match spec.open() {
            Ok(reader) => self.relay_source(&label, reader),
            Err(error) => {
                debug!(target: "pv_like::relay", source = %label, %error, "open failed");
                self.sources_failed += 1;
                self.diagnose(Diagnostic::error(format!(
                    "{label}: {}",
                    describe_io_error(&error)
                )));
                Ok(SourceOutcome::OpenFailed)
            }
        }
    }

    /// Relays an already opened source. `label` names it in diagnostics.
    ///
    /// The reader is dropped before this returns, whatever the outcome.
    pub fn relay_source<R>(&mut self, label: &str, reader: R) -> Result<SourceOutcome, RelayError>
    where
        R: BufRead,
    {
        self.state.mark_started(self.clock.now());
        self.sources_relayed += 1;
        debug!(target: "pv_like::relay", source = label, "relaying");

        let mut reader = LineReader::new(reader);
        let mut line = Vec::new();
        let outcome = loop {
            match reader.read_line(&mut line) {
                Ok(Some(_)) => {
                    let sleep = self.relay_line(&line)?;
                    if !sleep.is_noop() {
                        trace!(
                            target: "pv_like::relay",
                            requested = ?sleep.requested(),
                            actual = ?sleep.actual(),
                            "throttled"
                        );
                    }
                }
                Ok(None) => break SourceOutcome::Completed,
                Err(error) => {
                    warn!(target: "pv_like::relay", source = label, %error, "read failed");
                    self.read_errors += 1;
                    self.diagnose(Diagnostic::warning(format!(
                        "{label}: read error: {}",
                        describe_io_error(&error)
                    )));
                    break SourceOutcome::ReadFailed;
                }
            }
        };

        debug!(
            target: "pv_like::relay",
            source = label,
            ?outcome,
            total_bytes = self.state.total_bytes(),
            "source done"
        );
        Ok(outcome)
    }

    /// Paces, writes and counts one line.
    pub fn relay_line(&mut self, line: &[u8]) -> Result<LimiterSleep, RelayError> {
        let len = line.len() as u64;
        let sleep = self.throttle(len);

        self.output.write_all(line).map_err(RelayError::output)?;
        self.output.flush().map_err(RelayError::output)?;

        self.state.record_line(len);
        if !self.config.quiet() {
            self.report_progress();
        }
        Ok(sleep)
    }

    fn throttle(&mut self, len: u64) -> LimiterSleep {
        let now = self.clock.now();
        let delay = self
            .state
            .window_mut()
            .admit(self.config.rate_limit(), len, unix_second(now));
        if delay.is_zero() {
            return LimiterSleep::default();
        }

        let before = self.clock.now();
        self.clock.sleep(delay);
        let actual = self
            .clock
            .now()
            .duration_since(before)
            .unwrap_or(Duration::ZERO);
        LimiterSleep::new(delay, actual)
    }

    fn report_progress(&mut self) {
        let now = self.clock.now();
        // Progress is best effort; a closed stderr must not stop the data.
        let _ = report(&self.state, now, self.diagnostics.writer_mut());
        self.progress_pending = true;
    }

    /// Terminates the in-place progress line if one is showing.
    fn end_progress_line(&mut self) {
        if self.progress_pending {
            let _ = self.diagnostics.write_raw(b"\n");
            self.progress_pending = false;
        }
    }

    fn diagnose(&mut self, diagnostic: Diagnostic) {
        self.end_progress_line();
        let _ = self.diagnostics.write(diagnostic);
    }

    /// Ends the progress line, if one was drawn, and returns the run totals.
    pub fn finish(&mut self) -> TransferSummary {
        self.end_progress_line();

        let summary = TransferSummary {
            total_bytes: self.state.total_bytes(),
            lines: self.state.lines(),
            sources_relayed: self.sources_relayed,
            sources_failed: self.sources_failed,
            read_errors: self.read_errors,
            elapsed: self.state.elapsed(self.clock.now()),
        };
        debug!(target: "pv_like::relay", ?summary, "run finished");
        summary
    }

    /// Run state so far.
    pub const fn state(&self) -> &TransferState {
        &self.state
    }

    /// Clock driving the relay.
    pub const fn clock(&self) -> &C {
        &self.clock
    }
}

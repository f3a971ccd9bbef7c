#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `relay` is the core of `pv-like`: it pulls lines from an ordered list of
//! input sources, forwards each one verbatim to an output writer, paces the
//! stream against the configured [`RateLimit`](bandwidth::RateLimit) and keeps
//! a cumulative throughput report up to date on the diagnostic stream.
//!
//! # Design
//!
//! [`Relay`] owns the single [`TransferState`] of a run and borrows the
//! read-only [`RunConfig`]. Per line it asks the state's
//! [`RateWindow`](bandwidth::RateWindow) for a delay, sleeps through the
//! [`Clock`], writes and flushes the line, counts it, and re-renders the
//! [`ProgressReport`] in place. Sources are opened one at a time through
//! [`InputSpec::open`] and dropped before the next is opened. Lines come from
//! [`LineReader`], which scans the reader's buffer with `memchr`.
//!
//! # Invariants
//!
//! - Output bytes equal input bytes of every successfully opened source, in
//!   order; nothing is added, dropped or reordered.
//! - `total_bytes` only grows and equals the summed length of emitted lines.
//! - The rate window resets exactly when the wall-clock second changes.
//! - Diagnostics and progress never reach the output writer.
//!
//! # Errors
//!
//! Open and read failures are reported on the diagnostic stream and only end
//! the affected source. A failure to write relayed data is fatal and surfaces
//! as [`RelayError::Output`].
//!
//! # Examples
//!
//! ```
//! use bandwidth::RateLimit;
//! use relay::{Relay, RunConfig};
//!
//! let config = RunConfig::new(true, RateLimit::UNLIMITED);
//! let mut stdout = Vec::new();
//! let mut stderr = Vec::new();
//!
//! let mut relay = Relay::new(&config, &mut stdout, &mut stderr);
//! relay.relay_source("stdin", &b"a\nb\n"[..])?;
//! let summary = relay.finish();
//!
//! assert_eq!(summary.total_bytes(), 4);
//! assert_eq!(stdout, b"a\nb\n");
//! assert!(stderr.is_empty());
//! # Ok::<(), relay::RelayError>(())
//! ```

mod clock;
mod config;
mod error;
mod reader;
mod relay;
mod source;
mod state;
mod stats;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub use clock::ManualClock;
pub use clock::{Clock, SystemClock, unix_second};
pub use config::RunConfig;
pub use error::RelayError;
pub use reader::{LineReader, Lines};
pub use relay::{Relay, SourceOutcome};
pub use source::InputSpec;
pub use state::{TransferState, TransferSummary};
pub use stats::{ProgressReport, report};

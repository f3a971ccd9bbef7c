#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `logging` owns everything `pv-like` writes to the diagnostic stream that is
//! not relayed data: user-facing diagnostics (open failures, read errors, the
//! terminal prompt) and the optional `tracing` subscriber used for internal
//! debug records.
//!
//! # Design
//!
//! [`MessageSink`] wraps an [`io::Write`](std::io::Write) implementor and
//! renders [`Diagnostic`] values one per line; pre-rendered text such as the
//! progress line goes through [`MessageSink::write_raw`]. [`init_tracing`]
//! installs a `tracing-subscriber` registry filtered by [`LogConfig`], which
//! is read from the `PV_LIKE_LOG` environment variable.
//!
//! # Invariants
//!
//! - The sink never buffers: each diagnostic is flushed once written so it
//!   interleaves correctly with the in-place progress line.
//! - Tracing output is off unless `PV_LIKE_LOG` asks for it.
//!
//! # Examples
//!
//! ```
//! use logging::{Diagnostic, MessageSink};
//!
//! let mut sink = MessageSink::new(Vec::new());
//! sink.write(Diagnostic::error("missing.txt: No such file or directory"))?;
//! sink.write(Diagnostic::warning("input.log: read error: Input/output error"))?;
//!
//! let output = String::from_utf8(sink.into_inner()).unwrap();
//! assert_eq!(
//!     output,
//!     "missing.txt: No such file or directory\nwarning: input.log: read error: Input/output error\n"
//! );
//! # Ok::<(), std::io::Error>(())
//! ```

mod config;
mod diagnostic;
mod sink;
mod tracing_init;

pub use config::{DEFAULT_FILTER, LOG_ENV_VAR, LogConfig};
pub use diagnostic::{Diagnostic, Severity};
pub use sink::MessageSink;
pub use tracing_init::init_tracing;

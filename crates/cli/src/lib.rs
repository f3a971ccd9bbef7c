#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `cli` is the command-line front-end of `pv-like`. It parses the small
//! option surface (`-q`, `-L RATE`, `-h`, `-v` and their long forms), decides
//! which inputs to relay, and hands them to [`relay::Relay`]. Everything
//! user-visible that is not relayed data (usage, prompts, diagnostics and the
//! progress line) goes to the diagnostic stream.
//!
//! # Design
//!
//! [`run`] takes the argument iterator together with handles for standard
//! output and error so the binary and the tests drive the exact same code. A
//! [`clap`](https://docs.rs/clap/) builder command performs the parse with its
//! built-in help and version flags disabled; the front-end renders both itself
//! so their wording stays fixed. The rate argument goes through the permissive
//! [`RateLimit::parse`](bandwidth::RateLimit::parse), so a malformed value
//! disables limiting instead of failing the run.
//!
//! # Invariants
//!
//! - `run` never panics; failures surface as exit codes.
//! - Help and version requests never touch any input source.
//! - Nothing but relayed bytes is ever written to the output handle, with the
//!   single exception of the version banner.
//!
//! # Errors
//!
//! Usage errors print the parser's complaint followed by the usage text and
//! yield exit code `1`. A failure to write relayed data also yields `1`.
//! Missing or unreadable inputs are reported but leave the exit code at `0`.
//!
//! # Examples
//!
//! ```
//! let mut stdout = Vec::new();
//! let mut stderr = Vec::new();
//! let exit_code = cli::run(["pv-like", "--version"], &mut stdout, &mut stderr);
//!
//! assert_eq!(exit_code, 0);
//! assert_eq!(stdout, b"pv-like 1.1\n");
//! assert!(stderr.is_empty());
//! ```

mod frontend;

pub use frontend::{HELP_TEXT, VERSION_TEXT, exit_code_from, run};

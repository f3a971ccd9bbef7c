mod arguments;
mod command_builder;

use std::ffi::OsString;
use std::io::{self, Write};

use is_terminal::IsTerminal;
use logging::{Diagnostic, LogConfig, MessageSink, init_tracing};
use relay::Relay;
use tracing::debug;

use arguments::{ParsedArgs, Request, parse_args};

/// Maximum exit code representable by a Unix process.
const MAX_EXIT_CODE: i32 = u8::MAX as i32;

const PROGRAM_NAME: &str = "pv-like";

/// Banner printed by `--version`.
pub const VERSION_TEXT: &str = concat!(
    "pv-like ",
    env!("CARGO_PKG_VERSION_MAJOR"),
    ".",
    env!("CARGO_PKG_VERSION_MINOR"),
);

/// Usage text printed by `--help` and after usage errors.
pub const HELP_TEXT: &str = concat!(
    "Usage: pv-like [-q] [-L RATE] [FILE]...\n",
    "Line-by-line pipe viewer with rate limiting\n",
    "\n",
    "Options:\n",
    "  -q         Quiet mode, no statistics\n",
    "  -L RATE    Limit transfer to RATE bytes per second\n",
    "  --help     Display this help and exit\n",
    "  --version  Output version information and exit\n",
);

const WAITING_PROMPT: &str = "Waiting for line input... (use pipe or specify files)";

/// Runs the CLI using the provided argument iterator and output handles.
///
/// Returns the process exit code the caller should use.
pub fn run<I, S, Out, Err>(arguments: I, stdout: &mut Out, stderr: &mut Err) -> i32
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
    Out: Write,
    Err: Write,
{
    init_tracing(&LogConfig::from_env());

    let mut stderr_sink = MessageSink::new(stderr);
    match parse_args(arguments) {
        Ok(Request::Help) => {
            let _ = stderr_sink.write_raw(HELP_TEXT.as_bytes());
            0
        }
        Ok(Request::Version) => match write_version(stdout) {
            Ok(()) => 0,
            Err(_) => 1,
        },
        Ok(Request::Relay(parsed)) => {
            let stdin_is_terminal = io::stdin().is_terminal();
            execute(&parsed, stdout, &mut stderr_sink, stdin_is_terminal)
        }
        Err(error) => {
            report_usage_error(&error, &mut stderr_sink);
            1
        }
    }
}

fn write_version<Out: Write>(stdout: &mut Out) -> io::Result<()> {
    writeln!(stdout, "{VERSION_TEXT}")?;
    stdout.flush()
}

fn report_usage_error<Err: Write>(error: &clap::Error, stderr: &mut MessageSink<Err>) {
    let rendered = error.to_string();
    let detail = rendered
        .lines()
        .next()
        .unwrap_or_default()
        .trim_start_matches("error: ");
    let _ = stderr.write(Diagnostic::error(format!("{PROGRAM_NAME}: {detail}")));
    let _ = stderr.write_raw(HELP_TEXT.as_bytes());
}

/// Only an interactive, non-quiet read of standard input gets the prompt.
fn should_prompt(parsed: &ParsedArgs, stdin_is_terminal: bool) -> bool {
    stdin_is_terminal && parsed.reads_stdin() && !parsed.quiet
}

fn execute<Out, Err>(
    parsed: &ParsedArgs,
    stdout: &mut Out,
    stderr: &mut MessageSink<Err>,
    stdin_is_terminal: bool,
) -> i32
where
    Out: Write,
    Err: Write,
{
    if should_prompt(parsed, stdin_is_terminal) {
        let _ = stderr.write(Diagnostic::info(WAITING_PROMPT));
    }

    let config = parsed.run_config();
    debug!(
        target: "pv_like::cli",
        quiet = config.quiet(),
        rate_limit = %config.rate_limit(),
        inputs = parsed.files.len(),
        "starting relay"
    );

    let result = Relay::new(&config, &mut *stdout, stderr.writer_mut()).run(parsed.inputs());
    match result {
        Ok(summary) => {
            debug!(
                target: "pv_like::cli",
                total_bytes = summary.total_bytes(),
                sources_failed = summary.sources_failed(),
                "relay complete"
            );
            0
        }
        Err(error) => {
            // A vanished reader is the normal end of a pipeline.
            if !error.is_broken_pipe() {
                let _ = stderr.write(Diagnostic::error(format!("{PROGRAM_NAME}: {error}")));
            }
            1
        }
    }
}

/// Converts a numeric exit code into an [`std::process::ExitCode`].
#[must_use]
pub fn exit_code_from(status: i32) -> std::process::ExitCode {
    let clamped = status.clamp(0, MAX_EXIT_CODE);
    std::process::ExitCode::from(clamped as u8)
}

use std::ffi::OsString;

use bandwidth::RateLimit;
use relay::{InputSpec, RunConfig};

use super::PROGRAM_NAME;
use super::command_builder::clap_command;

/// What the command line asked for.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) enum Request {
    /// `-h`/`--help`.
    Help,
    /// `-v`/`--version`.
    Version,
    /// Relay the listed inputs, or standard input when there are none.
    Relay(ParsedArgs),
}

/// Options for a relay run.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct ParsedArgs {
    pub(crate) quiet: bool,
    pub(crate) rate_limit: RateLimit,
    pub(crate) files: Vec<OsString>,
}

impl ParsedArgs {
    pub(crate) const fn run_config(&self) -> RunConfig {
        RunConfig::new(self.quiet, self.rate_limit)
    }

    /// Inputs in command-line order; standard input when none were named.
    pub(crate) fn inputs(&self) -> Vec<InputSpec> {
        if self.files.is_empty() {
            vec![InputSpec::Stdin]
        } else {
            self.files.iter().cloned().map(InputSpec::from).collect()
        }
    }

    pub(crate) fn reads_stdin(&self) -> bool {
        self.files.is_empty()
    }
}

/// Parses command-line arguments into a [`Request`].
///
/// When both help and version are requested the earlier one wins, the way a
/// getopt loop would exit on whichever it meets first.
pub(crate) fn parse_args<I, S>(arguments: I) -> Result<Request, clap::Error>
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
{
    let mut args: Vec<OsString> = arguments.into_iter().map(Into::into).collect();
    if args.is_empty() {
        args.push(OsString::from(PROGRAM_NAME));
    }

    let mut matches = clap_command().try_get_matches_from(args)?;

    let show_help = matches.get_flag("help");
    let show_version = matches.get_flag("version");
    match (show_help, show_version) {
        (true, true) if matches.index_of("version") < matches.index_of("help") => {
            return Ok(Request::Version);
        }
        (true, _) => return Ok(Request::Help),
        (false, true) => return Ok(Request::Version),
        (false, false) => {}
    }

    let quiet = matches.get_flag("quiet");
    let rate_limit = matches
        .remove_one::<OsString>("rate-limit")
        .map_or(RateLimit::UNLIMITED, |value| RateLimit::parse(&value));
    let files = matches
        .remove_many::<OsString>("files")
        .map(Iterator::collect)
        .unwrap_or_default();

    Ok(Request::Relay(ParsedArgs {
        quiet,
        rate_limit,
        files,
    }))
}

use clap::{Arg, ArgAction, Command as ClapCommand, builder::OsStringValueParser};

use super::PROGRAM_NAME;

/// Builds the `clap` command used for parsing.
///
/// Help and version are plain flags so the front-end controls their output.
/// Repeated options override earlier occurrences, matching getopt.
pub(crate) fn clap_command() -> ClapCommand {
    ClapCommand::new(PROGRAM_NAME)
        .disable_help_flag(true)
        .disable_version_flag(true)
        .args_override_self(true)
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .short('q')
                .help("Quiet mode, no statistics")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("rate-limit")
                .long("rate-limit")
                .short('L')
                .value_name("RATE")
                .help("Limit transfer to RATE bytes per second")
                .num_args(1)
                .allow_hyphen_values(true)
                .action(ArgAction::Set)
                .value_parser(OsStringValueParser::new()),
        )
        .arg(
            Arg::new("help")
                .long("help")
                .short('h')
                .help("Display this help and exit")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("version")
                .long("version")
                .short('v')
                .help("Output version information and exit")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("files")
                .value_name("FILE")
                .action(ArgAction::Append)
                .num_args(0..)
                .value_parser(OsStringValueParser::new()),
        )
}

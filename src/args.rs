use clap::{Arg, ArgAction, Command};

/// Command line definition for the `reedsol` binary
pub fn command() -> Command {
    Command::new("reedsol")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Systematic Reed-Solomon encoder over GF(256)")
        .arg(
            Arg::new("messages")
                .help("Messages to encode (default: \"Test message\")")
                .num_args(0..)
                .index(1),
        )
        .arg(
            Arg::new("parity")
                .short('n')
                .long("parity")
                .help("Number of parity symbols per codeword (default: 12)")
                .value_name("COUNT")
                .allow_negative_numbers(true),
        )
        .arg(
            Arg::new("format")
                .short('f')
                .long("format")
                .help("Output format: decimal, binary or both (default: both)")
                .value_name("FORMAT"),
        )
        .arg(
            Arg::new("threads")
                .short('t')
                .long("threads")
                .help("Number of CPU threads for batch encoding (0 = auto-detect)")
                .value_name("N"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Log encoder activity")
                .action(ArgAction::SetTrue),
        )
}

pub fn parse_args() -> clap::ArgMatches {
    command().get_matches()
}

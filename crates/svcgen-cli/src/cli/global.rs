//! Flags that shape how svcgen talks, not what it does: verbosity, colour,
//! config file and output format.  Flattened into [`super::Cli`].

use std::path::PathBuf;

use clap::{Args, ValueEnum, builder::FalseyValueParser};

#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// More log detail on stderr; repeat for more (`-v` info, `-vv` debug,
    /// `-vvv` trace).
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "Increase log verbosity (-v, -vv, -vvv)"
    )]
    pub verbose: u8,

    /// Errors only.  Generator, gh and git output is inherited and still
    /// shows.
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        conflicts_with = "verbose",
        help = "Only report errors"
    )]
    pub quiet: bool,

    /// Plain output; also set by any `NO_COLOR` other than empty, `0`,
    /// `false`, `no` or `off`.
    #[arg(
        long = "no-color",
        global = true,
        env = "NO_COLOR",
        value_parser = FalseyValueParser::new(),
        help = "Disable colored output"
    )]
    pub no_color: bool,

    /// TOML file layered over the defaults. Must exist when given.
    #[arg(
        short = 'c',
        long = "config",
        global = true,
        value_name = "FILE",
        help = "Read configuration from FILE"
    )]
    pub config: Option<PathBuf>,

    #[arg(
        long = "output-format",
        global = true,
        value_enum,
        default_value = "auto",
        help = "Console output format"
    )]
    pub output_format: OutputFormat,
}

/// How stdout is rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `human` on a terminal, `plain` otherwise.
    #[default]
    Auto,
    /// Colored markers and headers.
    Human,
    /// Same text, no ANSI codes.
    Plain,
    /// One JSON object per line.
    Json,
}

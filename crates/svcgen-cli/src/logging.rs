//! Tracing subscriber setup.
//!
//! The binary is the only place a subscriber is installed; `svcgen-core` and
//! `svcgen-adapters` just emit events. Logs go to stderr so they never mix
//! with the descriptor summary or the plan on stdout.
//!
//! | Flag(s)   | Level |
//! |-----------|-------|
//! | (none)    | WARN  |
//! | `-v`      | INFO  |
//! | `-vv`     | DEBUG |
//! | `-vvv`    | TRACE |
//! | `--quiet` | ERROR |
//!
//! A set `RUST_LOG` replaces the table entirely.

use std::io::IsTerminal as _;

use tracing::Level;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::GlobalArgs;

/// Crates whose events are shown at the chosen level.
const TARGETS: [&str; 3] = ["svcgen", "svcgen_core", "svcgen_adapters"];

/// Install the global subscriber. Call once, before the first event.
pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(directives(level_for(args))));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!args.no_color && std::io::stderr().is_terminal())
        .with_target(false)
        .with_file(false)
        .with_line_number(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialise tracing: {e}"))
}

fn level_for(args: &GlobalArgs) -> Level {
    if args.quiet {
        return Level::ERROR;
    }
    match args.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

fn directives(level: Level) -> String {
    let level = level.to_string().to_ascii_lowercase();
    TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

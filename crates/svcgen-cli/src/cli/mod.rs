//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser};
use clap_complete::Shell;

pub mod global;
pub use global::GlobalArgs;

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "svcgen",
    bin_name = "svcgen",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} Generate and publish a service from its source.yml",
    long_about = "svcgen reads a service's source.yml, runs the code generator for \
                  its language, creates the remote repository and pushes the \
                  generated code.",
    after_help = "EXAMPLES:\n\
        \x20 svcgen sources-service/sample\n\
        \x20 svcgen sources-service/sample --dry-run\n\
        \x20 svcgen --show-config\n\
        \x20 svcgen --completions bash > ~/.local/share/bash-completion/completions/svcgen",
)]
pub struct Cli {
    /// Logging, colour and config flags.
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(flatten)]
    pub run: RunArgs,
}

/// What to process and how.
#[derive(Debug, Args)]
pub struct RunArgs {
    /// Directory containing `source.yml`.
    #[arg(value_name = "SERVICE_DIR", help = "Service folder containing source.yml")]
    pub service_dir: Option<PathBuf>,

    /// Print every command that would run, without running any.
    #[arg(long = "dry-run", help = "Show the provisioning plan without executing it")]
    pub dry_run: bool,

    /// Print the effective configuration and exit.
    #[arg(
        long = "show-config",
        conflicts_with_all = ["dry_run", "completions"],
        help = "Print the effective configuration as TOML"
    )]
    pub show_config: bool,

    /// Print a shell completion script and exit.
    #[arg(
        long = "completions",
        value_name = "SHELL",
        value_enum,
        conflicts_with = "dry_run",
        help = "Generate shell completions"
    )]
    pub completions: Option<Shell>,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use super::global::OutputFormat;

    #[test]
    fn verify_cli_structure() {
        Cli::command().debug_assert();
    }

    #[test]
    fn service_dir_is_positional() {
        let cli = Cli::parse_from(["svcgen", "sources-service/sample"]);
        assert_eq!(
            cli.run.service_dir,
            Some(PathBuf::from("sources-service/sample"))
        );
        assert!(!cli.run.dry_run);
    }

    #[test]
    fn service_dir_is_optional_at_parse_time() {
        let cli = Cli::parse_from(["svcgen"]);
        assert!(cli.run.service_dir.is_none());
    }

    #[test]
    fn dry_run_flag() {
        let cli = Cli::parse_from(["svcgen", "svc", "--dry-run"]);
        assert!(cli.run.dry_run);
    }

    #[test]
    fn completions_takes_a_shell() {
        let cli = Cli::parse_from(["svcgen", "--completions", "zsh"]);
        assert_eq!(cli.run.completions, Some(Shell::Zsh));
    }

    #[test]
    fn unknown_shell_is_rejected() {
        assert!(Cli::try_parse_from(["svcgen", "--completions", "tcsh"]).is_err());
    }

    #[test]
    fn show_config_conflicts_with_dry_run() {
        assert!(Cli::try_parse_from(["svcgen", "--show-config", "--dry-run"]).is_err());
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["svcgen", "--quiet", "--verbose", "svc"]);
        assert!(result.is_err());
    }

    #[test]
    fn output_format_parses() {
        let cli = Cli::parse_from(["svcgen", "--output-format", "json", "svc"]);
        assert_eq!(cli.global.output_format, OutputFormat::Json);
    }
}

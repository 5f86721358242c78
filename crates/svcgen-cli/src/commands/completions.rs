//! Shell completion generation.

use clap::CommandFactory;
use clap_complete::{Shell, generate};

use crate::cli::Cli;

pub fn execute(shell: Shell) -> crate::error::CliResult<()> {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "svcgen", &mut std::io::stdout());
    Ok(())
}

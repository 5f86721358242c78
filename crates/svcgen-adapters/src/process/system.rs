//! Process runner backed by `std::process::Command`.

use std::process::{Command, Stdio};

use tracing::{debug, warn};

use svcgen_core::application::ports::{CommandError, CommandRunner};
use svcgen_core::domain::CommandSpec;

/// Production runner: spawns the program, waits for it, and lets it write
/// straight to this process's stdout and stderr.
#[derive(Debug, Clone, Copy)]
pub struct ProcessRunner;

impl ProcessRunner {
    /// Create a new process runner.
    pub fn new() -> Self {
        Self
    }
}

impl Default for ProcessRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRunner for ProcessRunner {
    fn run(&self, spec: &CommandSpec) -> Result<(), CommandError> {
        let mut command = Command::new(spec.program());
        command
            .args(spec.get_args())
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());
        if let Some(dir) = spec.get_current_dir() {
            command.current_dir(dir);
        }

        let status = command.status().map_err(|e| CommandError::Spawn {
            program: spec.program().to_owned(),
            reason: e.to_string(),
        })?;

        if status.success() {
            debug!(command = %spec, "Command succeeded");
            Ok(())
        } else {
            warn!(command = %spec, %status, "Command failed");
            Err(CommandError::ExitStatus {
                code: status.code(),
            })
        }
    }
}

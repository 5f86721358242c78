//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `svcgen-adapters` crate provides implementations.

use std::io;
use std::path::Path;

use thiserror::Error;

use crate::application::ProvisionStep;
use crate::domain::CommandSpec;

/// Why a subprocess did not succeed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// The program could not be started at all (not found, not executable).
    #[error("failed to start '{program}': {reason}")]
    Spawn { program: String, reason: String },

    /// The program ran and exited unsuccessfully.
    #[error("{}", describe_exit(.code))]
    ExitStatus { code: Option<i32> },
}

fn describe_exit(code: &Option<i32>) -> String {
    match *code {
        Some(code) => format!("exit status: {code}"),
        None => "terminated by signal".to_owned(),
    }
}

/// Port for running external programs.
///
/// Implemented by:
/// - `svcgen_adapters::process::ProcessRunner` (production)
/// - `svcgen_adapters::process::RecordingRunner` (testing)
///
/// ## Design Notes
///
/// - Calls block until the child exits; there is no timeout
/// - Standard output and error are inherited, never captured
#[cfg_attr(test, mockall::automock)]
pub trait CommandRunner: Send + Sync {
    /// Run `command` to completion.
    fn run(&self, command: &CommandSpec) -> Result<(), CommandError>;
}

/// Port for the handful of filesystem operations the pipeline needs.
///
/// Implemented by:
/// - `svcgen_adapters::filesystem::LocalFilesystem` (production)
/// - `svcgen_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Check if path exists and is a directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// Read a whole file as UTF-8.
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Make a file executable (`0755` on Unix).
    fn set_executable(&self, path: &Path) -> io::Result<()>;
}

/// Port for progress reporting.
///
/// The core never prints; front-ends implement this to show what is
/// happening. Every method has a no-op default.
pub trait ProvisionListener: Send + Sync {
    /// A pipeline step is about to start.
    fn step_started(&self, _step: ProvisionStep, _detail: &str) {}

    /// A subprocess is about to be spawned.
    fn command_started(&self, _command: &CommandSpec) {}

    /// Something went wrong but the run continues.
    fn warning(&self, _message: &str) {}
}

/// Listener that ignores every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopListener;

impl ProvisionListener for NoopListener {}

//! Application layer errors.
//!
//! These errors represent failures while loading the descriptor or while
//! driving external tools, not domain rule violations. Domain errors are
//! `DomainError` from `crate::domain`.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ErrorCategory;

/// The four stages of the Go provisioning pipeline, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProvisionStep {
    ResolveBinary,
    Generate,
    CreateRepository,
    Push,
}

impl ProvisionStep {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ResolveBinary => "resolve-binary",
            Self::Generate => "generate",
            Self::CreateRepository => "create-repository",
            Self::Push => "push",
        }
    }
}

impl fmt::Display for ProvisionStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors that occur while loading input or orchestrating external tools.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApplicationError {
    /// The resolved descriptor path does not end in the fixed file name.
    #[error("file must be named '{expected}', got: '{found}'")]
    NotExpectedFilename {
        expected: &'static str,
        found: String,
    },

    /// The descriptor file could not be read.
    #[error("error reading file {path}: {reason}")]
    FileReadError { path: PathBuf, reason: String },

    /// The descriptor file is not valid YAML for the expected schema.
    #[error("error parsing YAML in {path}: {reason}")]
    ParseError { path: PathBuf, reason: String },

    /// Neither a local generator binary nor the install fallback worked.
    #[error("failed to get {binary} binary: {reason}")]
    BinaryUnavailable { binary: String, reason: String },

    /// The generator subprocess could not start or exited non-zero.
    #[error("failed to generate app '{app_name}': {reason}")]
    GenerationFailed { app_name: String, reason: String },

    /// The generator reported success but its output folder is absent.
    #[error("failed to push to repo: generated folder not found: {path}")]
    GeneratedFolderMissing { path: PathBuf },

    /// A version-control command failed; the rest of the sequence was skipped.
    #[error("failed to push to repo: command '{command}' failed: {reason}")]
    PushFailed { command: String, reason: String },
}

impl ApplicationError {
    /// The provisioning step this error belongs to, if any.
    pub fn step(&self) -> Option<ProvisionStep> {
        match self {
            Self::NotExpectedFilename { .. }
            | Self::FileReadError { .. }
            | Self::ParseError { .. } => None,
            Self::BinaryUnavailable { .. } => Some(ProvisionStep::ResolveBinary),
            Self::GenerationFailed { .. } => Some(ProvisionStep::Generate),
            Self::GeneratedFolderMissing { .. } | Self::PushFailed { .. } => {
                Some(ProvisionStep::Push)
            }
        }
    }

    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::NotExpectedFilename { expected, .. } => vec![
                format!("The descriptor must be named '{expected}'"),
                "Pass the service directory, not the file itself".into(),
            ],
            Self::FileReadError { path, .. } => vec![
                format!("Could not read: {}", path.display()),
                "Check that the directory contains a source.yml".into(),
                "Check file permissions".into(),
            ],
            Self::ParseError { .. } => vec![
                "source.yml must be a YAML mapping".into(),
                "Expected keys: source_id, name, members, metadata.programming_language, \
                 metadata.framework, metadata.module"
                    .into(),
            ],
            Self::BinaryUnavailable { .. } => vec![
                "Place a prebuilt generator in the dist directory".into(),
                "Or make sure `go` is installed and on your PATH".into(),
            ],
            Self::GenerationFailed { .. } => vec![
                "Check the generator output above for details".into(),
                "A partially generated folder may have been left behind".into(),
            ],
            Self::GeneratedFolderMissing { path } => vec![
                format!("Expected the generator to create: {}", path.display()),
                "Check that the generator writes into the working directory".into(),
            ],
            Self::PushFailed { .. } => vec![
                "Check the git output above for details".into(),
                "Set GH_TOKEN or GITHUB_TOKEN for authenticated pushes".into(),
                "If repository creation was skipped, make sure the remote exists".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::NotExpectedFilename { .. } | Self::ParseError { .. } => {
                ErrorCategory::Validation
            }
            Self::FileReadError { .. } | Self::GeneratedFolderMissing { .. } => {
                ErrorCategory::NotFound
            }
            Self::BinaryUnavailable { .. }
            | Self::GenerationFailed { .. }
            | Self::PushFailed { .. } => ErrorCategory::External,
        }
    }
}

//! Unified error handling for svcgen core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with context and user-actionable suggestions.

use thiserror::Error;

use crate::application::{ApplicationError, ProvisionStep};
use crate::domain::DomainError;

pub use crate::domain::ErrorCategory;

/// Root error type for svcgen core operations.
///
/// This enum wraps all possible errors that can occur when using svcgen-core,
/// providing a unified interface for error handling.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SvcgenError {
    /// Errors from the domain layer (dispatch rule violations).
    #[error("{0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (loading and provisioning failures).
    #[error("{0}")]
    Application(#[from] ApplicationError),
}

impl SvcgenError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => e.category(),
            Self::Application(e) => e.category(),
        }
    }

    /// The provisioning step that failed, when the error came from one.
    pub fn step(&self) -> Option<ProvisionStep> {
        match self {
            Self::Application(e) => e.step(),
            _ => None,
        }
    }
}

/// Convenient result type alias.
pub type SvcgenResult<T> = Result<T, SvcgenError>;

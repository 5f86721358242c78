// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    // ========================================================================
    // Dispatch Errors
    // ========================================================================
    #[error("unsupported programming language: {language}")]
    UnsupportedLanguage { language: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::UnsupportedLanguage { language } => vec![
                format!("'{language}' is not a supported programming_language"),
                "Supported values (exact, lowercase):".into(),
                "  • golang - generated with the uranus CLI".into(),
                "  • nodejs - accepted, not generated yet".into(),
                "Fix metadata.programming_language in source.yml".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UnsupportedLanguage { .. } => ErrorCategory::Validation,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    External,
}

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
///
/// A rejected event is normally reported as a
/// [`ValidationResult`](super::ValidationResult); `ValidationFailed` only
/// appears when a caller opts into `?` via
/// [`ValidationResult::into_result`](super::ValidationResult::into_result).
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors (400-level equivalent)
    // ========================================================================
    #[error("{entity} is not valid: {}", .errors.join(" "))]
    ValidationFailed { entity: String, errors: Vec<String> },

    // ========================================================================
    // Input Errors
    // ========================================================================
    #[error("Invalid event date '{value}': {reason}")]
    InvalidDate { value: String, reason: String },

    // ========================================================================
    // Constraint Violations
    // ========================================================================
    #[error("Entity label for '{role}' must not be blank")]
    InvalidLabel { role: &'static str },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::ValidationFailed { errors, .. } => {
                let mut out = vec!["Fix the following and resubmit:".to_string()];
                out.extend(errors.iter().map(|e| format!("  • {e}")));
                out
            }
            Self::InvalidDate { .. } => vec![
                "Use YYYY-MM-DD or YYYY-MM-DDTHH:MM:SS".into(),
                "Example: 2000-01-01".into(),
            ],
            Self::InvalidLabel { role } => vec![
                format!("Provide a non-empty label for '{role}'"),
                "Or remove it to fall back to the default".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ValidationFailed { .. } => ErrorCategory::Validation,
            Self::InvalidDate { .. } => ErrorCategory::Input,
            Self::InvalidLabel { .. } => ErrorCategory::Configuration,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Input,
    Configuration,
}

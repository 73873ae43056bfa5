//! Application layer errors.
//!
//! These errors represent failures in gathering submissions, not rejected
//! events. Rejections are `ValidationResult`s from `crate::domain`.

use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApplicationError {
    /// A submission source could not be opened or read.
    #[error("Submission source '{origin}' unavailable: {reason}")]
    SourceUnavailable { origin: String, reason: String },

    /// A payload could not be decoded into an event.
    #[error("Malformed payload in '{origin}': {reason}")]
    MalformedPayload { origin: String, reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::SourceUnavailable { origin, .. } => vec![
                format!("Failed to read: {}", origin),
                "Check that the path exists and is readable".into(),
            ],
            Self::MalformedPayload { origin, reason } => vec![
                format!("Could not decode {}: {}", origin, reason),
                "Payloads must be a JSON/TOML event object or JSON null".into(),
                "Use --skip-malformed to ignore undecodable files".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::SourceUnavailable { .. } => ErrorCategory::NotFound,
            Self::MalformedPayload { .. } => ErrorCategory::Input,
        }
    }
}

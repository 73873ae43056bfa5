//! Validation outcome: ordered, structured error records.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

/// What kind of rule an error came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ValidationErrorKind {
    /// The root object was absent. Always the only error when present.
    NullObject,
    /// A required text field was absent, empty, or whitespace.
    Blank,
    /// A scalar fell outside its allowed range.
    OutOfRange,
    /// A nested entity failed its own validation.
    InvalidNested,
}

impl ValidationErrorKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::NullObject => "null-object",
            Self::Blank => "blank",
            Self::OutOfRange => "out-of-range",
            Self::InvalidNested => "invalid-nested",
        }
    }
}

impl fmt::Display for ValidationErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One failed rule: kind, field path (`Event.Person[0]`) and rendered text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ValidationError {
    kind: ValidationErrorKind,
    path: String,
    message: String,
}

impl ValidationError {
    pub fn new(
        kind: ValidationErrorKind,
        path: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn kind(&self) -> ValidationErrorKind {
        self.kind
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// The exact user-facing text.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Outcome of validating one object graph.
///
/// Success is derived from the error list being empty, so a result can never
/// claim success while carrying errors. Errors keep discovery order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    errors: Vec<ValidationError>,
}

impl ValidationResult {
    pub fn success() -> Self {
        Self::default()
    }

    pub fn failure(error: ValidationError) -> Self {
        Self {
            errors: vec![error],
        }
    }

    pub fn push(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn is_success(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    /// Rendered messages in discovery order.
    pub fn messages(&self) -> Vec<&str> {
        self.errors.iter().map(ValidationError::message).collect()
    }

    pub fn first_message(&self) -> Option<&str> {
        self.errors.first().map(ValidationError::message)
    }

    pub fn into_errors(self) -> Vec<ValidationError> {
        self.errors
    }

    /// `Ok(())` on success, otherwise [`DomainError::ValidationFailed`]
    /// carrying every message for `entity`.
    pub fn into_result(self, entity: impl Into<String>) -> Result<(), DomainError> {
        if self.is_success() {
            return Ok(());
        }
        Err(DomainError::ValidationFailed {
            entity: entity.into(),
            errors: self.errors.into_iter().map(|e| e.message).collect(),
        })
    }

    /// Flat `(success, messages)` view for transports.
    pub fn report(&self) -> ValidationReport {
        ValidationReport::from(self)
    }
}

impl Extend<ValidationError> for ValidationResult {
    fn extend<I: IntoIterator<Item = ValidationError>>(&mut self, iter: I) {
        self.errors.extend(iter);
    }
}

impl FromIterator<ValidationError> for ValidationResult {
    fn from_iter<I: IntoIterator<Item = ValidationError>>(iter: I) -> Self {
        Self {
            errors: iter.into_iter().collect(),
        }
    }
}

/// Serializable `{ success, errors }` view of a [`ValidationResult`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub success: bool,
    pub errors: Vec<String>,
}

impl From<&ValidationResult> for ValidationReport {
    fn from(result: &ValidationResult) -> Self {
        Self {
            success: result.is_success(),
            errors: result.messages().into_iter().map(String::from).collect(),
        }
    }
}

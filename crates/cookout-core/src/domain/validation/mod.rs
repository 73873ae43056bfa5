//! Event validation rules.
//!
//! A one-level validation tree: [`EventValidator`] checks the event's own
//! fields and wraps each failing participant, [`ParticipantValidator`] checks
//! a single participant. Both are stateless; every call is a pure function of
//! its input, so one validator can be shared across threads.

mod event;
mod labels;
mod participant;
mod result;

pub use event::{EventValidator, min_event_date};
pub use labels::EntityLabels;
pub use participant::ParticipantValidator;
pub use result::{ValidationError, ValidationErrorKind, ValidationReport, ValidationResult};

/// A rule set over `T`.
///
/// Implementations report every failure through the returned
/// [`ValidationResult`] and never panic on bad data.
pub trait Validator<T: ?Sized> {
    fn validate(&self, value: &T) -> ValidationResult;
}

// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for Cookout.
//!
//! This module contains the event model and the rules that decide whether a
//! submitted event may be persisted. All I/O is handled via ports defined in
//! the application layer.
//!
//! - **No async**: validation is synchronous
//! - **No I/O**: no filesystem, network, or external calls
//! - **Immutable entities**: `Event` and `Participant` are read-only values
//! - **No raised errors for bad data**: every failure is a `ValidationError`
//!
// Public API - what the world sees
pub mod entities;
pub mod error;
pub mod validation;

// Re-exports for convenience
pub use entities::{Event, Participant, parse_event_date};

pub use error::{DomainError, ErrorCategory};

pub use validation::{
    EntityLabels, EventValidator, ParticipantValidator, ValidationError, ValidationErrorKind,
    ValidationReport, ValidationResult, Validator, min_event_date,
};

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn validators_are_shareable_across_threads() {
        assert_send_sync::<EventValidator>();
        assert_send_sync::<ParticipantValidator>();
        assert_send_sync::<ValidationResult>();
    }

    #[test]
    fn concurrent_calls_are_independent() {
        let validator = EventValidator::new();
        let date = NaiveDate::from_ymd_opt(2000, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();

        let results: Vec<ValidationResult> = std::thread::scope(|s| {
            let handles: Vec<_> = (0..8)
                .map(|i| {
                    let validator = &validator;
                    s.spawn(move || {
                        let event = Event::new(format!("BBQ {i}"), date)
                            .with_participant(Participant::new("p", Decimal::from(i - 4)));
                        validator.validate_event(&event)
                    })
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        // Shares -4..=3: the first four are negative.
        let rejected = results.iter().filter(|r| !r.is_success()).count();
        assert_eq!(rejected, 4);
    }

    #[test]
    fn domain_error_from_failed_result() {
        let err = EventValidator::new()
            .validate(None)
            .into_result("Event")
            .unwrap_err();

        assert_eq!(err.category(), ErrorCategory::Validation);
        assert_eq!(err.to_string(), "Event is not valid: Event should not be null.");
        assert!(err.suggestions().iter().any(|s| s.contains("should not be null")));
    }
}

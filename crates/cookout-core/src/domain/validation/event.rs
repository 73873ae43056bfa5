use chrono::NaiveDate;
use tracing::debug;

use crate::domain::{
    entities::{Event, Participant},
    validation::{
        EntityLabels, ParticipantValidator, ValidationError, ValidationErrorKind,
        ValidationResult, Validator,
    },
};

/// Earliest event date the storage layer can represent: January 1, 1753.
pub fn min_event_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(1753, 1, 1).unwrap_or(NaiveDate::MIN)
}

/// Root validator for a submitted [`Event`].
///
/// Rules run in a fixed order (title, date, then participants by index) and
/// all failures accumulate. The only short-circuit is an absent event.
///
/// `P` validates each participant; the default is [`ParticipantValidator`].
#[derive(Debug, Clone)]
pub struct EventValidator<P = ParticipantValidator> {
    labels: EntityLabels,
    participants: P,
}

impl EventValidator {
    pub fn new() -> Self {
        Self::with_labels(EntityLabels::default())
    }

    pub fn with_labels(labels: EntityLabels) -> Self {
        let participants = ParticipantValidator::with_labels(&labels);
        Self {
            labels,
            participants,
        }
    }
}

impl Default for EventValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> EventValidator<P>
where
    P: Validator<Participant>,
{
    /// Use a custom participant validator.
    pub fn with_participant_validator(labels: EntityLabels, participants: P) -> Self {
        Self {
            labels,
            participants,
        }
    }

    pub fn labels(&self) -> &EntityLabels {
        &self.labels
    }

    /// Validate a possibly absent event.
    pub fn validate(&self, event: Option<&Event>) -> ValidationResult {
        let Some(event) = event else {
            debug!(entity = %self.labels.event(), "event is absent");
            return ValidationResult::failure(ValidationError::new(
                ValidationErrorKind::NullObject,
                self.labels.event(),
                format!("{} should not be null.", self.labels.event()),
            ));
        };

        let mut result = ValidationResult::success();
        result.extend(self.check_title(event));
        result.extend(self.check_date(event));
        result.extend(
            event
                .participants()
                .iter()
                .enumerate()
                .filter_map(|(index, participant)| self.check_participant(index, participant)),
        );

        debug!(
            entity = %self.labels.event(),
            errors = result.error_count(),
            "event validated"
        );
        result
    }

    /// Validate an event that is known to be present.
    pub fn validate_event(&self, event: &Event) -> ValidationResult {
        self.validate(Some(event))
    }

    fn check_title(&self, event: &Event) -> Option<ValidationError> {
        let blank = event.title().is_none_or(|t| t.trim().is_empty());
        if !blank {
            return None;
        }

        let path = format!("{}.Title", self.labels.event());
        let message = format!("{path} should not be null, empty string or white spaces.");
        Some(ValidationError::new(ValidationErrorKind::Blank, path, message))
    }

    fn check_date(&self, event: &Event) -> Option<ValidationError> {
        if event.date().date() >= min_event_date() {
            return None;
        }

        let path = format!("{}.Date", self.labels.event());
        let message = format!("{path} should be equals or after January 1, 1753.");
        Some(ValidationError::new(
            ValidationErrorKind::OutOfRange,
            path,
            message,
        ))
    }

    /// Wrap a failing participant with its position. Only the participant's
    /// first message is embedded.
    fn check_participant(&self, index: usize, participant: &Participant) -> Option<ValidationError> {
        let nested = self.participants.validate(participant);
        let first = nested.errors().first()?;

        let path = format!(
            "{}.{}[{}]",
            self.labels.event(),
            self.labels.collection(),
            index
        );
        let message = format!("{path} is not valid: {}", first.message());
        Some(ValidationError::new(
            ValidationErrorKind::InvalidNested,
            path,
            message,
        ))
    }
}

use rust_decimal::Decimal;

use crate::domain::{
    entities::Participant,
    validation::{EntityLabels, ValidationError, ValidationErrorKind, ValidationResult, Validator},
};

/// Validates a single participant's food money share.
///
/// The participant's position in its event is unknown here; the parent
/// validator adds the index when wrapping a failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParticipantValidator {
    entity: String,
}

impl ParticipantValidator {
    pub fn new() -> Self {
        Self::with_labels(&EntityLabels::default())
    }

    pub fn with_labels(labels: &EntityLabels) -> Self {
        Self {
            entity: labels.participant().to_string(),
        }
    }
}

impl Default for ParticipantValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator<Participant> for ParticipantValidator {
    fn validate(&self, participant: &Participant) -> ValidationResult {
        // Zero is a valid "no contribution" share.
        if participant.food_money_share() < Decimal::ZERO {
            let path = format!("{}.FoodMoneyShare", self.entity);
            let message = format!("{path} should not be negative.");
            return ValidationResult::failure(ValidationError::new(
                ValidationErrorKind::OutOfRange,
                path,
                message,
            ));
        }

        ValidationResult::success()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn negative_share_is_rejected() {
        let result = ParticipantValidator::new().validate(&Participant::new("A", Decimal::from(-10)));

        assert_eq!(
            result.messages(),
            ["Participant.FoodMoneyShare should not be negative."]
        );
        assert_eq!(result.errors()[0].kind(), ValidationErrorKind::OutOfRange);
    }

    #[test]
    fn fractional_negative_share_is_rejected() {
        let share = Decimal::from_str("-0.01").unwrap();
        assert!(!ParticipantValidator::new().validate(&Participant::anonymous(share)).is_success());
    }

    #[test]
    fn zero_share_is_valid() {
        assert!(ParticipantValidator::new().validate(&Participant::named("B")).is_success());
    }

    #[test]
    fn negative_zero_is_valid() {
        let share = Decimal::from_str("-0").unwrap();
        assert!(ParticipantValidator::new().validate(&Participant::anonymous(share)).is_success());
    }

    #[test]
    fn positive_share_is_valid() {
        let result = ParticipantValidator::new().validate(&Participant::new("C", Decimal::from(25)));
        assert!(result.is_success());
    }

    #[test]
    fn name_is_never_inspected() {
        let validator = ParticipantValidator::new();
        assert!(validator.validate(&Participant::new("", Decimal::ONE)).is_success());
        assert!(validator.validate(&Participant::anonymous(Decimal::ONE)).is_success());
    }

    #[test]
    fn uses_participant_label() {
        let validator = ParticipantValidator::with_labels(&EntityLabels::legacy());
        let result = validator.validate(&Participant::new("A", Decimal::from(-1)));

        assert_eq!(
            result.first_message(),
            Some("PersonDto.FoodMoneyShare should not be negative.")
        );
    }
}

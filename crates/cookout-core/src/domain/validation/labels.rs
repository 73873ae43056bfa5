//! Entity names rendered into error messages.

use crate::domain::error::DomainError;

/// The domain terms a call site uses for the validated entities.
///
/// Messages are built as `<event>.Title ...`, `<event>.<collection>[i] ...`
/// and `<participant>.FoodMoneyShare ...`. Field names are fixed; only the
/// entity names vary.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EntityLabels {
    event: String,
    collection: String,
    participant: String,
}

impl EntityLabels {
    /// Build labels, rejecting blank ones.
    pub fn new(
        event: impl Into<String>,
        collection: impl Into<String>,
        participant: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let event = non_blank(event.into(), "event")?;
        let collection = non_blank(collection.into(), "collection")?;
        let participant = non_blank(participant.into(), "participant")?;

        Ok(Self {
            event,
            collection,
            participant,
        })
    }

    /// Labels of the original barbecue backend DTOs.
    pub fn legacy() -> Self {
        Self {
            event: "BarbequeDto".into(),
            collection: "Person".into(),
            participant: "PersonDto".into(),
        }
    }

    pub fn event(&self) -> &str {
        &self.event
    }

    pub fn collection(&self) -> &str {
        &self.collection
    }

    pub fn participant(&self) -> &str {
        &self.participant
    }
}

impl Default for EntityLabels {
    fn default() -> Self {
        Self {
            event: "Event".into(),
            collection: "Person".into(),
            participant: "Participant".into(),
        }
    }
}

fn non_blank(value: String, role: &'static str) -> Result<String, DomainError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(DomainError::InvalidLabel { role });
    }
    Ok(trimmed.to_string())
}

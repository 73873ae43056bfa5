//! A person attached to an event with a food money share.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A participant of a cookout event.
///
/// `food_money_share` defaults to zero when omitted from a payload, which is
/// a valid "no contribution" share.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Participant {
    #[serde(default)]
    name: Option<String>,

    #[serde(default)]
    food_money_share: Decimal,
}

impl Participant {
    pub fn new(name: impl Into<String>, food_money_share: Decimal) -> Self {
        Self {
            name: Some(name.into()),
            food_money_share,
        }
    }

    /// Participant with a name and no contribution.
    pub fn named(name: impl Into<String>) -> Self {
        Self::new(name, Decimal::ZERO)
    }

    /// Participant submitted without a name.
    pub fn anonymous(food_money_share: Decimal) -> Self {
        Self {
            name: None,
            food_money_share,
        }
    }

    /// Informational only; never validated.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn food_money_share(&self) -> Decimal {
        self.food_money_share
    }
}

//! The cookout event submitted for validation.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::domain::{entities::Participant, error::DomainError};

/// A cookout event as submitted by the upstream request layer.
///
/// The title and participant list are optional at the type level because the
/// submission may omit them; whether that is acceptable is the validator's
/// call, not the constructor's.
///
/// Wire shape (camelCase, `persons` with `participants` accepted as alias):
///
/// ```json
/// { "title": "BBQ", "date": "2000-01-01", "persons": [{ "name": "A", "foodMoneyShare": 10 }] }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    #[serde(default)]
    title: Option<String>,

    #[serde(with = "event_date")]
    date: NaiveDateTime,

    #[serde(default, rename = "persons", alias = "participants")]
    participants: Option<Vec<Participant>>,
}

impl Event {
    /// Event with a title and no participant list.
    pub fn new(title: impl Into<String>, date: NaiveDateTime) -> Self {
        Self {
            title: Some(title.into()),
            date,
            participants: None,
        }
    }

    /// Event submitted without a title.
    pub fn untitled(date: NaiveDateTime) -> Self {
        Self {
            title: None,
            date,
            participants: None,
        }
    }

    pub fn with_participant(mut self, participant: Participant) -> Self {
        self.participants
            .get_or_insert_with(Vec::new)
            .push(participant);
        self
    }

    pub fn with_participants(mut self, participants: impl IntoIterator<Item = Participant>) -> Self {
        self.participants
            .get_or_insert_with(Vec::new)
            .extend(participants);
        self
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn date(&self) -> NaiveDateTime {
        self.date
    }

    /// Participants in submission order; empty when the list was omitted.
    pub fn participants(&self) -> &[Participant] {
        self.participants.as_deref().unwrap_or_default()
    }
}

/// Parse an event date from `YYYY-MM-DDTHH:MM:SS[.fff]`, `YYYY-MM-DD HH:MM:SS`
/// or a bare `YYYY-MM-DD` (midnight).
pub fn parse_event_date(raw: &str) -> Result<NaiveDateTime, DomainError> {
    let raw = raw.trim();

    if let Ok(dt) = raw.parse::<NaiveDateTime>() {
        return Ok(dt);
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return Ok(dt);
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map(|d| d.and_time(NaiveTime::MIN))
        .map_err(|e| DomainError::InvalidDate {
            value: raw.to_string(),
            reason: e.to_string(),
        })
}

mod event_date {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer, de};

    const FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

    pub fn serialize<S>(date: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&date.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        super::parse_event_date(&raw).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn midnight(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    #[test]
    fn parses_bare_date_as_midnight() {
        assert_eq!(parse_event_date("1753-01-01").unwrap(), midnight(1753, 1, 1));
    }

    #[test]
    fn parses_iso_datetime() {
        let dt = parse_event_date("2000-01-01T18:30:00").unwrap();
        assert_eq!(dt.date(), NaiveDate::from_ymd_opt(2000, 1, 1).unwrap());
    }

    #[test]
    fn parses_space_separated_datetime() {
        assert!(parse_event_date("2000-01-01 18:30:00").is_ok());
    }

    #[test]
    fn rejects_garbage_date() {
        assert!(matches!(
            parse_event_date("next friday"),
            Err(DomainError::InvalidDate { .. })
        ));
    }

    #[test]
    fn missing_participant_list_reads_as_empty() {
        let event = Event::new("BBQ", midnight(2000, 1, 1));
        assert!(event.participants().is_empty());
    }

    #[test]
    fn deserializes_upstream_payload() {
        let json = r#"{
            "title": "BBQ",
            "date": "2000-01-01",
            "persons": [
                { "name": "A", "foodMoneyShare": -10 },
                { "name": "B" }
            ]
        }"#;
        let event: Event = serde_json::from_str(json).unwrap();

        assert_eq!(event.title(), Some("BBQ"));
        assert_eq!(event.participants().len(), 2);
        assert_eq!(event.participants()[0].food_money_share(), Decimal::from(-10));
        assert_eq!(event.participants()[1].food_money_share(), Decimal::ZERO);
    }

    #[test]
    fn accepts_participants_alias_and_missing_title() {
        let json = r#"{ "date": "2000-01-01T00:00:00", "participants": [] }"#;
        let event: Event = serde_json::from_str(json).unwrap();

        assert_eq!(event.title(), None);
        assert!(event.participants().is_empty());
    }
}

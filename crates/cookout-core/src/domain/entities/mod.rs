pub mod event;
pub mod participant;

pub use event::{Event, parse_event_date};
pub use participant::Participant;

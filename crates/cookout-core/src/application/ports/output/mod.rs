//! Driven (output) ports - implemented by infrastructure.
//!
//! The `cookout-adapters` crate provides implementations.

use crate::domain::Event;
use crate::error::CookoutResult;

/// One submitted payload and where it came from.
///
/// `event` is `None` when the payload was explicitly empty (a JSON `null`),
/// which the validator reports as an absent event.
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub origin: String,
    pub event: Option<Event>,
}

impl Submission {
    pub fn new(origin: impl Into<String>, event: Option<Event>) -> Self {
        Self {
            origin: origin.into(),
            event,
        }
    }
}

/// Port for gathering submissions.
///
/// Implemented by:
/// - `cookout_adapters::source::FileSource` (JSON/TOML files and directories)
/// - `cookout_adapters::source::MemorySource` (testing, embedding)
pub trait SubmissionSource: Send + Sync {
    /// All submissions, in a stable order.
    fn submissions(&self) -> CookoutResult<Vec<Submission>>;
}

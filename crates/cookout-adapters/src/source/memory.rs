//! In-memory submission source for testing and embedding.

use std::sync::{Arc, RwLock};

use cookout_core::{
    application::{Submission, SubmissionSource},
    domain::Event,
    error::{CookoutError, CookoutResult},
};

/// Thread-safe in-memory list of submissions.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    inner: Arc<RwLock<Vec<Submission>>>,
}

impl MemorySource {
    /// Create a new empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a source pre-filled with `submissions`.
    pub fn from_submissions(submissions: impl IntoIterator<Item = Submission>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(submissions.into_iter().collect())),
        }
    }

    /// Append a submission; `None` records an absent event.
    pub fn push(&self, origin: impl Into<String>, event: Option<Event>) -> CookoutResult<()> {
        let mut inner = self.inner.write().map_err(|_| lock_poisoned())?;
        inner.push(Submission::new(origin, event));
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.inner.read().map(|inner| inner.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl SubmissionSource for MemorySource {
    fn submissions(&self) -> CookoutResult<Vec<Submission>> {
        let inner = self.inner.read().map_err(|_| lock_poisoned())?;
        Ok(inner.clone())
    }
}

fn lock_poisoned() -> CookoutError {
    CookoutError::Internal {
        message: "memory source lock poisoned".into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn event(title: &str) -> Event {
        let date = NaiveDate::from_ymd_opt(2000, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        Event::new(title, date)
    }

    #[test]
    fn starts_empty() {
        let source = MemorySource::new();
        assert!(source.is_empty());
        assert!(source.submissions().unwrap().is_empty());
    }

    #[test]
    fn keeps_insertion_order() {
        let source = MemorySource::new();
        source.push("first", Some(event("a"))).unwrap();
        source.push("second", None).unwrap();

        let subs = source.submissions().unwrap();
        assert_eq!(subs.len(), 2);
        assert_eq!(subs[0].origin, "first");
        assert_eq!(subs[1].event, None);
    }

    #[test]
    fn clones_share_state() {
        let source = MemorySource::from_submissions([Submission::new("a", Some(event("a")))]);
        let alias = source.clone();
        alias.push("b", None).unwrap();

        assert_eq!(source.len(), 2);
    }
}

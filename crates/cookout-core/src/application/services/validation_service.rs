//! Validation Service - gatekeeper in front of persistence.
//!
//! Pulls submissions from a [`SubmissionSource`], runs each through the
//! [`EventValidator`] and reports the outcome per submission. Rejected events
//! are data, not errors: the service only fails when the source does.

use tracing::{debug, info, instrument};

use crate::{
    application::ports::{Submission, SubmissionSource},
    domain::{Event, EventValidator, ValidationReport, ValidationResult},
    error::CookoutResult,
};

/// Outcome for one submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionReport {
    origin: String,
    result: ValidationResult,
}

impl SubmissionReport {
    pub fn new(origin: impl Into<String>, result: ValidationResult) -> Self {
        Self {
            origin: origin.into(),
            result,
        }
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn result(&self) -> &ValidationResult {
        &self.result
    }

    /// `true` if the event may proceed to persistence.
    pub fn is_accepted(&self) -> bool {
        self.result.is_success()
    }

    pub fn report(&self) -> ValidationReport {
        self.result.report()
    }
}

/// Validates every submission a source yields.
pub struct ValidationService {
    source: Box<dyn SubmissionSource>,
    validator: EventValidator,
}

impl ValidationService {
    pub fn new(source: Box<dyn SubmissionSource>, validator: EventValidator) -> Self {
        Self { source, validator }
    }

    pub fn validator(&self) -> &EventValidator {
        &self.validator
    }

    /// Validate all submissions, preserving source order.
    #[instrument(skip_all, fields(entity = %self.validator.labels().event()))]
    pub fn run(&self) -> CookoutResult<Vec<SubmissionReport>> {
        let submissions = self.source.submissions()?;
        info!(count = submissions.len(), "Validating submissions");

        let reports: Vec<SubmissionReport> = submissions
            .into_iter()
            .map(|submission| self.check(submission))
            .collect();

        let rejected = reports.iter().filter(|r| !r.is_accepted()).count();
        info!(
            total = reports.len(),
            accepted = reports.len() - rejected,
            rejected,
            "Validation completed"
        );

        Ok(reports)
    }

    /// Validate a single, possibly absent, event.
    pub fn validate_one(&self, event: Option<&Event>) -> ValidationResult {
        self.validator.validate(event)
    }

    fn check(&self, submission: Submission) -> SubmissionReport {
        let result = self.validator.validate(submission.event.as_ref());
        if result.is_success() {
            debug!(origin = %submission.origin, "Submission accepted");
        } else {
            debug!(
                origin = %submission.origin,
                errors = result.error_count(),
                "Submission rejected"
            );
        }
        SubmissionReport::new(submission.origin, result)
    }
}

//! Cookout Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for validating
//! cookout event submissions before a CRUD backend persists them.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           cookout-cli (CLI)             │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │          (ValidationService)            │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │          (SubmissionSource)             │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    cookout-adapters (Infrastructure)    │
//! │        (FileSource, MemorySource)       │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │  (Event, Participant, EventValidator)   │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use chrono::NaiveDate;
//! use cookout_core::domain::{Event, EventValidator, Participant};
//! use rust_decimal::Decimal;
//!
//! let date = NaiveDate::from_ymd_opt(2000, 1, 1)
//!     .and_then(|d| d.and_hms_opt(0, 0, 0))
//!     .unwrap();
//! let event = Event::new("BBQ", date)
//!     .with_participant(Participant::new("A", Decimal::from(-10)))
//!     .with_participant(Participant::named("B"));
//!
//! let result = EventValidator::new().validate(Some(&event));
//! assert!(!result.is_success());
//! assert_eq!(
//!     result.messages(),
//!     ["Event.Person[0] is not valid: Participant.FoodMoneyShare should not be negative."]
//! );
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        Submission, SubmissionReport, ValidationService, ports::SubmissionSource,
    };
    pub use crate::domain::{
        EntityLabels, Event, EventValidator, Participant, ParticipantValidator, ValidationError,
        ValidationErrorKind, ValidationReport, ValidationResult, Validator,
    };
    pub use crate::error::{CookoutError, CookoutResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//! Application ports (traits) for external dependencies.
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `SubmissionSource`: where submitted events come from
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (Defined in CLI layer, implemented by services)

pub mod output;

pub use output::{Submission, SubmissionSource};

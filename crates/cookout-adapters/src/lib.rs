//! Infrastructure adapters for Cookout.
//!
//! This crate implements the ports defined in `cookout-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod source;

// Re-export commonly used adapters
pub use source::{FileSource, MemorySource};

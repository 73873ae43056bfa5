//! Subcommand handlers.  Each module exposes a single `execute` function.

pub mod completions;
pub mod config;
pub mod init;
pub mod validate;

//! scribe - Personal journal store
//!
//! Keeps short text entries with tags and a creation date in a JSON file,
//! with keyword, tag and date-range search, multi-format export, and
//! scheduled backups.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::ScribeError;

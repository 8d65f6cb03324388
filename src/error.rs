//! Error types for scribe

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for scribe
#[derive(Debug, Error)]
pub enum ScribeError {
    #[error("Corrupt storage file {}: {reason}", .path.display())]
    CorruptStorage { path: PathBuf, reason: String },

    #[error("Persistence error: {0}")]
    Persistence(#[from] std::io::Error),

    #[error("Unsupported export format: {0}")]
    UnsupportedFormat(String),

    #[error("Entry not found: {0}")]
    EntryNotFound(u64),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Backup target is the storage file itself: {}", .0.display())]
    InvalidBackupPath(PathBuf),

    #[error("Export target is the storage file itself: {}", .0.display())]
    InvalidExportPath(PathBuf),

    #[error("No entry ids left after {0}")]
    IdsExhausted(u64),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Render error: {0}")]
    Render(#[from] serde_json::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl ScribeError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            ScribeError::CorruptStorage { .. } => 2,
            ScribeError::EntryNotFound(_) => 3,
            ScribeError::UnsupportedFormat(_) => 4,
            ScribeError::InvalidDate(_) => 5,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            ScribeError::CorruptStorage { path, reason } => {
                format!(
                    "The journal file {} could not be read: {}\n\n\
                    Suggestions:\n\
                    • Fix the file by hand (it is a JSON array of entries)\n\
                    • Restore it from your backup file\n\
                    • Run with --recover to move it aside and start an empty journal",
                    path.display(),
                    reason
                )
            }
            ScribeError::UnsupportedFormat(format) => {
                format!(
                    "Unsupported export format: '{}'\n\n\
                    Supported formats: json, csv, txt\n\
                    Example: scribe export entries.csv --format csv",
                    format
                )
            }
            ScribeError::EntryNotFound(id) => {
                format!(
                    "No entry with id {}\n\n\
                    Suggestions:\n\
                    • Use 'scribe list' to see existing ids",
                    id
                )
            }
            ScribeError::InvalidDate(input) => {
                format!(
                    "Invalid date: '{}'\n\n\
                    Valid dates:\n\
                    • today, yesterday, tomorrow\n\
                    • <n> days ago (e.g., 3 days ago)\n\
                    • Specific dates: YYYY-MM-DD (e.g., 2024-01-05)",
                    input
                )
            }
            ScribeError::InvalidExportPath(path) => {
                format!(
                    "Refusing to export over the journal file {}\n\n\
                    Suggestions:\n\
                    • Export to a different file, e.g. scribe export entries.csv",
                    path.display()
                )
            }
            ScribeError::TomlDeserialize(e) => {
                format!(
                    "Could not parse scribe.toml: {}\n\n\
                    Suggestions:\n\
                    • Check the file for typos, or delete it to use the defaults",
                    e
                )
            }
            ScribeError::Config(msg) if msg.contains("Unknown config key") => {
                format!(
                    "{}\n\n\
                    Example: scribe config backup_interval 3600",
                    msg
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using ScribeError
pub type Result<T> = std::result::Result<T, ScribeError>;

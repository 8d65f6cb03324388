//! Application layer - Journal store and use cases

pub mod backup;
pub mod edit_entry;
pub mod manage_config;
pub mod search;
pub mod store;

pub use backup::BackupScheduler;
pub use edit_entry::{edit_entry, EntryChanges};
pub use manage_config::ConfigService;
pub use search::SearchQuery;
pub use store::JournalStore;

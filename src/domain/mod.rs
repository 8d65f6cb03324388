//! Domain layer - Journal records and value types

pub mod date_ref;
pub mod entry;
pub mod export_format;

pub use date_ref::DateRef;
pub use entry::Entry;
pub use export_format::ExportFormat;

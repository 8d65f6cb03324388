//! Journal store: the in-memory entry collection, its queries, and
//! write-through persistence to the storage file.

use crate::domain::{Entry, ExportFormat};
use crate::error::{Result, ScribeError};
use crate::infrastructure::{export, storage};
use chrono::{Local, NaiveDate};
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

#[derive(Debug)]
struct StoreState {
    entries: Vec<Entry>,
    /// Next id to hand out. Never decreases for the lifetime of the store.
    next_id: u64,
}

/// Owns all journal entries and keeps the storage file in sync with them.
///
/// Every mutation rewrites the whole storage file before returning. If the
/// write fails the in-memory collection is left untouched. All reads and
/// writes go through one lock, so a background backup never observes a
/// half-applied mutation.
#[derive(Debug)]
pub struct JournalStore {
    path: PathBuf,
    state: Mutex<StoreState>,
}

impl JournalStore {
    /// Load the journal stored at `path`. A missing file is an empty journal.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let entries = storage::load_entries(&path, today())?;
        Ok(Self::with_entries(path, entries))
    }

    /// An empty journal bound to `path`. Nothing is read or written until
    /// the first mutation.
    pub fn empty(path: impl Into<PathBuf>) -> Self {
        Self::with_entries(path.into(), Vec::new())
    }

    /// Like [`JournalStore::load`], but a corrupt file is renamed to
    /// `<file>.corrupt` and an empty journal is returned in its place.
    pub fn recover(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        match storage::load_entries(&path, today()) {
            Ok(entries) => Ok(Self::with_entries(path, entries)),
            Err(ScribeError::CorruptStorage { .. }) => {
                fs::rename(&path, corrupt_path_for(&path))?;
                Ok(Self::empty(path))
            }
            Err(e) => Err(e),
        }
    }

    fn with_entries(path: PathBuf, entries: Vec<Entry>) -> Self {
        // `load_entries` never yields `u64::MAX`, so this cannot saturate.
        let next_id = entries
            .iter()
            .map(|e| e.id)
            .max()
            .unwrap_or(0)
            .saturating_add(1);
        JournalStore {
            path,
            state: Mutex::new(StoreState { entries, next_id }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, StoreState> {
        // State is only replaced after a successful write, so a panic while
        // holding the lock cannot leave it half-updated.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Storage file this journal writes through to
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().entries.is_empty()
    }

    /// Create an entry dated today.
    pub fn add(&self, content: impl Into<String>, tags: Vec<String>) -> Result<Entry> {
        self.add_on(content, tags, today())
    }

    /// Create an entry with an explicit creation date.
    pub fn add_on(
        &self,
        content: impl Into<String>,
        tags: Vec<String>,
        created_at: NaiveDate,
    ) -> Result<Entry> {
        let mut state = self.lock();

        let following = state
            .next_id
            .checked_add(1)
            .ok_or(ScribeError::IdsExhausted(state.next_id))?;
        let entry = Entry::new(state.next_id, content.into(), tags, created_at);
        let mut entries = state.entries.clone();
        entries.push(entry.clone());

        storage::save_entries(&self.path, &entries)?;

        state.entries = entries;
        state.next_id = following;
        Ok(entry)
    }

    /// All entries in insertion order
    pub fn all(&self) -> Vec<Entry> {
        self.lock().entries.clone()
    }

    /// Entries whose content or tags contain `query` (case-sensitive)
    pub fn search_by_keyword(&self, query: &str) -> Vec<Entry> {
        self.filtered(|entry| entry.matches(query))
    }

    /// Entries carrying at least one of `tags` exactly. Empty input matches
    /// nothing.
    pub fn search_by_tags(&self, tags: &[String]) -> Vec<Entry> {
        if tags.is_empty() {
            return Vec::new();
        }
        self.filtered(|entry| entry.has_any_tag(tags))
    }

    /// Entries created within `start..=end`. A reversed range is empty.
    pub fn search_by_date_range(&self, start: NaiveDate, end: NaiveDate) -> Vec<Entry> {
        if start > end {
            return Vec::new();
        }
        self.filtered(|entry| entry.created_between(start, end))
    }

    fn filtered(&self, predicate: impl Fn(&Entry) -> bool) -> Vec<Entry> {
        self.lock()
            .entries
            .iter()
            .filter(|entry| predicate(*entry))
            .cloned()
            .collect()
    }

    pub fn get_by_id(&self, id: u64) -> Option<Entry> {
        self.lock().entries.iter().find(|e| e.id == id).cloned()
    }

    /// Distinct tags across all entries, sorted
    pub fn tags(&self) -> Vec<String> {
        let state = self.lock();
        let distinct: BTreeSet<String> = state
            .entries
            .iter()
            .flat_map(|e| e.tags.iter().cloned())
            .collect();
        distinct.into_iter().collect()
    }

    /// Replace content and tags of entry `id`. Returns `false` if absent.
    pub fn update(
        &self,
        id: u64,
        content: impl Into<String>,
        tags: Vec<String>,
    ) -> Result<bool> {
        let mut state = self.lock();

        let Some(index) = state.entries.iter().position(|e| e.id == id) else {
            return Ok(false);
        };

        let mut entries = state.entries.clone();
        entries[index].content = content.into();
        entries[index].tags = tags;

        storage::save_entries(&self.path, &entries)?;

        state.entries = entries;
        Ok(true)
    }

    /// Remove entry `id`. Returns `false` if absent.
    pub fn delete(&self, id: u64) -> Result<bool> {
        let mut state = self.lock();

        let Some(index) = state.entries.iter().position(|e| e.id == id) else {
            return Ok(false);
        };

        let mut entries = state.entries.clone();
        entries.remove(index);

        storage::save_entries(&self.path, &entries)?;

        state.entries = entries;
        Ok(true)
    }

    /// Write a point-in-time copy of the journal to `target`, in the
    /// storage layout. Neither the storage file nor memory is touched.
    /// Returns the number of entries written.
    pub fn backup(&self, target: &Path) -> Result<usize> {
        if same_file(target, &self.path) {
            return Err(ScribeError::InvalidBackupPath(target.to_path_buf()));
        }

        let state = self.lock();
        storage::save_entries(target, &state.entries)?;
        Ok(state.entries.len())
    }

    /// Render the whole journal to `target` in `format`. The storage file
    /// itself is never a valid target.
    pub fn export(&self, target: &Path, format: ExportFormat) -> Result<()> {
        if same_file(target, &self.path) {
            return Err(ScribeError::InvalidExportPath(target.to_path_buf()));
        }

        let state = self.lock();
        let contents = export::render(&state.entries, format)?;
        storage::write_atomic(target, &contents)
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn corrupt_path_for(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or("journal_entries.json");
    path.with_file_name(format!("{}.corrupt", name))
}

fn same_file(a: &Path, b: &Path) -> bool {
    if a == b {
        return true;
    }
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

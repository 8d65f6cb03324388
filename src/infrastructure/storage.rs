//! JSON storage file codec and atomic file writes

use crate::domain::Entry;
use crate::error::{Result, ScribeError};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// On-disk layout of one entry
#[derive(Debug, Serialize)]
struct StoredEntry<'a> {
    memo: &'a str,
    tags: &'a [String],
    creation_date: NaiveDate,
    id: u64,
}

/// Lenient read-side view of one record. Missing fields fall back to
/// defaults; fields of the wrong type fail the whole file.
#[derive(Debug, Deserialize)]
struct RawEntry {
    #[serde(default)]
    memo: Option<String>,
    #[serde(default)]
    tags: Option<RawTags>,
    #[serde(default)]
    creation_date: Option<NaiveDate>,
    #[serde(default)]
    id: Option<u64>,
}

/// Tags were once stored as a single comma-separated string.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawTags {
    List(Vec<String>),
    Joined(String),
}

impl RawTags {
    fn into_vec(self) -> Vec<String> {
        match self {
            RawTags::List(tags) => tags,
            RawTags::Joined(joined) => joined
                .split(',')
                .map(str::trim)
                .filter(|tag| !tag.is_empty())
                .map(str::to_string)
                .collect(),
        }
    }
}

/// Read all entries from `path`.
///
/// A missing or blank file is an empty journal. Records without an id,
/// with id 0, or repeating an earlier id get fresh ids above the file's
/// maximum, in file order. Records without a date are stamped `today`.
pub fn load_entries(path: &Path, today: NaiveDate) -> Result<Vec<Entry>> {
    let contents = match fs::read(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(ScribeError::Persistence(e)),
    };

    if contents.iter().all(u8::is_ascii_whitespace) {
        return Ok(Vec::new());
    }

    let corrupt = |reason: String| ScribeError::CorruptStorage {
        path: path.to_path_buf(),
        reason,
    };

    // Bytes that are not UTF-8 are rejected by the parser like any other
    // malformed content.
    let raw: Vec<RawEntry> =
        serde_json::from_slice(&contents).map_err(|e| corrupt(e.to_string()))?;

    let max_id = raw.iter().filter_map(|r| r.id).max().unwrap_or(0);
    let mut next_id = max_id
        .checked_add(1)
        .ok_or_else(|| corrupt(format!("id {} is out of range", max_id)))?;
    let mut seen = HashSet::new();
    let mut entries = Vec::with_capacity(raw.len());

    for record in raw {
        let id = match record.id {
            Some(id) if id > 0 && seen.insert(id) => id,
            _ => {
                let id = next_id;
                next_id = next_id
                    .checked_add(1)
                    .ok_or_else(|| corrupt("too many entries to number".to_string()))?;
                seen.insert(id);
                id
            }
        };

        entries.push(Entry::new(
            id,
            record.memo.unwrap_or_default(),
            record.tags.map(RawTags::into_vec).unwrap_or_default(),
            record.creation_date.unwrap_or(today),
        ));
    }

    Ok(entries)
}

/// Render entries in the storage layout (also used for backups and
/// JSON exports).
pub fn render_entries(entries: &[Entry]) -> Result<String> {
    let records: Vec<StoredEntry<'_>> = entries
        .iter()
        .map(|entry| StoredEntry {
            memo: &entry.content,
            tags: &entry.tags,
            creation_date: entry.created_at,
            id: entry.id,
        })
        .collect();

    let mut json = serde_json::to_string_pretty(&records)?;
    json.push('\n');
    Ok(json)
}

/// Overwrite `path` with the full collection.
pub fn save_entries(path: &Path, entries: &[Entry]) -> Result<()> {
    let contents = render_entries(entries)?;
    write_atomic(path, &contents)
}

/// Write `contents` using an atomic replace: write to a temp file in the
/// same directory, then rename into place. On failure the destination is
/// left as it was and the temp file is removed.
pub fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    let tmp_path = temp_path_for(path);

    if let Err(e) = fs::write(&tmp_path, contents) {
        let _ = fs::remove_file(&tmp_path);
        return Err(ScribeError::Persistence(e));
    }

    // Windows `rename` does not overwrite existing files.
    #[cfg(windows)]
    if path.exists() {
        fs::remove_file(path)?;
    }

    if let Err(e) = fs::rename(&tmp_path, path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(ScribeError::Persistence(e));
    }

    Ok(())
}

fn temp_path_for(path: &Path) -> PathBuf {
    let tmp_name = format!(
        "{}.scribe-tmp-{}",
        path.file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("journal_entries.json"),
        std::process::id()
    );
    path.with_file_name(tmp_name)
}

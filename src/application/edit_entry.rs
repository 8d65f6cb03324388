//! Edit entry use case

use crate::application::JournalStore;
use crate::domain::Entry;
use crate::error::{Result, ScribeError};

/// Requested changes; `None` keeps the current value
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryChanges {
    pub content: Option<String>,
    pub tags: Option<Vec<String>>,
}

/// Apply `changes` to entry `id` and return the updated entry.
pub fn edit_entry(store: &JournalStore, id: u64, changes: EntryChanges) -> Result<Entry> {
    let current = store.get_by_id(id).ok_or(ScribeError::EntryNotFound(id))?;

    let content = changes.content.unwrap_or(current.content);
    let tags = changes.tags.unwrap_or(current.tags);

    if !store.update(id, content, tags)? {
        return Err(ScribeError::EntryNotFound(id));
    }

    store.get_by_id(id).ok_or(ScribeError::EntryNotFound(id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_edit_content_keeps_tags() {
        let temp = TempDir::new().unwrap();
        let store = JournalStore::load(temp.path().join("j.json")).unwrap();
        let entry = store.add("draft", vec!["idea".into()]).unwrap();

        let updated = edit_entry(
            &store,
            entry.id,
            EntryChanges {
                content: Some("final".into()),
                tags: None,
            },
        )
        .unwrap();

        assert_eq!(updated.content, "final");
        assert_eq!(updated.tags, vec!["idea".to_string()]);
        assert_eq!(updated.created_at, entry.created_at);
    }

    #[test]
    fn test_clear_tags() {
        let temp = TempDir::new().unwrap();
        let store = JournalStore::load(temp.path().join("j.json")).unwrap();
        let entry = store.add("draft", vec!["idea".into()]).unwrap();

        let updated = edit_entry(
            &store,
            entry.id,
            EntryChanges {
                content: None,
                tags: Some(vec![]),
            },
        )
        .unwrap();

        assert!(updated.tags.is_empty());
        assert_eq!(updated.content, "draft");
    }

    #[test]
    fn test_edit_missing_entry() {
        let temp = TempDir::new().unwrap();
        let store = JournalStore::load(temp.path().join("j.json")).unwrap();

        assert!(matches!(
            edit_entry(&store, 7, EntryChanges::default()),
            Err(ScribeError::EntryNotFound(7))
        ));
    }
}

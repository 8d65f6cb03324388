//! Journal entry record

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single journal record.
///
/// `id` and `created_at` are fixed once the entry is created; only
/// `content` and `tags` change through an update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub id: u64,
    pub content: String,
    pub tags: Vec<String>,
    pub created_at: NaiveDate,
}

impl Entry {
    pub fn new(id: u64, content: String, tags: Vec<String>, created_at: NaiveDate) -> Self {
        Entry {
            id,
            content,
            tags,
            created_at,
        }
    }

    /// True when `query` occurs in the content or in any tag.
    /// Case-sensitive, plain substring match.
    pub fn matches(&self, query: &str) -> bool {
        self.content.contains(query) || self.tags.iter().any(|tag| tag.contains(query))
    }

    /// True when any of `tags` equals one of this entry's tags exactly.
    pub fn has_any_tag(&self, tags: &[String]) -> bool {
        tags.iter().any(|wanted| self.tags.contains(wanted))
    }

    /// Inclusive on both ends.
    pub fn created_between(&self, start: NaiveDate, end: NaiveDate) -> bool {
        start <= self.created_at && self.created_at <= end
    }
}

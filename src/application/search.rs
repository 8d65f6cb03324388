//! Search entries use case

use crate::application::JournalStore;
use crate::domain::{DateRef, Entry};
use crate::error::{Result, ScribeError};
use chrono::NaiveDate;

/// One family of search criteria
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchQuery {
    Keyword(String),
    Tags(Vec<String>),
    DateRange { start: NaiveDate, end: NaiveDate },
}

impl SearchQuery {
    /// Build a query from command-line arguments. Date bounds are resolved
    /// against `today`; a missing bound leaves that end of the range open.
    pub fn from_args(
        keyword: Option<String>,
        tags: Vec<String>,
        from: Option<&str>,
        to: Option<&str>,
        today: NaiveDate,
    ) -> Result<Self> {
        if let Some(keyword) = keyword {
            return Ok(SearchQuery::Keyword(keyword));
        }
        if !tags.is_empty() {
            return Ok(SearchQuery::Tags(tags));
        }
        if from.is_none() && to.is_none() {
            return Err(ScribeError::Config(
                "Nothing to search for: give a keyword, --tag, or --from/--to".to_string(),
            ));
        }

        let start = match from {
            Some(s) => DateRef::parse(s)?.resolve(today)?,
            None => NaiveDate::MIN,
        };
        let end = match to {
            Some(s) => DateRef::parse(s)?.resolve(today)?,
            None => NaiveDate::MAX,
        };
        Ok(SearchQuery::DateRange { start, end })
    }

    pub fn execute(&self, store: &JournalStore) -> Vec<Entry> {
        match self {
            SearchQuery::Keyword(query) => store.search_by_keyword(query),
            SearchQuery::Tags(tags) => store.search_by_tags(tags),
            SearchQuery::DateRange { start, end } => store.search_by_date_range(*start, *end),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_keyword_takes_precedence() {
        let query =
            SearchQuery::from_args(Some("milk".into()), vec![], None, None, day(2024, 1, 1))
                .unwrap();
        assert_eq!(query, SearchQuery::Keyword("milk".into()));
    }

    #[test]
    fn test_tags_query() {
        let query =
            SearchQuery::from_args(None, vec!["work".into()], None, None, day(2024, 1, 1))
                .unwrap();
        assert_eq!(query, SearchQuery::Tags(vec!["work".into()]));
    }

    #[test]
    fn test_date_bounds_resolve_against_today() {
        let query = SearchQuery::from_args(
            None,
            vec![],
            Some("yesterday"),
            Some("2024-03-01"),
            day(2024, 2, 10),
        )
        .unwrap();
        assert_eq!(
            query,
            SearchQuery::DateRange {
                start: day(2024, 2, 9),
                end: day(2024, 3, 1)
            }
        );
    }

    #[test]
    fn test_open_ended_ranges() {
        let query =
            SearchQuery::from_args(None, vec![], Some("2024-01-01"), None, day(2024, 2, 10))
                .unwrap();
        assert_eq!(
            query,
            SearchQuery::DateRange {
                start: day(2024, 1, 1),
                end: NaiveDate::MAX
            }
        );
    }

    #[test]
    fn test_no_criteria_is_an_error() {
        assert!(SearchQuery::from_args(None, vec![], None, None, day(2024, 1, 1)).is_err());
    }

    #[test]
    fn test_bad_date_is_reported() {
        assert!(matches!(
            SearchQuery::from_args(None, vec![], Some("soon"), None, day(2024, 1, 1)),
            Err(ScribeError::InvalidDate(_))
        ));
    }

    #[test]
    fn test_date_before_calendar_start_is_reported() {
        assert!(matches!(
            SearchQuery::from_args(
                None,
                vec![],
                Some("4000000000 days ago"),
                None,
                day(2024, 1, 1)
            ),
            Err(ScribeError::InvalidDate(_))
        ));
    }

    #[test]
    fn test_execute_date_range() {
        let temp = TempDir::new().unwrap();
        let store = JournalStore::load(temp.path().join("j.json")).unwrap();
        store.add_on("old", vec![], day(2023, 6, 1)).unwrap();
        store.add_on("new", vec![], day(2024, 6, 1)).unwrap();

        let query = SearchQuery::DateRange {
            start: day(2024, 1, 1),
            end: NaiveDate::MAX,
        };
        let found = query.execute(&store);

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].content, "new");
    }
}

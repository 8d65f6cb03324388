//! Date argument parsing and resolution

use crate::error::{Result, ScribeError};
use chrono::{Duration, NaiveDate};

/// A date given on the command line, resolved against a base date
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateRef {
    /// Current day
    Today,
    /// Previous day
    Yesterday,
    /// Next day
    Tomorrow,
    /// `<n> days ago`
    DaysAgo(u32),
    /// Specific date (YYYY-MM-DD)
    Specific(NaiveDate),
}

impl DateRef {
    /// Parse a date reference string
    pub fn parse(input: &str) -> Result<Self> {
        let normalized = input.trim().to_lowercase();

        match normalized.as_str() {
            "today" | "now" => Ok(DateRef::Today),
            "yesterday" => Ok(DateRef::Yesterday),
            "tomorrow" => Ok(DateRef::Tomorrow),
            _ if normalized.ends_with(" ago") => {
                let words: Vec<&str> = normalized.split_whitespace().collect();
                match words.as_slice() {
                    [count, "day" | "days", "ago"] => count
                        .parse::<u32>()
                        .map(DateRef::DaysAgo)
                        .map_err(|_| ScribeError::InvalidDate(input.to_string())),
                    _ => Err(ScribeError::InvalidDate(input.to_string())),
                }
            }
            _ => NaiveDate::parse_from_str(&normalized, "%Y-%m-%d")
                .map(DateRef::Specific)
                .map_err(|_| ScribeError::InvalidDate(input.to_string())),
        }
    }

    /// Resolve this reference to an actual date. Fails if the result falls
    /// outside the representable calendar.
    pub fn resolve(&self, base_date: NaiveDate) -> Result<NaiveDate> {
        let resolved = match self {
            DateRef::Today => Some(base_date),
            DateRef::Yesterday => base_date.checked_sub_signed(Duration::days(1)),
            DateRef::Tomorrow => base_date.checked_add_signed(Duration::days(1)),
            DateRef::DaysAgo(n) => base_date.checked_sub_signed(Duration::days(i64::from(*n))),
            DateRef::Specific(date) => Some(*date),
        };
        resolved.ok_or_else(|| ScribeError::InvalidDate(self.describe()))
    }

    fn describe(&self) -> String {
        match self {
            DateRef::Today => "today".to_string(),
            DateRef::Yesterday => "yesterday".to_string(),
            DateRef::Tomorrow => "tomorrow".to_string(),
            DateRef::DaysAgo(n) => format!("{} days ago", n),
            DateRef::Specific(date) => date.to_string(),
        }
    }
}

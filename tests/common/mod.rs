// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use chrono::NaiveDate;
use kopilka::domain::{parse_date, Entry};

/// Helper to parse a `DD.MM.YYYY` date string
pub fn date(s: &str) -> NaiveDate {
    parse_date(s).unwrap()
}

/// Entry pinned to an explicit date
pub fn entry_on(amount: f64, comment: &str, date_str: &str) -> Entry {
    Entry::new(amount, comment).with_date(date(date_str))
}

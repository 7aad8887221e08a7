use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

/// Date format used wherever entry dates are written by hand: `31.12.2024`.
pub const DATE_FORMAT: &str = "%d.%m.%Y";

/// Parse a `DD.MM.YYYY` date string.
pub fn parse_date(input: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(input.trim(), DATE_FORMAT)
}

/// One dated record: money spent or calories consumed.
/// Entries are immutable - corrections are made by recording new entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    /// Amount in the tracker's unit (currency units or kcal). Never negative.
    pub amount: f64,
    /// Human-readable note ("coffee", "lunch").
    pub comment: String,
    /// Calendar date the amount was spent or consumed.
    pub date: NaiveDate,
}

impl Entry {
    /// Create an entry dated today.
    pub fn new(amount: f64, comment: impl Into<String>) -> Self {
        assert!(amount >= 0.0, "Entry amount must be non-negative");
        Self {
            amount,
            comment: comment.into(),
            date: Local::now().date_naive(),
        }
    }

    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = date;
        self
    }
}

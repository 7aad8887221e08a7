use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use super::Entry;

/// Append-only list of entries owned by a single tracker.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Ledger {
    entries: Vec<Entry>,
}

impl Ledger {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append an entry. Entries are never updated or removed.
    pub fn add(&mut self, entry: Entry) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of amounts recorded exactly on `date`.
    pub fn sum_on(&self, date: NaiveDate) -> f64 {
        self.entries
            .iter()
            .filter(|entry| entry.date == date)
            .map(|entry| entry.amount)
            .sum()
    }

    /// Sum of amounts in the inclusive window `[end - days, end]`.
    /// Entries dated after `end` are excluded.
    pub fn sum_in_window(&self, end: NaiveDate, days: i64) -> f64 {
        let start = end - Duration::days(days);
        self.entries
            .iter()
            .filter(|entry| entry.date >= start && entry.date <= end)
            .map(|entry| entry.amount)
            .sum()
    }
}

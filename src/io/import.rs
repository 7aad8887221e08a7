use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::application::AppError;
use crate::domain::{parse_date, Entry};

/// One row of an entries CSV file, before validation.
#[derive(Debug, Deserialize)]
struct RawEntry {
    amount: f64,
    comment: String,
    #[serde(default)]
    date: Option<String>,
}

/// Read ledger entries from CSV with an `amount,comment,date` header.
/// The date column is optional `DD.MM.YYYY` text; an empty or missing field
/// dates the entry today. The first malformed row aborts the load.
pub fn read_entries<R: Read>(reader: R) -> Result<Vec<Entry>, AppError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut entries = Vec::new();

    for (index, row) in csv_reader.deserialize::<RawEntry>().enumerate() {
        let line = index + 2; // +2 for header and 0-indexing
        let raw = row?;

        if !raw.amount.is_finite() || raw.amount < 0.0 {
            return Err(AppError::InvalidAmount {
                line,
                reason: format!("{} is not a non-negative number", raw.amount),
            });
        }

        let mut entry = Entry::new(raw.amount, raw.comment);
        if let Some(text) = raw.date.filter(|text| !text.trim().is_empty()) {
            let date = parse_date(&text).map_err(|source| AppError::InvalidDate { line, source })?;
            entry = entry.with_date(date);
        }
        entries.push(entry);
    }

    Ok(entries)
}

/// Read entries from a CSV file on disk.
pub fn read_entries_from_path(path: impl AsRef<Path>) -> Result<Vec<Entry>, AppError> {
    let file = File::open(path)?;
    read_entries(file)
}

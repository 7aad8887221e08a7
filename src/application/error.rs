use thiserror::Error;

use crate::domain::UnknownCurrency;

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    UnknownCurrency(#[from] UnknownCurrency),

    #[error("Invalid date on line {line}: {source}")]
    InvalidDate {
        line: usize,
        #[source]
        source: chrono::ParseError,
    },

    #[error("Invalid amount on line {line}: {reason}")]
    InvalidAmount { line: usize, reason: String },

    #[error("Daily limit must be positive, got {0}")]
    InvalidLimit(f64),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

use chrono::NaiveDate;
use serde::Serialize;

use super::AppError;
use crate::domain::{CaloriesTracker, CashTracker, DATE_FORMAT};

/// Snapshot of one day's standing against the daily limit, ready to print
/// as text or serialize as JSON.
#[derive(Debug, Clone, Serialize)]
pub struct DayReport {
    pub date: NaiveDate,
    pub limit: f64,
    pub today_total: f64,
    pub week_total: f64,
    /// Remaining-budget message produced by the tracker.
    pub message: String,
}

impl DayReport {
    /// Build a report for a cash tracker, with the remaining budget
    /// converted into the requested currency.
    pub fn for_cash(tracker: &CashTracker, code: &str, date: NaiveDate) -> Result<Self, AppError> {
        let message = tracker.cash_remained_on(code, date)?;
        Ok(Self {
            date,
            limit: tracker.limit(),
            today_total: tracker.stats_on(date),
            week_total: tracker.week_stats_on(date),
            message,
        })
    }

    /// Build a report for a calorie tracker.
    pub fn for_calories(tracker: &CaloriesTracker, date: NaiveDate) -> Self {
        Self {
            date,
            limit: tracker.limit(),
            today_total: tracker.stats_on(date),
            week_total: tracker.week_stats_on(date),
            message: tracker.calories_remained_on(date),
        }
    }

    /// Plain-text report lines printed by the CLI.
    pub fn render_text(&self) -> String {
        format!(
            "Date: {}\nToday: {:.2} of {:.2}\nLast 7 days: {:.2}\n{}",
            self.date.format(DATE_FORMAT),
            self.today_total,
            self.limit,
            self.week_total,
            self.message
        )
    }
}

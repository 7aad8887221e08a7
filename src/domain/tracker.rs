use chrono::{Local, NaiveDate};

use super::{Currency, Entry, Ledger, UnknownCurrency};

/// Days covered by the weekly statistics window, inclusive of both ends.
const WEEK_WINDOW_DAYS: i64 = 7;

/// Daily-limit-aware aggregator over a ledger. Shared core of the cash and
/// calorie trackers.
///
/// The limit is fixed at construction and every tracker owns a freshly
/// allocated ledger, so totals never leak between tracker instances.
#[derive(Debug, Clone)]
pub struct BudgetTracker {
    limit: f64,
    ledger: Ledger,
}

impl BudgetTracker {
    /// Create a tracker with the given positive daily limit.
    pub fn new(limit: f64) -> Self {
        assert!(limit > 0.0, "Daily limit must be positive");
        Self {
            limit,
            ledger: Ledger::new(),
        }
    }

    pub fn limit(&self) -> f64 {
        self.limit
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Record a new entry.
    pub fn add_record(&mut self, entry: Entry) {
        self.ledger.add(entry);
    }

    /// Total recorded on `date`.
    pub fn stats_on(&self, date: NaiveDate) -> f64 {
        self.ledger.sum_on(date)
    }

    /// Total recorded today.
    pub fn today_stats(&self) -> f64 {
        self.stats_on(Local::now().date_naive())
    }

    /// Total recorded in the week ending on `date`.
    pub fn week_stats_on(&self, date: NaiveDate) -> f64 {
        self.ledger.sum_in_window(date, WEEK_WINDOW_DAYS)
    }

    /// Total recorded in the last 7 days.
    pub fn week_stats(&self) -> f64 {
        self.week_stats_on(Local::now().date_naive())
    }

    /// True while the total for `date` is strictly below the limit.
    pub fn check_limit_on(&self, date: NaiveDate) -> bool {
        self.stats_on(date) < self.limit
    }

    /// True while today's total is strictly below the limit.
    pub fn check_limit(&self) -> bool {
        self.check_limit_on(Local::now().date_naive())
    }
}

/// Money tracker: reports remaining budget converted into a chosen currency.
#[derive(Debug, Clone)]
pub struct CashTracker {
    tracker: BudgetTracker,
}

impl CashTracker {
    pub fn new(limit: f64) -> Self {
        Self {
            tracker: BudgetTracker::new(limit),
        }
    }

    pub fn limit(&self) -> f64 {
        self.tracker.limit()
    }

    pub fn add_record(&mut self, entry: Entry) {
        self.tracker.add_record(entry);
    }

    pub fn stats_on(&self, date: NaiveDate) -> f64 {
        self.tracker.stats_on(date)
    }

    pub fn today_stats(&self) -> f64 {
        self.tracker.today_stats()
    }

    pub fn week_stats_on(&self, date: NaiveDate) -> f64 {
        self.tracker.week_stats_on(date)
    }

    pub fn week_stats(&self) -> f64 {
        self.tracker.week_stats()
    }

    pub fn check_limit(&self) -> bool {
        self.tracker.check_limit()
    }

    /// Remaining-budget message for today, in the requested currency.
    /// The code must be one of "rub", "usd" or "eur".
    pub fn today_cash_remained(&self, code: &str) -> Result<String, UnknownCurrency> {
        self.cash_remained_on(code, Local::now().date_naive())
    }

    /// Remaining-budget message for an explicit date.
    pub fn cash_remained_on(&self, code: &str, date: NaiveDate) -> Result<String, UnknownCurrency> {
        let currency =
            Currency::from_str(code).ok_or_else(|| UnknownCurrency(code.to_string()))?;

        let spent = self.tracker.stats_on(date);
        let limit = self.tracker.limit();

        let message = if spent < limit {
            let rest = (limit - spent) / currency.rate();
            format!("На сегодня осталось {:.2} {}", rest, currency.label())
        } else if spent == limit {
            String::from("Денег нет, держись")
        } else {
            let debt = (spent - limit) / currency.rate();
            format!("Денег нет, держись: твой долг - {:.2} {}", debt, currency.label())
        };
        Ok(message)
    }
}

/// Calorie tracker: same aggregates, no currency conversion.
#[derive(Debug, Clone)]
pub struct CaloriesTracker {
    tracker: BudgetTracker,
}

impl CaloriesTracker {
    pub fn new(limit: f64) -> Self {
        Self {
            tracker: BudgetTracker::new(limit),
        }
    }

    pub fn limit(&self) -> f64 {
        self.tracker.limit()
    }

    pub fn add_record(&mut self, entry: Entry) {
        self.tracker.add_record(entry);
    }

    pub fn stats_on(&self, date: NaiveDate) -> f64 {
        self.tracker.stats_on(date)
    }

    pub fn today_stats(&self) -> f64 {
        self.tracker.today_stats()
    }

    pub fn week_stats_on(&self, date: NaiveDate) -> f64 {
        self.tracker.week_stats_on(date)
    }

    pub fn week_stats(&self) -> f64 {
        self.tracker.week_stats()
    }

    pub fn check_limit(&self) -> bool {
        self.tracker.check_limit()
    }

    /// Remaining-calories message for today.
    pub fn calories_remained(&self) -> String {
        self.calories_remained_on(Local::now().date_naive())
    }

    /// Remaining-calories message for an explicit date.
    pub fn calories_remained_on(&self, date: NaiveDate) -> String {
        let eaten = self.tracker.stats_on(date);
        let limit = self.tracker.limit();

        if eaten < limit {
            format!(
                "Сегодня можно съесть что-нибудь ещё, но с общей калорийностью не более {:.0} кКал",
                limit - eaten
            )
        } else if eaten == limit {
            String::from("Хватит есть!")
        } else {
            format!("Хватит есть! Норма превышена на {:.0} кКал", eaten - limit)
        }
    }
}

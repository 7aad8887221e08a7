mod common;

use common::{date, entry_on};
use kopilka::application::{AppError, DayReport};
use kopilka::domain::{CaloriesTracker, CashTracker, UnknownCurrency};

#[test]
fn test_today_and_week_stats() {
    let today = date("15.03.2024");
    let mut tracker = CashTracker::new(1000.0);
    tracker.add_record(entry_on(200.0, "coffee", "15.03.2024"));
    tracker.add_record(entry_on(300.0, "lunch", "15.03.2024"));
    tracker.add_record(entry_on(691.0, "cinema", "08.03.2024"));

    // Only today's entries count towards the daily total, the weekly window
    // also picks up the entry from exactly seven days back.
    assert_eq!(tracker.stats_on(today), 500.0);
    assert_eq!(tracker.week_stats_on(today), 1191.0);
}

#[test]
fn test_week_window_skips_old_and_future_entries() {
    let today = date("15.03.2024");
    let mut tracker = CashTracker::new(1000.0);
    tracker.add_record(entry_on(100.0, "in window", "09.03.2024"));
    tracker.add_record(entry_on(50.0, "too old", "07.03.2024"));
    tracker.add_record(entry_on(25.0, "future", "16.03.2024"));

    assert_eq!(tracker.week_stats_on(today), 100.0);
}

#[test]
fn test_remaining_budget_in_rubles() {
    let today = date("15.03.2024");
    let mut tracker = CashTracker::new(1000.0);
    tracker.add_record(entry_on(200.0, "coffee", "15.03.2024"));
    tracker.add_record(entry_on(300.0, "lunch", "15.03.2024"));
    tracker.add_record(entry_on(691.0, "cinema", "08.03.2024"));

    assert_eq!(
        tracker.cash_remained_on("rub", today).unwrap(),
        "На сегодня осталось 500.00 руб"
    );
}

#[test]
fn test_remaining_budget_in_usd() {
    let today = date("15.03.2024");
    let mut tracker = CashTracker::new(1000.0);
    tracker.add_record(entry_on(500.0, "groceries", "15.03.2024"));

    // (1000 - 500) / 62.91 = 7.95 rounded to two decimals
    assert_eq!(
        tracker.cash_remained_on("usd", today).unwrap(),
        "На сегодня осталось 7.95 USD"
    );
}

#[test]
fn test_no_money_left_at_exact_limit() {
    let today = date("15.03.2024");
    let mut tracker = CashTracker::new(1000.0);
    tracker.add_record(entry_on(400.0, "rent", "15.03.2024"));
    tracker.add_record(entry_on(600.0, "utilities", "15.03.2024"));

    assert_eq!(
        tracker.cash_remained_on("rub", today).unwrap(),
        "Денег нет, держись"
    );
}

#[test]
fn test_debt_when_over_limit() {
    let today = date("15.03.2024");
    let mut tracker = CashTracker::new(1000.0);
    tracker.add_record(entry_on(1200.0, "car repair", "15.03.2024"));

    assert_eq!(
        tracker.cash_remained_on("rub", today).unwrap(),
        "Денег нет, держись: твой долг - 200.00 руб"
    );
}

#[test]
fn test_unknown_currency_is_rejected() {
    let tracker = CashTracker::new(1000.0);

    let err = tracker
        .cash_remained_on("gbp", date("15.03.2024"))
        .unwrap_err();
    assert_eq!(err, UnknownCurrency("gbp".to_string()));
}

#[test]
fn test_calories_tracker_has_no_currency() {
    let today = date("15.03.2024");
    let mut tracker = CaloriesTracker::new(2000.0);
    tracker.add_record(entry_on(800.0, "breakfast", "15.03.2024"));
    tracker.add_record(entry_on(700.0, "lunch", "15.03.2024"));

    assert_eq!(
        tracker.calories_remained_on(today),
        "Сегодня можно съесть что-нибудь ещё, но с общей калорийностью не более 500 кКал"
    );
}

#[test]
fn test_trackers_do_not_share_ledgers() {
    let today = date("15.03.2024");
    let mut first = CashTracker::new(1000.0);
    let second = CashTracker::new(1000.0);

    first.add_record(entry_on(500.0, "groceries", "15.03.2024"));

    assert_eq!(first.stats_on(today), 500.0);
    assert_eq!(second.stats_on(today), 0.0);
}

#[test]
fn test_day_report_json_shape() {
    let today = date("15.03.2024");
    let mut tracker = CashTracker::new(1000.0);
    tracker.add_record(entry_on(500.0, "groceries", "15.03.2024"));

    let report = DayReport::for_cash(&tracker, "rub", today).unwrap();
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["date"], "2024-03-15");
    assert_eq!(json["limit"], 1000.0);
    assert_eq!(json["today_total"], 500.0);
    assert_eq!(json["week_total"], 500.0);
    assert_eq!(json["message"], "На сегодня осталось 500.00 руб");
}

#[test]
fn test_day_report_rejects_unknown_currency() {
    let tracker = CashTracker::new(1000.0);
    let result = DayReport::for_cash(&tracker, "chf", date("15.03.2024"));

    assert!(matches!(result, Err(AppError::UnknownCurrency(_))));
}

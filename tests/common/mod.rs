#![allow(dead_code)]

use std::sync::Arc;

use chrono::{Duration, NaiveDate};
use limit_tracker::{
    currency::ExchangeRates,
    ledger::{Calculator, CaloriesCalculator, CashCalculator, Record},
    time::FixedClock,
};

/// Date every fixture calculator treats as "today".
pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 15).expect("valid fixture date")
}

pub fn days_ago(days: i64) -> NaiveDate {
    today() - Duration::days(days)
}

pub fn clock() -> Arc<FixedClock> {
    Arc::new(FixedClock::new(today()))
}

pub fn calculator(limit: f64) -> Calculator {
    Calculator::with_clock(limit, clock())
}

pub fn calories(limit: f64) -> CaloriesCalculator {
    CaloriesCalculator::with_clock(limit, clock())
}

pub fn cash(limit: f64) -> CashCalculator {
    CashCalculator::with_clock(limit, ExchangeRates::default(), clock())
}

pub fn record(amount: f64, days_back: i64) -> Record {
    Record::on(amount, format!("{days_back} days back"), days_ago(days_back))
}

use std::fmt;
use std::sync::Arc;

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use super::record::Record;
use crate::errors::TrackerError;
use crate::time::{Clock, SystemClock};

/// Number of calendar days, today included, covered by the week window.
pub const WEEK_DAYS: i64 = 7;

/// Inclusive range of calendar dates.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateWindow {
    /// The `days` calendar days ending on `end`, both bounds inclusive.
    ///
    /// The start is clamped to [`NaiveDate::MIN`] when the span reaches past it.
    pub fn trailing(end: NaiveDate, days: i64) -> Self {
        let span = days.max(1) - 1;
        let start = Duration::try_days(span)
            .and_then(|span| end.checked_sub_signed(span))
            .unwrap_or(NaiveDate::MIN);
        Self { start, end }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}

/// Serializable view of a calculator's totals on a given day.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LimitSnapshot {
    pub limit: f64,
    pub today: NaiveDate,
    pub today_stats: f64,
    pub today_remained: f64,
    pub week_stats: f64,
    pub record_count: usize,
}

impl LimitSnapshot {
    pub fn to_json(&self) -> Result<String, TrackerError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Daily limit accumulator shared by the calories and cash calculators.
#[derive(Clone)]
pub struct Calculator {
    limit: f64,
    records: Vec<Record>,
    clock: Arc<dyn Clock>,
}

impl Calculator {
    pub fn new(limit: f64) -> Self {
        Self::with_clock(limit, Arc::new(SystemClock))
    }

    pub fn with_clock(limit: f64, clock: Arc<dyn Clock>) -> Self {
        Self {
            limit,
            records: Vec::new(),
            clock,
        }
    }

    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }

    fn sum_where(&self, keep: impl Fn(NaiveDate) -> bool) -> f64 {
        self.records
            .iter()
            .filter(|record| keep(record.date()))
            .map(Record::amount)
            .sum()
    }

    fn stats_on(&self, day: NaiveDate) -> f64 {
        self.sum_where(|date| date == day)
    }

    fn week_stats_on(&self, day: NaiveDate) -> f64 {
        let window = DateWindow::trailing(day, WEEK_DAYS);
        self.sum_where(|date| window.contains(date))
    }
}

impl fmt::Debug for Calculator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Calculator")
            .field("limit", &self.limit)
            .field("records", &self.records)
            .finish_non_exhaustive()
    }
}

/// Queries shared by every calculator. Implementors only expose their embedded [`Calculator`].
pub trait DailyLimit {
    fn calculator(&self) -> &Calculator;

    fn calculator_mut(&mut self) -> &mut Calculator;

    fn limit(&self) -> f64 {
        self.calculator().limit
    }

    fn records(&self) -> &[Record] {
        &self.calculator().records
    }

    fn add_record(&mut self, record: Record) {
        tracing::debug!(amount = record.amount(), date = %record.date(), "record added");
        self.calculator_mut().records.push(record);
    }

    /// Sum of amounts dated today, re-reading the clock on each call.
    fn today_stats(&self) -> f64 {
        let calculator = self.calculator();
        calculator.stats_on(calculator.clock.today())
    }

    /// `limit - today_stats()`; negative once the limit is exceeded.
    fn today_remained(&self) -> f64 {
        self.limit() - self.today_stats()
    }

    /// The seven calendar days ending today. A record dated exactly seven days ago falls outside.
    fn week_window(&self) -> DateWindow {
        DateWindow::trailing(self.calculator().clock.today(), WEEK_DAYS)
    }

    fn week_stats(&self) -> f64 {
        let calculator = self.calculator();
        calculator.week_stats_on(calculator.clock.today())
    }

    /// Totals for a single reading of the clock.
    fn snapshot(&self) -> LimitSnapshot {
        let calculator = self.calculator();
        let today = calculator.clock.today();
        let today_stats = calculator.stats_on(today);
        LimitSnapshot {
            limit: calculator.limit,
            today,
            today_stats,
            today_remained: calculator.limit - today_stats,
            week_stats: calculator.week_stats_on(today),
            record_count: calculator.records.len(),
        }
    }
}

impl DailyLimit for Calculator {
    fn calculator(&self) -> &Calculator {
        self
    }

    fn calculator_mut(&mut self) -> &mut Calculator {
        self
    }
}

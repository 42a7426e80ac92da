//! Dated records and the calculators that sum them against a daily limit.

pub mod calculator;
pub mod calories;
pub mod cash;
pub mod record;

pub use calculator::{Calculator, DailyLimit, DateWindow, LimitSnapshot, WEEK_DAYS};
pub use calories::CaloriesCalculator;
pub use cash::{CashCalculator, CashStatus};
pub use record::{Record, RECORD_DATE_FORMAT};

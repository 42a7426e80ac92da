use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::calculator::{Calculator, DailyLimit};
use crate::currency::{Currency, ExchangeRates};
use crate::messages;
use crate::time::Clock;

/// Outcome of a cash query, before it is rendered into a message.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub enum CashStatus {
    /// Exactly the whole limit has been spent.
    Spent,
    Left { amount: f64, currency: Currency },
    /// `amount` is the absolute value of the converted debt.
    Debt { amount: f64, currency: Currency },
}

impl CashStatus {
    pub fn message(&self) -> String {
        match self {
            CashStatus::Spent => messages::CASH_SPENT.to_string(),
            CashStatus::Left { amount, currency } => {
                messages::cash_left(*amount, currency.display_name())
            }
            CashStatus::Debt { amount, currency } => {
                messages::cash_debt(*amount, currency.display_name())
            }
        }
    }
}

/// Daily money budget, reportable in roubles, dollars or euros.
#[derive(Debug, Clone)]
pub struct CashCalculator {
    inner: Calculator,
    rates: ExchangeRates,
}

impl CashCalculator {
    pub fn new(limit: f64) -> Self {
        Self::with_rates(limit, ExchangeRates::default())
    }

    pub fn with_rates(limit: f64, rates: ExchangeRates) -> Self {
        Self {
            inner: Calculator::new(limit),
            rates,
        }
    }

    pub fn with_clock(limit: f64, rates: ExchangeRates, clock: Arc<dyn Clock>) -> Self {
        Self {
            inner: Calculator::with_clock(limit, clock),
            rates,
        }
    }

    pub fn rates(&self) -> &ExchangeRates {
        &self.rates
    }

    /// Typed form of [`CashCalculator::today_cash_remained`].
    pub fn today_cash_report(&self, currency: Currency) -> CashStatus {
        let left = self.today_remained();
        if left == 0.0 {
            return CashStatus::Spent;
        }
        let converted = self.rates.convert(left, currency);
        if 0.0 < left && left < self.limit() {
            CashStatus::Left {
                amount: converted,
                currency,
            }
        } else {
            CashStatus::Debt {
                amount: converted.abs(),
                currency,
            }
        }
    }

    /// Remaining money in `code` (`rub`, `usd` or `eur`).
    ///
    /// A fully spent limit is reported before the code is looked at; an unknown
    /// code yields [`messages::UNKNOWN_CURRENCY`] rather than an error.
    pub fn today_cash_remained(&self, code: &str) -> String {
        if self.today_remained() == 0.0 {
            return CashStatus::Spent.message();
        }
        match code.parse::<Currency>() {
            Ok(currency) => self.today_cash_report(currency).message(),
            Err(err) => {
                tracing::warn!(%err, "cash query with unsupported currency");
                messages::UNKNOWN_CURRENCY.to_string()
            }
        }
    }
}

impl DailyLimit for CashCalculator {
    fn calculator(&self) -> &Calculator {
        &self.inner
    }

    fn calculator_mut(&mut self) -> &mut Calculator {
        &mut self.inner
    }
}

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::TrackerError;

/// Currencies a cash calculator can report in.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Currency {
    Rub,
    Usd,
    Eur,
}

impl Currency {
    pub const ALL: [Currency; 3] = [Currency::Rub, Currency::Usd, Currency::Eur];

    /// Lowercase code accepted by `CashCalculator::today_cash_remained`.
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Rub => "rub",
            Currency::Usd => "usd",
            Currency::Eur => "eur",
        }
    }

    /// Label used inside user-facing messages.
    pub fn display_name(&self) -> &'static str {
        match self {
            Currency::Rub => "руб",
            Currency::Usd => "USD",
            Currency::Eur => "Euro",
        }
    }
}

impl FromStr for Currency {
    type Err = TrackerError;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        Currency::ALL
            .into_iter()
            .find(|currency| currency.code() == code)
            .ok_or_else(|| TrackerError::UnknownCurrency(code.to_string()))
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Fixed rates of each currency against the base unit (roubles).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ExchangeRates {
    #[serde(default = "ExchangeRates::default_usd")]
    pub usd: f64,
    #[serde(default = "ExchangeRates::default_eur")]
    pub eur: f64,
    #[serde(default = "ExchangeRates::default_rub")]
    pub rub: f64,
}

impl ExchangeRates {
    pub const USD_RATE: f64 = 70.0;
    pub const EURO_RATE: f64 = 80.0;
    pub const RUB_RATE: f64 = 1.0;

    fn default_usd() -> f64 {
        Self::USD_RATE
    }

    fn default_eur() -> f64 {
        Self::EURO_RATE
    }

    fn default_rub() -> f64 {
        Self::RUB_RATE
    }

    pub fn rate_for(&self, currency: Currency) -> f64 {
        match currency {
            Currency::Rub => self.rub,
            Currency::Usd => self.usd,
            Currency::Eur => self.eur,
        }
    }

    /// Rejects rates that would make a conversion meaningless.
    pub fn validate(&self) -> Result<(), TrackerError> {
        for currency in Currency::ALL {
            let rate = self.rate_for(currency);
            if !rate.is_finite() || rate <= 0.0 {
                return Err(TrackerError::InvalidRate {
                    currency: currency.code().to_string(),
                    rate,
                });
            }
        }
        Ok(())
    }

    /// Converts an amount in the base unit into `currency`, rounded to cents.
    pub fn convert(&self, amount: f64, currency: Currency) -> f64 {
        round_to_cents(amount / self.rate_for(currency))
    }
}

impl Default for ExchangeRates {
    fn default() -> Self {
        Self {
            usd: Self::USD_RATE,
            eur: Self::EURO_RATE,
            rub: Self::RUB_RATE,
        }
    }
}

/// Rounds to two decimal places, exact halves going to the even cent.
pub fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

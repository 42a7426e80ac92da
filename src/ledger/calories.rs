use std::sync::Arc;

use super::calculator::{Calculator, DailyLimit};
use crate::messages;
use crate::time::Clock;

/// Daily calorie budget.
#[derive(Debug, Clone)]
pub struct CaloriesCalculator {
    inner: Calculator,
}

impl CaloriesCalculator {
    pub fn new(limit: f64) -> Self {
        Self {
            inner: Calculator::new(limit),
        }
    }

    pub fn with_clock(limit: f64, clock: Arc<dyn Clock>) -> Self {
        Self {
            inner: Calculator::with_clock(limit, clock),
        }
    }

    /// Whether more food is allowed today.
    ///
    /// Only `0 < left < limit` counts as allowed; `left >= limit` is reachable
    /// solely through non-positive entries and is reported as forbidden too.
    pub fn calories_remained(&self) -> String {
        let left = self.today_remained();
        tracing::debug!(left, limit = self.limit(), "calories remained");
        if 0.0 < left && left < self.limit() {
            messages::calories_allowed(left)
        } else {
            messages::CALORIES_FORBIDDEN.to_string()
        }
    }
}

impl DailyLimit for CaloriesCalculator {
    fn calculator(&self) -> &Calculator {
        &self.inner
    }

    fn calculator_mut(&mut self) -> &mut Calculator {
        &mut self.inner
    }
}

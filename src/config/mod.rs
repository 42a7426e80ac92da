use serde::{Deserialize, Serialize};

use crate::currency::ExchangeRates;
use crate::errors::TrackerError;

pub const DEFAULT_LOG_DIRECTIVE: &str = "limit_tracker=info";

/// Tunables for a tracker session. Every field falls back to its default.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrackerConfig {
    #[serde(default)]
    pub rates: ExchangeRates,
    #[serde(default = "TrackerConfig::default_log_directive")]
    pub log_directive: String,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            rates: ExchangeRates::default(),
            log_directive: Self::default_log_directive(),
        }
    }
}

impl TrackerConfig {
    fn default_log_directive() -> String {
        DEFAULT_LOG_DIRECTIVE.into()
    }

    pub fn from_json_str(data: &str) -> Result<Self, TrackerError> {
        let config: TrackerConfig = serde_json::from_str(data)?;
        config.rates.validate()?;
        Ok(config)
    }

    pub fn to_json_string(&self) -> Result<String, TrackerError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#![doc(test(attr(deny(warnings))))]

//! Limit Tracker records dated calorie or money entries and reports how much of
//! a daily limit remains today or was used over the trailing week.

pub mod config;
pub mod currency;
pub mod errors;
pub mod ledger;
pub mod messages;
pub mod time;
pub mod utils;

pub use errors::TrackerError;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Limit Tracker tracing initialized.");
    });
}

/// Initializes global tracing using the directive from `config`.
pub fn init_with(config: &config::TrackerConfig) {
    INIT_TRACING.call_once(|| {
        utils::init_tracing_with(&config.log_directive);
        tracing::info!(directive = %config.log_directive, "Limit Tracker tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
        super::init_with(&super::config::TrackerConfig::default());
    }
}

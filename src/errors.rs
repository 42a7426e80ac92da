use thiserror::Error;

/// Error type that captures tracker failures.
#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("Invalid date `{input}`, expected DD.MM.YYYY: {source}")]
    DateParse {
        input: String,
        #[source]
        source: chrono::ParseError,
    },
    #[error("Unknown currency: {0}")]
    UnknownCurrency(String),
    #[error("Invalid exchange rate for {currency}: {rate}")]
    InvalidRate { currency: String, rate: f64 },
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

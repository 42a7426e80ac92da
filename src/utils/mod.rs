use std::sync::Once;

use crate::config::DEFAULT_LOG_DIRECTIVE;

static TRACING_INIT: Once = Once::new();

/// Initializes the global tracing subscriber with sensible defaults.
pub fn init_tracing() {
    init_tracing_with(DEFAULT_LOG_DIRECTIVE);
}

/// Initializes the global tracing subscriber, adding `directive` to the `RUST_LOG` filter.
///
/// Only the first call installs a subscriber. An unparsable directive is skipped
/// and reported as a warning once the subscriber is in place.
pub fn init_tracing_with(directive: &str) {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{filter::Directive, fmt, EnvFilter};

        let mut filter = EnvFilter::from_default_env();
        let rejected = match directive.parse::<Directive>() {
            Ok(parsed) => {
                filter = filter.add_directive(parsed);
                None
            }
            Err(err) => Some(err),
        };

        let _ = fmt().with_env_filter(filter).try_init();

        if let Some(err) = rejected {
            tracing::warn!(%directive, %err, "ignoring unparsable log directive");
        }
    });
}

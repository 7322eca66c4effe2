//! Tracing subscriber setup.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{DEFAULT_LOG_FILTER, StorefrontConfig};

/// Install the global tracing subscriber.
///
/// Uses the configured filter directives, falling back to
/// [`DEFAULT_LOG_FILTER`] if they do not parse. Calling this more than once
/// is harmless; later calls leave the first subscriber in place.
pub fn init(config: &StorefrontConfig) {
    let env_filter = EnvFilter::try_new(&config.log_filter)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    // Logs go to stderr so command output on stdout stays clean
    let json_layer = config.log_json.then(|| {
        tracing_subscriber::fmt::layer()
            .json()
            .flatten_event(true)
            .with_writer(std::io::stderr)
    });
    let text_layer = (!config.log_json)
        .then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    let installed = tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(text_layer)
        .try_init()
        .is_ok();

    if installed {
        tracing::debug!(
            filter = %config.log_filter,
            json = config.log_json,
            "tracing initialized"
        );
    }
}

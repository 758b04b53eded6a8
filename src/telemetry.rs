//! Tracing setup.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{LogFormat, LoggingConfig, DEFAULT_LOG_FILTER};

/// Install the global tracing subscriber.
///
/// The filter comes from `LoggingConfig::filter` (sourced from `RUST_LOG`).
/// An unparsable filter falls back to the default and is reported once
/// the subscriber is up.
pub fn init(logging: &LoggingConfig) {
    let (filter, rejected) = build_filter(&logging.filter);

    let registry = tracing_subscriber::registry().with(filter);

    match logging.format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
    }

    if let Some(error) = rejected {
        tracing::warn!(
            filter = %logging.filter,
            %error,
            "Invalid log filter, using {}",
            DEFAULT_LOG_FILTER
        );
    }
}

/// Parse `spec`, or fall back to the default filter and return the parse error.
fn build_filter(spec: &str) -> (EnvFilter, Option<String>) {
    match EnvFilter::try_new(spec) {
        Ok(filter) => (filter, None),
        Err(e) => (EnvFilter::new(DEFAULT_LOG_FILTER), Some(e.to_string())),
    }
}

//! Tracing subscriber setup

use tracing_subscriber::EnvFilter;

use crate::cli::LogFormat;

/// Filter applied when `RUST_LOG` is unset or unparsable
pub const DEFAULT_FILTER: &str = "info,recordshop=debug,tower_http=info";

/// Install the global subscriber. Call once, before anything logs.
pub fn init_tracing(format: LogFormat) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let subscriber = tracing_subscriber::fmt().with_env_filter(filter);

    match format {
        LogFormat::Pretty => subscriber.pretty().init(),
        LogFormat::Json => subscriber.json().init(),
    }
}

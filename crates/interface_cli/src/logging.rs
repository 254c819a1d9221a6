//! Tracing set-up
//!
//! Logs always go to stderr; stdout carries only command output.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Builds the log filter
///
/// `RUST_LOG` wins when set and valid, then `log_level`, then `info`.
pub fn build_filter(log_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Initializes the tracing subscriber for structured logging
///
/// # Arguments
///
/// * `log_level` - Fallback filter directive (trace, debug, info, warn, error)
/// * `json` - Emit one JSON object per event instead of text lines
pub fn init_tracing(log_level: &str, json: bool) {
    let json_layer = json.then(|| {
        tracing_subscriber::fmt::layer()
            .json()
            .with_writer(std::io::stderr)
    });
    let text_layer = (!json).then(|| {
        tracing_subscriber::fmt::layer()
            .with_target(true)
            .with_writer(std::io::stderr)
    });

    tracing_subscriber::registry()
        .with(build_filter(log_level))
        .with(json_layer)
        .with(text_layer)
        .init();
}

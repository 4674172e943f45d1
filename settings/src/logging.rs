//! Logging utilities for consistent tracing across the workspace

use chrono::{DateTime, Utc};
use tracing::{error, info, warn};

/// Default level when neither the caller nor `RUST_LOG` asks for one
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Filter directives for our crates at `base_level`, keeping HTTP internals quiet
pub fn filter_directives(base_level: &str) -> String {
    format!("prober={base_level},settings={base_level},reqwest=warn,hyper=warn")
}

/// Initialize the stdout tracing subscriber.
///
/// An explicit `log_level` wins; otherwise `RUST_LOG` is honoured, falling back
/// to [`DEFAULT_LOG_LEVEL`]. Returns `false` if a subscriber was already set.
pub fn init_tracing(log_level: Option<&str>) -> bool {
    use tracing_subscriber::{EnvFilter, fmt};

    let env_filter = match log_level {
        Some(level) => EnvFilter::new(filter_directives(level)),
        None => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(filter_directives(DEFAULT_LOG_LEVEL))),
    };

    fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .try_init()
        .is_ok()
}

/// Get formatted timestamp for consistent logging
pub fn format_timestamp() -> String {
    let now: DateTime<Utc> = Utc::now();
    now.format("%H:%M:%S%.3f").to_string()
}

/// Contextual logging helper for startup messages
pub fn log_startup(component: &str, details: &str) {
    info!(
        component = component,
        timestamp = format_timestamp(),
        "🚀 Starting {}",
        details
    );
}

/// Contextual logging helper for error conditions
pub fn log_error(component: &str, context: &str, error: &dyn std::fmt::Display) {
    error!(
        component = component,
        timestamp = format_timestamp(),
        error = %error,
        "❌ {} failed: {}",
        context,
        error
    );
}

/// Contextual logging helper for non-fatal problems
pub fn log_warning(component: &str, context: &str, details: &str) {
    warn!(
        component = component,
        timestamp = format_timestamp(),
        "⚠️  {}: {}",
        context,
        details
    );
}

/// Contextual logging helper for success conditions
pub fn log_success(component: &str, message: &str) {
    info!(
        component = component,
        timestamp = format_timestamp(),
        "✅ {}",
        message
    );
}

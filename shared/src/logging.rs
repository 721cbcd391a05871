//! Shared logging utilities for consistent tracing across the workspace

use chrono::{DateTime, Utc};
use tracing::{error, info};

/// Crates whose events are enabled at the requested level
const WORKSPACE_TARGETS: &[&str] = &["webserver", "orchestrator", "clients", "shared"];

/// Build the env-filter directive string for a base level
pub fn filter_directives(log_level: Option<&str>) -> String {
    let base_level = log_level.unwrap_or("info");

    let mut directives: Vec<String> = WORKSPACE_TARGETS
        .iter()
        .map(|target| format!("{target}={base_level}"))
        .collect();
    directives.push("reqwest=warn".to_string());
    directives.push("hyper=warn".to_string());
    directives.push("tower_http=info".to_string());
    directives.join(",")
}

/// Initialize the stdout tracing subscriber with an optional log level
pub fn init_tracing_with_level(log_level: Option<&str>) {
    use tracing_subscriber::{EnvFilter, fmt};

    let level_filter = filter_directives(log_level);
    println!("📊 Log level: {level_filter}");

    fmt()
        .with_env_filter(EnvFilter::new(&level_filter))
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .init();
}

/// Get formatted timestamp for consistent logging
pub fn format_timestamp() -> String {
    let now: DateTime<Utc> = Utc::now();
    now.format("%H:%M:%S%.3f").to_string()
}

/// Macro for attempt-scoped info logging
#[macro_export]
macro_rules! attempt_info {
    ($attempt:expr, $($arg:tt)*) => {
        tracing::info!(
            attempt = %$attempt,
            timestamp = $crate::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Macro for attempt-scoped warning logging
#[macro_export]
macro_rules! attempt_warn {
    ($attempt:expr, $($arg:tt)*) => {
        tracing::warn!(
            attempt = %$attempt,
            timestamp = $crate::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Macro for attempt-scoped error logging
#[macro_export]
macro_rules! attempt_error {
    ($attempt:expr, $($arg:tt)*) => {
        tracing::error!(
            attempt = %$attempt,
            timestamp = $crate::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Macro for attempt-scoped debug logging
#[macro_export]
macro_rules! attempt_debug {
    ($attempt:expr, $($arg:tt)*) => {
        tracing::debug!(
            attempt = %$attempt,
            timestamp = $crate::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Contextual logging helper for startup messages
pub fn log_startup(details: &str) {
    info!(timestamp = format_timestamp(), "🚀 Starting {}", details);
}

/// Contextual logging helper for shutdown messages
pub fn log_shutdown(reason: &str) {
    info!(timestamp = format_timestamp(), "🛑 Shutting down: {}", reason);
}

/// Contextual logging helper for error conditions
pub fn log_error(context: &str, error: &dyn std::fmt::Display) {
    error!(
        timestamp = format_timestamp(),
        error = %error,
        "❌ {} failed: {}",
        context,
        error
    );
}

/// Contextual logging helper for success conditions
pub fn log_success(message: &str) {
    info!(timestamp = format_timestamp(), "✅ {}", message);
}

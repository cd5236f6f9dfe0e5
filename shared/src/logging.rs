//! Shared logging utilities for consistent tracing across all launcher components

use chrono::{DateTime, Utc};
use std::fmt;
use tracing::{error, info};

/// Pipeline component that emitted a log event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Component {
    /// Launch orchestrator state machine
    Launcher,
    /// Tracking payload collection
    Tracking,
    /// Remote link-parts lookup
    RemoteConfig,
    /// Backend resolution handshake
    Backend,
    /// Decision store persistence
    Store,
    /// Cookie persistence side effect
    Cookies,
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Component::Launcher => write!(f, "launcher"),
            Component::Tracking => write!(f, "tracking"),
            Component::RemoteConfig => write!(f, "remote_config"),
            Component::Backend => write!(f, "backend"),
            Component::Store => write!(f, "store"),
            Component::Cookies => write!(f, "cookies"),
        }
    }
}

/// Initialize tracing subscriber writing to stdout
///
/// `RUST_LOG` takes precedence over the supplied level when set.
pub fn init_tracing_with_level(log_level: Option<&str>) {
    use tracing_subscriber::{fmt, EnvFilter};

    let base_level = log_level.unwrap_or("info");
    let default_filter = format!("launcher={base_level},shared={base_level},reqwest=warn,hyper=warn");

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    // A second init (e.g. from tests) is not an error worth surfacing
    let _ = fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .try_init();
}

/// Get formatted timestamp for consistent logging
pub fn format_timestamp() -> String {
    let now: DateTime<Utc> = Utc::now();
    now.format("%H:%M:%S%.3f").to_string()
}

/// Macro for component-aware info logging
#[macro_export]
macro_rules! launch_info {
    ($component:expr, $($arg:tt)*) => {
        tracing::info!(
            component = %$component,
            timestamp = $crate::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Macro for component-aware warning logging
#[macro_export]
macro_rules! launch_warn {
    ($component:expr, $($arg:tt)*) => {
        tracing::warn!(
            component = %$component,
            timestamp = $crate::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Macro for component-aware error logging
#[macro_export]
macro_rules! launch_error {
    ($component:expr, $($arg:tt)*) => {
        tracing::error!(
            component = %$component,
            timestamp = $crate::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Macro for component-aware debug logging
#[macro_export]
macro_rules! launch_debug {
    ($component:expr, $($arg:tt)*) => {
        tracing::debug!(
            component = %$component,
            timestamp = $crate::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Contextual logging helper for startup messages
pub fn log_startup(component: Component, details: &str) {
    info!(
        component = %component,
        timestamp = format_timestamp(),
        "🚀 Starting {}",
        details
    );
}

/// Contextual logging helper for error conditions
pub fn log_error(component: Component, context: &str, error: &dyn std::fmt::Display) {
    error!(
        component = %component,
        timestamp = format_timestamp(),
        error = %error,
        "❌ {} failed: {}",
        context,
        error
    );
}

/// Contextual logging helper for success conditions
pub fn log_success(component: Component, message: &str) {
    info!(
        component = %component,
        timestamp = format_timestamp(),
        "✅ {}",
        message
    );
}

/// Contextual logging helper for a decided launch outcome
pub fn log_outcome(component: Component, source: &str, outcome: &crate::LaunchOutcome) {
    info!(
        component = %component,
        timestamp = format_timestamp(),
        outcome = %outcome,
        "📋 {}: {}",
        source,
        outcome
    );
}

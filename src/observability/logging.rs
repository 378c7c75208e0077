//! Global logging configuration.
//!
//! # Responsibilities
//! - Initialize the tracing subscriber once at startup
//! - Select the severity floor (Info, lowered to Debug in debug mode)
//! - Select the output mode: pretty console for development, JSON for
//!   machine parsing in production
//! - Own the liveness-probe exclusion list
//!
//! # Design Decisions
//! - Uses the tracing crate for structured logging
//! - `RUST_LOG` overrides the config-derived filter when set
//! - Fatal is a function, not a level: tracing has no Fatal, so it logs at
//!   Error and exits non-zero, which is the contract callers rely on

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::ServiceConfig;

/// Paths whose access lines are suppressed. Liveness probes hit these every
/// few seconds and would drown out real traffic.
pub const EXCLUDED_PATHS: [&str; 3] = ["/status", "/ping", "/health"];

/// Initialize the global subscriber from config. Call exactly once, before
/// the server starts accepting connections.
pub fn init(config: &ServiceConfig) {
    let floor = if config.debug_mode { "debug" } else { "info" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| floor.into());

    let registry = tracing_subscriber::registry().with(filter);
    if config.log_format {
        registry
            .with(tracing_subscriber::fmt::layer().json().flatten_event(true))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_target(false))
            .init();
    }
}

/// Log the message and terminate the process with a non-zero exit code.
pub fn fatal(message: impl std::fmt::Display) -> ! {
    tracing::error!("{message}");
    std::process::exit(1);
}

/// True if the URL falls under any excluded probe path.
pub fn is_excluded_path(url: &str) -> bool {
    EXCLUDED_PATHS.iter().any(|path| url.contains(path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn probe_paths_are_excluded() {
        assert!(is_excluded_path("/health"));
        assert!(is_excluded_path("/ping"));
        assert!(is_excluded_path("/status?verbose=1"));
    }

    #[test]
    fn api_paths_are_not_excluded() {
        assert!(!is_excluded_path("/api/users/octocat"));
        assert!(!is_excluded_path("/"));
    }
}

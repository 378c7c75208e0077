//! Configuration schema definitions.

use std::time::Duration;

/// Root configuration for the service.
///
/// Loaded from the process environment by [`crate::config::loader::from_env`];
/// every field has a fallback default so the service always starts.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Lower the log severity floor from Info to Debug.
    pub debug_mode: bool,

    /// true = machine-parseable JSON output, false = pretty console output.
    pub log_format: bool,

    /// Port to bind on all interfaces.
    pub port: String,

    /// Per-request timeout in seconds; an in-flight handler exceeding it is
    /// cancelled and reported as an aborted request.
    pub request_timeout_secs: u64,

    /// Bound on the graceful-shutdown drain; after this the process exits
    /// non-zero with requests still in flight.
    pub shutdown_timeout_secs: u64,

    /// Base URL of the external user-directory collaborator.
    pub github_api_base_url: String,

    /// Bearer credential for the collaborator.
    pub github_access_token: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            debug_mode: false,
            log_format: false,
            port: "8000".to_string(),
            request_timeout_secs: 60,
            shutdown_timeout_secs: 30,
            github_api_base_url: String::new(),
            github_access_token: String::new(),
        }
    }
}

impl ServiceConfig {
    /// Bind address derived from the configured port.
    pub fn bind_address(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn shutdown_timeout(&self) -> Duration {
        Duration::from_secs(self.shutdown_timeout_secs)
    }
}

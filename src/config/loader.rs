//! Configuration loading from the process environment.

use std::env;
use std::str::FromStr;

use crate::config::schema::ServiceConfig;

/// Build the service configuration from environment variables.
///
/// Every key is optional; a missing or unparseable value silently falls
/// back to the field default, so startup never fails on configuration.
pub fn from_env() -> ServiceConfig {
    let defaults = ServiceConfig::default();
    ServiceConfig {
        debug_mode: get_parsed("DEBUG_MODE", defaults.debug_mode),
        log_format: get_parsed("LOG_FORMAT", defaults.log_format),
        port: get_string("PORT", &defaults.port),
        request_timeout_secs: get_parsed("REQUEST_TIMEOUT", defaults.request_timeout_secs),
        shutdown_timeout_secs: get_parsed("SHUTDOWN_TIMEOUT", defaults.shutdown_timeout_secs),
        github_api_base_url: get_string("GITHUB_API_BASE_URL", &defaults.github_api_base_url),
        github_access_token: get_string("GITHUB_ACCESS_TOKEN", &defaults.github_access_token),
    }
}

fn get_string(key: &str, fallback: &str) -> String {
    env::var(key).unwrap_or_else(|_| fallback.to_string())
}

fn get_parsed<T: FromStr + Copy>(key: &str, fallback: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(fallback)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Each test uses its own key so parallel test execution never races on
    // a shared environment variable.

    #[test]
    fn missing_key_falls_back() {
        assert_eq!(get_parsed("DIRECTORY_PROXY_TEST_MISSING", 60u64), 60);
        assert_eq!(get_string("DIRECTORY_PROXY_TEST_MISSING", "8000"), "8000");
    }

    #[test]
    fn unparseable_value_falls_back() {
        env::set_var("DIRECTORY_PROXY_TEST_BAD_INT", "not-a-number");
        assert_eq!(get_parsed("DIRECTORY_PROXY_TEST_BAD_INT", 30u64), 30);
    }

    #[test]
    fn valid_values_parse() {
        env::set_var("DIRECTORY_PROXY_TEST_BOOL", "true");
        env::set_var("DIRECTORY_PROXY_TEST_INT", "15");
        assert!(get_parsed("DIRECTORY_PROXY_TEST_BOOL", false));
        assert_eq!(get_parsed("DIRECTORY_PROXY_TEST_INT", 60u64), 15);
    }

    #[test]
    fn defaults_match_documented_table() {
        let config = ServiceConfig::default();
        assert!(!config.debug_mode);
        assert!(!config.log_format);
        assert_eq!(config.port, "8000");
        assert_eq!(config.request_timeout_secs, 60);
        assert_eq!(config.shutdown_timeout_secs, 30);
        assert_eq!(config.bind_address(), "0.0.0.0:8000");
    }
}

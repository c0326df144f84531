//! Centralized client configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::error::AppError;

const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";
const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 10;

/// Centralized client configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the catalog backend, without a trailing slash.
    pub api_base_url: String,
    /// Per-request timeout for the HTTP client.
    pub http_timeout: Duration,
    /// Optional path for persisted token storage. When unset the embedding
    /// shell is expected to provide its own store.
    pub token_file: Option<PathBuf>,
}

impl Config {
    /// Load and validate all configuration from environment variables.
    pub fn from_env() -> Result<Self, AppError> {
        let api_base_url = env::var("CLIENT_API_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        if api_base_url.is_empty() {
            return Err(AppError::config("CLIENT_API_BASE_URL cannot be empty"));
        }

        let timeout_str = env::var("CLIENT_HTTP_TIMEOUT_SECS")
            .unwrap_or_else(|_| DEFAULT_HTTP_TIMEOUT_SECS.to_string());
        let timeout_secs = timeout_str.parse::<u64>().map_err(|_| {
            AppError::config(format!(
                "CLIENT_HTTP_TIMEOUT_SECS must be a number of seconds, got '{timeout_str}'"
            ))
        })?;

        let token_file = env::var("CLIENT_TOKEN_FILE").ok().map(PathBuf::from);

        Ok(Config {
            api_base_url,
            http_timeout: Duration::from_secs(timeout_secs),
            token_file,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            http_timeout: Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
            token_file: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::env;

    use serial_test::serial;

    use super::Config;

    fn clear_env() {
        env::remove_var("CLIENT_API_BASE_URL");
        env::remove_var("CLIENT_HTTP_TIMEOUT_SECS");
        env::remove_var("CLIENT_TOKEN_FILE");
    }

    #[test]
    #[serial]
    fn defaults_when_env_unset() {
        clear_env();
        let config = Config::from_env().unwrap();
        assert_eq!(config.api_base_url, "http://localhost:8080");
        assert_eq!(config.http_timeout.as_secs(), 10);
        assert!(config.token_file.is_none());
    }

    #[test]
    #[serial]
    fn trailing_slash_is_stripped() {
        clear_env();
        env::set_var("CLIENT_API_BASE_URL", "https://movies.example.com/");
        let config = Config::from_env().unwrap();
        assert_eq!(config.api_base_url, "https://movies.example.com");
        clear_env();
    }

    #[test]
    #[serial]
    fn invalid_timeout_is_a_config_error() {
        clear_env();
        env::set_var("CLIENT_HTTP_TIMEOUT_SECS", "soon");
        let result = Config::from_env();
        assert!(result.is_err());
        clear_env();
    }
}

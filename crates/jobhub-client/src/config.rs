use std::time::Duration;

use jobhub_core::AppError;

pub const DEFAULT_REMOTIVE_BASE_URL: &str = "https://remotive.com/api";
pub const DEFAULT_ARBEITNOW_BASE_URL: &str = "https://www.arbeitnow.com/api";
pub const DEFAULT_JSEARCH_BASE_URL: &str = "https://jsearch.p.rapidapi.com";
pub const DEFAULT_JSEARCH_HOST: &str = "jsearch.p.rapidapi.com";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Endpoints and credentials for the external providers.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    pub remotive_base_url: String,
    pub arbeitnow_base_url: String,
    pub jsearch_base_url: String,
    pub jsearch_host: String,
    /// Without a key the JSearch adapter contributes nothing.
    pub jsearch_api_key: Option<String>,
    pub request_timeout: Duration,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            remotive_base_url: DEFAULT_REMOTIVE_BASE_URL.into(),
            arbeitnow_base_url: DEFAULT_ARBEITNOW_BASE_URL.into(),
            jsearch_base_url: DEFAULT_JSEARCH_BASE_URL.into(),
            jsearch_host: DEFAULT_JSEARCH_HOST.into(),
            jsearch_api_key: None,
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }
}

impl ProviderConfig {
    /// Read configuration from environment variables.
    ///
    /// - `REMOTIVE_BASE_URL`, `ARBEITNOW_BASE_URL`, `JSEARCH_BASE_URL`, `JSEARCH_HOST` (optional)
    /// - `JSEARCH_API_KEY` (optional)
    /// - `JOBHUB_PROVIDER_TIMEOUT_SECS` (optional, defaults to 10)
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let read = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let request_timeout = match read("JOBHUB_PROVIDER_TIMEOUT_SECS") {
            None => defaults.request_timeout,
            Some(raw) => {
                let secs: u64 = raw.parse().map_err(|_| {
                    AppError::ConfigError(format!(
                        "Invalid JOBHUB_PROVIDER_TIMEOUT_SECS '{raw}': must be a positive integer"
                    ))
                })?;
                if secs == 0 {
                    return Err(AppError::ConfigError(
                        "JOBHUB_PROVIDER_TIMEOUT_SECS must be at least 1".into(),
                    ));
                }
                Duration::from_secs(secs)
            }
        };

        Ok(Self {
            remotive_base_url: read("REMOTIVE_BASE_URL").unwrap_or(defaults.remotive_base_url),
            arbeitnow_base_url: read("ARBEITNOW_BASE_URL").unwrap_or(defaults.arbeitnow_base_url),
            jsearch_base_url: read("JSEARCH_BASE_URL").unwrap_or(defaults.jsearch_base_url),
            jsearch_host: read("JSEARCH_HOST").unwrap_or(defaults.jsearch_host),
            jsearch_api_key: read("JSEARCH_API_KEY"),
            request_timeout,
        })
    }
}

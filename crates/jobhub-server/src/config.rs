use std::time::Duration;

use jobhub_core::AppError;

/// Server-level settings read from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// `None` disables the search cache.
    pub search_cache_ttl: Option<Duration>,
}

impl ServerConfig {
    /// - `JOBHUB_SERVER_PORT` (optional, defaults to 3000)
    /// - `JOBHUB_SEARCH_CACHE_TTL_SECS` (optional, 0 or unset disables caching)
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("JOBHUB_SERVER_PORT") {
            None => 3000,
            Some(raw) => raw.trim().parse().map_err(|_| {
                AppError::ConfigError(format!("Invalid JOBHUB_SERVER_PORT '{raw}'"))
            })?,
        };

        let ttl_secs: u64 = match lookup("JOBHUB_SEARCH_CACHE_TTL_SECS") {
            None => 0,
            Some(raw) => raw.trim().parse().map_err(|_| {
                AppError::ConfigError(format!(
                    "Invalid JOBHUB_SEARCH_CACHE_TTL_SECS '{raw}': must be a non-negative integer"
                ))
            })?,
        };

        Ok(Self {
            port,
            search_cache_ttl: (ttl_secs > 0).then(|| Duration::from_secs(ttl_secs)),
        })
    }
}

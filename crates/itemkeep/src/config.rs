use std::{env, time::Duration};

use crate::cache::CacheConfig;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Seconds between background cache refreshes (default: 300)
    pub cache_refresh_interval_seconds: u64,
    /// Deadline in seconds for a single cache refresh (default: 5)
    pub cache_refresh_timeout_seconds: u64,
    /// Deadline in seconds for an HTTP request (default: 10)
    pub request_timeout_seconds: u64,
    /// Path to SQLite database file (default: "itemkeep.db")
    /// Note: Only used when the `sqlite` feature is enabled.
    #[cfg_attr(not(feature = "sqlite"), allow(dead_code))]
    pub sqlite_path: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `CACHE_REFRESH_INTERVAL_SECONDS` - Cache refresh interval (default: 300)
    /// - `CACHE_REFRESH_TIMEOUT_SECONDS` - Cache refresh deadline (default: 5)
    /// - `REQUEST_TIMEOUT_SECONDS` - HTTP request deadline (default: 10)
    /// - `SQLITE_PATH` - SQLite database path (default: "itemkeep.db")
    ///
    /// Durations must be positive; zero or unparsable values use the default.
    pub fn from_env() -> Self {
        Self {
            cache_refresh_interval_seconds: seconds_from_env(
                "CACHE_REFRESH_INTERVAL_SECONDS",
                300,
            ),
            cache_refresh_timeout_seconds: seconds_from_env("CACHE_REFRESH_TIMEOUT_SECONDS", 5),
            request_timeout_seconds: seconds_from_env("REQUEST_TIMEOUT_SECONDS", 10),
            sqlite_path: env::var("SQLITE_PATH").unwrap_or_else(|_| "itemkeep.db".to_string()),
        }
    }

    /// Timing settings for the item cache.
    pub fn cache_config(&self) -> CacheConfig {
        CacheConfig::new(Duration::from_secs(self.cache_refresh_interval_seconds))
            .with_refresh_timeout(Duration::from_secs(self.cache_refresh_timeout_seconds))
    }

    /// Get the request timeout as a Duration.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

fn seconds_from_env(name: &str, default: u64) -> u64 {
    parse_seconds(env::var(name).ok().as_deref()).unwrap_or(default)
}

fn parse_seconds(value: Option<&str>) -> Option<u64> {
    value
        .and_then(|v| v.trim().parse().ok())
        .filter(|secs| *secs > 0)
}

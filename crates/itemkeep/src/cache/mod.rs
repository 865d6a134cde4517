//! In-memory snapshot cache.
//!
//! [`ItemCache`] keeps a full copy of everything the wrapped repository
//! lists and refreshes it on a fixed interval from a background task:
//!
//! - **Reads**: served from the snapshot, loaded synchronously if it is empty
//! - **Writes**: forwarded to the repository, then a refresh is spawned
//!   without waiting for it
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use std::time::Duration;
//! use tokio_util::sync::CancellationToken;
//!
//! let repo = Arc::new(InMemoryRepository::new());
//! let shutdown = CancellationToken::new();
//! let cache = ItemCache::new(repo, CacheConfig::new(Duration::from_secs(300)), shutdown.clone());
//!
//! // ... later, stop the refresh loop
//! shutdown.cancel();
//! ```

mod item_cache;

use std::time::Duration;

use serde::Serialize;

pub use item_cache::ItemCache;

/// Default time between background refreshes.
pub const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_secs(5 * 60);

/// Default upper bound for a single `list_items` call made by a refresh.
pub const DEFAULT_REFRESH_TIMEOUT: Duration = Duration::from_secs(5);

/// Timing settings for an [`ItemCache`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheConfig {
    /// Time between the end of one periodic refresh and the start of the next.
    pub refresh_interval: Duration,
    /// Deadline applied to the repository call of every refresh.
    pub refresh_timeout: Duration,
}

impl CacheConfig {
    /// Creates a config with the given refresh interval and the default timeout.
    pub fn new(refresh_interval: Duration) -> Self {
        Self {
            refresh_interval,
            refresh_timeout: DEFAULT_REFRESH_TIMEOUT,
        }
    }

    /// Sets the deadline for each refresh.
    pub fn with_refresh_timeout(mut self, refresh_timeout: Duration) -> Self {
        self.refresh_timeout = refresh_timeout;
        self
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self::new(DEFAULT_REFRESH_INTERVAL)
    }
}

/// Lifecycle of an [`ItemCache`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CacheState {
    /// No refresh has succeeded yet.
    Uninitialized,
    /// A snapshot is loaded and the refresh loop is running.
    Populated,
    /// The refresh loop was cancelled; the snapshot is frozen.
    Stopped,
}

/// Read-only view of a cache's lifecycle, for health checks.
pub trait CacheStatus: Send + Sync {
    fn state(&self) -> CacheState;
}

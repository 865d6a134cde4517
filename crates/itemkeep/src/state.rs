//! Application state with repository-based storage.
//!
//! This module defines the shared application state that is passed to all
//! request handlers. Handlers only see an `ItemRepository` trait object; the
//! object behind it is the item cache wrapping the feature-selected backend.

use std::{sync::Arc, time::Duration};

use tokio_util::sync::CancellationToken;

use itemkeep_core::storage::ItemRepository;

use crate::cache::{CacheStatus, ItemCache};
use crate::config::Config;

/// Minimum gap between the cache refresh deadline and the request deadline.
///
/// A read on a cold cache waits for one refresh; the request must outlive it
/// so a hanging backend yields an empty answer instead of a 408.
pub const REQUEST_TIMEOUT_HEADROOM: Duration = Duration::from_secs(1);

/// Shared application state.
///
/// This is cloned for each request handler.
#[derive(Clone)]
pub struct AppState {
    /// Item repository (cached, wraps underlying storage).
    pub item_repo: Arc<dyn ItemRepository>,
    /// Lifecycle of the cache behind `item_repo`, for readiness checks.
    pub cache_status: Arc<dyn CacheStatus>,
    /// Deadline applied to every HTTP request.
    pub request_timeout: Duration,
}

impl AppState {
    /// Creates an AppState serving items through `cache`.
    ///
    /// `request_timeout` is raised when needed so it stays longer than the
    /// cache's refresh deadline plus [`REQUEST_TIMEOUT_HEADROOM`].
    pub fn new<R>(cache: ItemCache<R>, request_timeout: Duration) -> Self
    where
        R: ItemRepository + 'static,
    {
        let minimum = cache.refresh_timeout() + REQUEST_TIMEOUT_HEADROOM;
        if request_timeout < minimum {
            tracing::warn!(
                requested = ?request_timeout,
                using = ?minimum,
                "Request timeout does not outlast the cache refresh timeout, raising it"
            );
        }
        let request_timeout = request_timeout.max(minimum);

        let cache = Arc::new(cache);
        Self {
            item_repo: cache.clone(),
            cache_status: cache,
            request_timeout,
        }
    }
}

// ============================================================================
// Factory functions for the storage backends
// ============================================================================

#[cfg(feature = "inmemory")]
mod inmemory_backend {
    use super::*;
    use crate::mock_data::demo_items;
    use crate::storage::InMemoryRepository;

    impl AppState {
        /// Creates AppState with in-memory storage seeded with demo items.
        /// Useful for testing without any external dependencies.
        pub async fn from_config(
            config: &Config,
            shutdown: CancellationToken,
        ) -> Result<Self, anyhow::Error> {
            let repo = Arc::new(InMemoryRepository::with_items(demo_items()));
            let cache = ItemCache::new(repo, config.cache_config(), shutdown);

            Ok(Self::new(cache, config.request_timeout()))
        }
    }
}

#[cfg(feature = "sqlite")]
mod sqlite_backend {
    use super::*;
    use crate::storage::SqliteRepository;

    impl AppState {
        /// Creates AppState with SQLite storage.
        pub async fn from_config(
            config: &Config,
            shutdown: CancellationToken,
        ) -> Result<Self, anyhow::Error> {
            let repo = Arc::new(SqliteRepository::new(&config.sqlite_path).await?);
            let cache = ItemCache::new(repo, config.cache_config(), shutdown);

            Ok(Self::new(cache, config.request_timeout()))
        }
    }
}

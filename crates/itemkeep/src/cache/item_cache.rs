//! Snapshot cache decorator for an `ItemRepository`.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tokio_util::sync::CancellationToken;

use itemkeep_core::item::Item;
use itemkeep_core::storage::{ItemRepository, RepositoryError, Result};

use super::{CacheConfig, CacheState, CacheStatus};

/// Cached item repository decorator.
///
/// Holds the result of the last successful `list_items` call on the wrapped
/// repository and answers reads from it. The snapshot is only ever replaced
/// as a whole, so readers see either the old list or the new one.
///
/// Writes go straight to the repository. A successful write spawns a refresh
/// and returns without waiting for it, so a read issued right after a write
/// may still see the old snapshot. Callers get no signal when that refresh
/// completes.
///
/// # Type Parameters
///
/// * `R` - The underlying repository implementation
pub struct ItemCache<R>
where
    R: ItemRepository,
{
    inner: Arc<Inner<R>>,
}

struct Inner<R> {
    repository: Arc<R>,
    snapshot: RwLock<Vec<Item>>,
    loaded: AtomicBool,
    config: CacheConfig,
    shutdown: CancellationToken,
}

impl<R> Clone for ItemCache<R>
where
    R: ItemRepository,
{
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<R> ItemCache<R>
where
    R: ItemRepository + 'static,
{
    /// Creates a cache in front of `repository` and starts its refresh loop.
    ///
    /// The first refresh runs right away on the spawned task; this function
    /// does not wait for it. The loop runs until `shutdown` is cancelled.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new(repository: Arc<R>, config: CacheConfig, shutdown: CancellationToken) -> Self {
        let cache = Self::without_refresh_loop(repository, config, shutdown);
        tokio::spawn(Arc::clone(&cache.inner).run_refresh_loop());
        cache
    }

    fn without_refresh_loop(
        repository: Arc<R>,
        config: CacheConfig,
        shutdown: CancellationToken,
    ) -> Self {
        Self {
            inner: Arc::new(Inner {
                repository,
                snapshot: RwLock::new(Vec::new()),
                loaded: AtomicBool::new(false),
                config,
                shutdown,
            }),
        }
    }

    /// Deadline applied to each refresh.
    pub fn refresh_timeout(&self) -> Duration {
        self.inner.config.refresh_timeout
    }

    /// Current lifecycle state.
    pub fn state(&self) -> CacheState {
        if self.inner.shutdown.is_cancelled() {
            CacheState::Stopped
        } else if self.inner.loaded.load(Ordering::Acquire) {
            CacheState::Populated
        } else {
            CacheState::Uninitialized
        }
    }

    /// Spawns a one-off refresh and returns immediately.
    fn spawn_refresh(&self) {
        let inner = Arc::clone(&self.inner);
        tokio::spawn(async move { inner.refresh().await });
    }
}

impl<R> Inner<R>
where
    R: ItemRepository,
{
    /// Replaces the snapshot with a fresh listing.
    ///
    /// Failures are logged and leave the current snapshot in place.
    async fn refresh(&self) {
        let timeout = self.config.refresh_timeout;
        let result = tokio::time::timeout(timeout, self.repository.list_items())
            .await
            .unwrap_or(Err(RepositoryError::Timeout(timeout)));

        match result {
            Ok(items) => {
                let count = items.len();
                *self.snapshot.write().await = items;
                self.loaded.store(true, Ordering::Release);
                tracing::trace!(count, "Item cache refreshed");
            }
            Err(err) => {
                tracing::warn!(error = %err, "Failed to refresh item cache");
            }
        }
    }

    /// Loads the snapshot synchronously if it is empty.
    async fn ensure_loaded(&self) {
        if self.snapshot.read().await.is_empty() {
            tracing::debug!("Item cache is empty, loading before read");
            self.refresh().await;
        }
    }

    async fn run_refresh_loop(self: Arc<Self>) {
        tracing::debug!(
            interval = ?self.config.refresh_interval,
            "Item cache refresh loop started"
        );

        self.refresh().await;

        loop {
            tokio::select! {
                biased;
                _ = self.shutdown.cancelled() => {
                    tracing::debug!("Item cache refresh loop stopped");
                    break;
                }
                _ = tokio::time::sleep(self.config.refresh_interval) => {
                    self.refresh().await;
                }
            }
        }
    }
}

impl<R> CacheStatus for ItemCache<R>
where
    R: ItemRepository + 'static,
{
    fn state(&self) -> CacheState {
        ItemCache::state(self)
    }
}

#[async_trait]
impl<R> ItemRepository for ItemCache<R>
where
    R: ItemRepository + 'static,
{
    /// Returns a copy of the snapshot. Never fails: a failed load yields
    /// whatever the snapshot held, possibly nothing.
    async fn list_items(&self) -> Result<Vec<Item>> {
        self.inner.ensure_loaded().await;
        Ok(self.inner.snapshot.read().await.clone())
    }

    /// Returns a copy of the matching item, or `Item::default()` when no item
    /// in the snapshot has this ID.
    async fn get_item(&self, id: i64) -> Result<Item> {
        self.inner.ensure_loaded().await;

        let snapshot = self.inner.snapshot.read().await;
        let item = snapshot.iter().find(|item| item.id == id).cloned();
        if item.is_none() {
            tracing::trace!(item_id = id, "Item not in cache snapshot");
        }

        Ok(item.unwrap_or_default())
    }

    async fn create_item(&self, item: &Item) -> Result<()> {
        self.inner.repository.create_item(item).await?;
        self.spawn_refresh();

        tracing::debug!(item_id = item.id, "Item created, cache refresh scheduled");
        Ok(())
    }

    async fn update_item(&self, item: &Item) -> Result<()> {
        self.inner.repository.update_item(item).await?;
        self.spawn_refresh();

        tracing::debug!(item_id = item.id, "Item updated, cache refresh scheduled");
        Ok(())
    }

    async fn delete_item(&self, id: i64) -> Result<()> {
        self.inner.repository.delete_item(id).await?;
        self.spawn_refresh();

        tracing::debug!(item_id = id, "Item deleted, cache refresh scheduled");
        Ok(())
    }

    /// Closes the wrapped repository. The refresh loop keeps running until
    /// its cancellation token fires.
    async fn close(&self) -> Result<()> {
        self.inner.repository.close().await
    }
}

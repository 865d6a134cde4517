use async_trait::async_trait;

use crate::item::Item;

use super::Result;

/// Repository for item persistence.
///
/// Implemented by the storage backends and by the in-memory cache, which
/// wraps another implementation and can stand in for it anywhere.
///
/// Deadlines are not part of the contract: callers bound a call by wrapping
/// the returned future in a timeout, and cancel it by dropping it.
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Lists every stored item.
    async fn list_items(&self) -> Result<Vec<Item>>;

    /// Gets an item by its ID.
    ///
    /// What an absent ID yields is up to the implementation.
    async fn get_item(&self, id: i64) -> Result<Item>;

    /// Inserts a new item.
    async fn create_item(&self, item: &Item) -> Result<()>;

    /// Updates the item with the same ID.
    async fn update_item(&self, item: &Item) -> Result<()>;

    /// Deletes an item by its ID.
    async fn delete_item(&self, id: i64) -> Result<()>;

    /// Releases the underlying connection.
    async fn close(&self) -> Result<()>;
}

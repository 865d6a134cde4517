//! In-memory repository implementation.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use itemkeep_core::item::Item;
use itemkeep_core::storage::{ItemRepository, RepositoryError, Result};

/// In-memory storage backend.
///
/// Uses a `Vec` wrapped in `Arc<RwLock<_>>` for thread-safe access, so
/// listings come back in insertion order.
#[derive(Debug, Clone)]
pub struct InMemoryRepository {
    items: Arc<RwLock<Vec<Item>>>,
}

impl Default for InMemoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self::with_items(Vec::new())
    }

    /// Creates a repository pre-populated with `items`.
    pub fn with_items(items: Vec<Item>) -> Self {
        Self {
            items: Arc::new(RwLock::new(items)),
        }
    }
}

#[async_trait]
impl ItemRepository for InMemoryRepository {
    async fn list_items(&self) -> Result<Vec<Item>> {
        Ok(self.items.read().await.clone())
    }

    async fn get_item(&self, id: i64) -> Result<Item> {
        let items = self.items.read().await;
        items
            .iter()
            .find(|item| item.id == id)
            .cloned()
            .ok_or_else(|| RepositoryError::item_not_found(id))
    }

    async fn create_item(&self, item: &Item) -> Result<()> {
        let mut items = self.items.write().await;
        if items.iter().any(|existing| existing.id == item.id) {
            return Err(RepositoryError::item_already_exists(item.id));
        }
        items.push(item.clone());
        Ok(())
    }

    async fn update_item(&self, item: &Item) -> Result<()> {
        let mut items = self.items.write().await;
        let existing = items
            .iter_mut()
            .find(|existing| existing.id == item.id)
            .ok_or_else(|| RepositoryError::item_not_found(item.id))?;
        *existing = item.clone();
        Ok(())
    }

    async fn delete_item(&self, id: i64) -> Result<()> {
        let mut items = self.items.write().await;
        let position = items
            .iter()
            .position(|item| item.id == id)
            .ok_or_else(|| RepositoryError::item_not_found(id))?;
        items.remove(position);
        Ok(())
    }

    async fn close(&self) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded() -> InMemoryRepository {
        InMemoryRepository::with_items(vec![Item::new(1, "a"), Item::new(2, "b")])
    }

    #[tokio::test]
    async fn test_list_preserves_insertion_order() {
        let repo = InMemoryRepository::new();
        repo.create_item(&Item::new(5, "five")).await.unwrap();
        repo.create_item(&Item::new(1, "one")).await.unwrap();

        let items = repo.list_items().await.unwrap();
        assert_eq!(items, vec![Item::new(5, "five"), Item::new(1, "one")]);
    }

    #[tokio::test]
    async fn test_get_existing_item() {
        let repo = seeded();

        assert_eq!(repo.get_item(2).await.unwrap(), Item::new(2, "b"));
    }

    #[tokio::test]
    async fn test_get_nonexistent_item() {
        let repo = seeded();

        let result = repo.get_item(42).await;
        assert_eq!(result, Err(RepositoryError::item_not_found(42)));
    }

    #[tokio::test]
    async fn test_create_duplicate_fails() {
        let repo = seeded();

        let result = repo.create_item(&Item::new(1, "again")).await;
        assert_eq!(result, Err(RepositoryError::item_already_exists(1)));
        assert_eq!(repo.get_item(1).await.unwrap(), Item::new(1, "a"));
    }

    #[tokio::test]
    async fn test_update_item() {
        let repo = seeded();

        repo.update_item(&Item::new(1, "renamed")).await.unwrap();

        assert_eq!(repo.get_item(1).await.unwrap(), Item::new(1, "renamed"));
        assert_eq!(repo.list_items().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_update_nonexistent_fails() {
        let repo = seeded();

        let result = repo.update_item(&Item::new(3, "c")).await;
        assert_eq!(result, Err(RepositoryError::item_not_found(3)));
    }

    #[tokio::test]
    async fn test_delete_item() {
        let repo = seeded();

        repo.delete_item(2).await.unwrap();

        assert_eq!(repo.list_items().await.unwrap(), vec![Item::new(1, "a")]);
    }

    #[tokio::test]
    async fn test_delete_nonexistent_fails() {
        let repo = seeded();

        let result = repo.delete_item(9).await;
        assert_eq!(result, Err(RepositoryError::item_not_found(9)));
    }

    #[tokio::test]
    async fn test_clones_share_storage() {
        let repo = seeded();
        let clone = repo.clone();

        clone.delete_item(1).await.unwrap();

        assert_eq!(repo.list_items().await.unwrap(), vec![Item::new(2, "b")]);
    }

    #[tokio::test]
    async fn test_close_is_noop() {
        let repo = seeded();

        repo.close().await.unwrap();
        assert_eq!(repo.list_items().await.unwrap().len(), 2);
    }
}

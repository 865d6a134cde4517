//! SQLite repository implementation.
//!
//! Implements `ItemRepository` from `itemkeep_core::storage` using SQLite.

use async_trait::async_trait;
use tokio_rusqlite::Connection;

use itemkeep_core::item::Item;
use itemkeep_core::storage::{ItemRepository, RepositoryError, Result};

use super::conversions::row_to_item;
use super::error::{map_tokio_rusqlite_error, map_tokio_rusqlite_error_with_id};
use super::schema;

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

/// Turns a zero row count into `QueryReturnedNoRows`, which maps to `NotFound`.
fn require_affected(rows: usize) -> tokio_rusqlite::Result<()> {
    if rows == 0 {
        Err(wrap_err(rusqlite::Error::QueryReturnedNoRows))
    } else {
        Ok(())
    }
}

/// SQLite-based repository implementation.
pub struct SqliteRepository {
    conn: Connection,
}

impl SqliteRepository {
    /// Creates a new repository with a file-based database.
    ///
    /// The database file will be created if it doesn't exist.
    /// Schema tables are created automatically.
    pub async fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(path)
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        tracing::debug!(path, "Opened SQLite item store");
        Ok(Self { conn })
    }

    /// Creates a new repository with an in-memory database.
    ///
    /// Useful for testing - data is lost when the connection is dropped.
    #[cfg_attr(not(test), allow(dead_code))]
    pub async fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Initialize the database schema.
    async fn init_schema(conn: &Connection) -> Result<()> {
        conn.call(|conn| {
            conn.execute_batch(schema::CREATE_TABLES)
                .map_err(wrap_err)?;
            Ok(())
        })
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))
    }
}

#[async_trait]
impl ItemRepository for SqliteRepository {
    async fn list_items(&self) -> Result<Vec<Item>> {
        self.conn
            .call(|conn| {
                let mut stmt = conn.prepare(schema::SELECT_ALL_ITEMS).map_err(wrap_err)?;
                let rows = stmt.query_map([], row_to_item).map_err(wrap_err)?;

                let mut items = Vec::new();
                for row_result in rows {
                    items.push(row_result.map_err(wrap_err)?);
                }
                Ok(items)
            })
            .await
            .map_err(map_tokio_rusqlite_error)
    }

    async fn get_item(&self, id: i64) -> Result<Item> {
        self.conn
            .call(move |conn| {
                let mut stmt = conn.prepare(schema::SELECT_ITEM_BY_ID).map_err(wrap_err)?;
                let item = stmt.query_row([id], row_to_item).map_err(wrap_err)?;
                Ok(item)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, id.to_string()))
    }

    async fn create_item(&self, item: &Item) -> Result<()> {
        let id = item.id;
        let name = item.name.clone();

        self.conn
            .call(move |conn| {
                conn.execute(schema::INSERT_ITEM, rusqlite::params![id, name])
                    .map_err(wrap_err)?;
                Ok(())
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, id.to_string()))
    }

    async fn update_item(&self, item: &Item) -> Result<()> {
        let id = item.id;
        let name = item.name.clone();

        self.conn
            .call(move |conn| {
                let rows = conn
                    .execute(schema::UPDATE_ITEM, rusqlite::params![id, name])
                    .map_err(wrap_err)?;
                require_affected(rows)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, id.to_string()))
    }

    async fn delete_item(&self, id: i64) -> Result<()> {
        self.conn
            .call(move |conn| {
                let rows = conn
                    .execute(schema::DELETE_ITEM, [id])
                    .map_err(wrap_err)?;
                require_affected(rows)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, id.to_string()))
    }

    /// Closes the connection. Every later call fails with `ConnectionFailed`.
    async fn close(&self) -> Result<()> {
        self.conn
            .clone()
            .close()
            .await
            .map_err(map_tokio_rusqlite_error)?;

        tracing::debug!("Closed SQLite item store");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn seeded() -> SqliteRepository {
        let repo = SqliteRepository::new_in_memory().await.unwrap();
        repo.create_item(&Item::new(2, "b")).await.unwrap();
        repo.create_item(&Item::new(1, "a")).await.unwrap();
        repo
    }

    #[tokio::test]
    async fn test_list_items_ordered_by_id() {
        let repo = seeded().await;

        let items = repo.list_items().await.unwrap();

        assert_eq!(items, vec![Item::new(1, "a"), Item::new(2, "b")]);
    }

    #[tokio::test]
    async fn test_list_items_empty() {
        let repo = SqliteRepository::new_in_memory().await.unwrap();

        assert!(repo.list_items().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_get_item() {
        let repo = seeded().await;

        assert_eq!(repo.get_item(2).await.unwrap(), Item::new(2, "b"));
    }

    #[tokio::test]
    async fn test_get_nonexistent_item() {
        let repo = seeded().await;

        let result = repo.get_item(404).await;

        assert_eq!(result, Err(RepositoryError::item_not_found(404)));
    }

    #[tokio::test]
    async fn test_create_duplicate_fails() {
        let repo = seeded().await;

        let result = repo.create_item(&Item::new(1, "again")).await;

        assert_eq!(result, Err(RepositoryError::item_already_exists(1)));
    }

    #[tokio::test]
    async fn test_update_item() {
        let repo = seeded().await;

        repo.update_item(&Item::new(1, "renamed")).await.unwrap();

        assert_eq!(repo.get_item(1).await.unwrap(), Item::new(1, "renamed"));
    }

    #[tokio::test]
    async fn test_update_nonexistent_fails() {
        let repo = seeded().await;

        let result = repo.update_item(&Item::new(3, "c")).await;

        assert_eq!(result, Err(RepositoryError::item_not_found(3)));
    }

    #[tokio::test]
    async fn test_delete_item() {
        let repo = seeded().await;

        repo.delete_item(2).await.unwrap();

        assert_eq!(repo.list_items().await.unwrap(), vec![Item::new(1, "a")]);
    }

    #[tokio::test]
    async fn test_delete_nonexistent_fails() {
        let repo = seeded().await;

        let result = repo.delete_item(9).await;

        assert_eq!(result, Err(RepositoryError::item_not_found(9)));
    }

    #[tokio::test]
    async fn test_calls_fail_after_close() {
        let repo = seeded().await;

        repo.close().await.unwrap();

        let result = repo.list_items().await;
        assert!(matches!(result, Err(RepositoryError::ConnectionFailed(_))));
    }

    #[tokio::test]
    async fn test_file_database_persists_across_connections() {
        let path = std::env::temp_dir().join(format!("itemkeep-test-{}.db", std::process::id()));
        let path_str = path.to_string_lossy().to_string();
        let _ = std::fs::remove_file(&path);

        {
            let repo = SqliteRepository::new(&path_str).await.unwrap();
            repo.create_item(&Item::new(10, "kept")).await.unwrap();
            repo.close().await.unwrap();
        }

        let repo = SqliteRepository::new(&path_str).await.unwrap();
        assert_eq!(repo.list_items().await.unwrap(), vec![Item::new(10, "kept")]);
        repo.close().await.unwrap();

        let _ = std::fs::remove_file(&path);
    }
}

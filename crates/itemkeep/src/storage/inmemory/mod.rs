//! In-memory storage backend.
//!
//! Keeps items in a `Vec` behind `Arc<RwLock<_>>`, in insertion order.
//! Nothing is persisted; data is lost when the repository is dropped.
//!
//! # Example
//!
//! ```rust,ignore
//! use itemkeep::storage::inmemory::InMemoryRepository;
//!
//! let repo = InMemoryRepository::with_items(vec![Item::new(1, "first")]);
//! ```

mod repository;

pub use repository::InMemoryRepository;

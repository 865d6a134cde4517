//! Core types and contracts for itemkeep.
//!
//! This crate holds the pure parts of the service: the [`item::Item`] domain
//! type and the [`storage::ItemRepository`] port that storage backends and the
//! in-memory cache implement. It performs no I/O.

pub mod item;
pub mod storage;

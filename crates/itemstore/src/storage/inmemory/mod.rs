//! In-memory storage backend.
//!
//! This module provides an in-memory implementation of [`ItemRepository`]
//! that stores items in a HashMap wrapped in `Arc<RwLock<_>>`. Data lives
//! only as long as the process.
//!
//! # Example
//!
//! ```rust,ignore
//! use itemstore::storage::inmemory::InMemoryRepository;
//!
//! let repo = InMemoryRepository::new();
//! ```
//!
//! [`ItemRepository`]: itemstore_core::storage::ItemRepository

mod repository;

pub use repository::InMemoryRepository;

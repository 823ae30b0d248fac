//! In-memory storage backend for testing.
//!
//! This module provides in-memory implementations of the `TodoRepository` and
//! `BlobStore` traits. Data lives in HashMaps wrapped in `Arc<RwLock<_>>`. This
//! is useful for testing and local development where AWS is not available.
//!
//! # Example
//!
//! ```rust,ignore
//! use todos::storage::inmemory::{InMemoryBlobStore, InMemoryRepository};
//!
//! let repo = InMemoryRepository::new();
//! let blobs = InMemoryBlobStore::new("todos-attachments");
//! ```

mod blob;
mod repository;

pub use blob::InMemoryBlobStore;
pub use repository::InMemoryRepository;

//! Persistence implementations of the domain repository traits.
//!
//! - [`KvUrlRepository`] - record store serializing the collection as JSON
//!   into a [`crate::domain::repositories::KeyValueStore`]
//! - [`FileStore`] - file-per-key substrate for durable local storage
//! - [`MemoryStore`] - in-process substrate for tests and ephemeral runs

pub mod file_store;
pub mod kv_url_repository;
pub mod memory_store;

pub use file_store::FileStore;
pub use kv_url_repository::KvUrlRepository;
pub use memory_store::MemoryStore;

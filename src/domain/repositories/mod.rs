//! Repository trait definitions for the domain layer.
//!
//! Traits define the contracts for data access; concrete implementations
//! live in [`crate::infrastructure::persistence`]. Mock implementations are
//! auto-generated via `mockall` for testing.
//!
//! - [`UrlRepository`] - the record store holding every [`ShortUrl`]
//! - [`KeyValueStore`] - the persistence substrate the record store writes
//!   through
//!
//! [`ShortUrl`]: crate::domain::entities::ShortUrl

pub mod key_value_store;
pub mod url_repository;

pub use key_value_store::KeyValueStore;
pub use url_repository::UrlRepository;

#[cfg(test)]
pub use key_value_store::MockKeyValueStore;
#[cfg(test)]
pub use url_repository::MockUrlRepository;

//! Port for the external persistence substrate.

use crate::error::AppError;

/// A durable key-value store holding serialized text blobs.
///
/// The whole record collection is persisted as a single text value under one
/// fixed key; there are no partial or range updates. Consumers must tolerate
/// an absent value by treating the collection as empty.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::FileStore`] - one file per key
/// - [`crate::infrastructure::persistence::MemoryStore`] - in-process map
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
pub trait KeyValueStore: Send + Sync {
    /// Returns the stored text for `key`, or `None` if the key is absent.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] if the substrate fails to read.
    fn get(&self, key: &str) -> Result<Option<String>, AppError>;

    /// Replaces the stored text for `key`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] if the substrate fails to write.
    fn set(&self, key: &str, value: &str) -> Result<(), AppError>;
}

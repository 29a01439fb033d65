//! Repository trait for the short URL record collection.

use crate::domain::entities::{Click, ShortUrl};
use crate::error::AppError;

/// Record store interface mediating all reads and writes of the collection.
///
/// The collection is an ordered sequence; records are appended and
/// click-mutated, never deleted. Expired records stay listable, only their
/// resolution is refused (by the services, not here).
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::KvUrlRepository`] - over a
///   [`super::KeyValueStore`]
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
pub trait UrlRepository: Send + Sync {
    /// Returns the full record collection in insertion order.
    ///
    /// A missing or unparsable persisted collection reads as empty.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on substrate failures that are not
    /// covered by the fail-open read policy.
    fn list_all(&self) -> Result<Vec<ShortUrl>, AppError>;

    /// Appends `records` to the end of the collection, preserving their
    /// order, and persists the whole collection.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] or [`AppError::Serialization`] if the
    /// collection cannot be written back.
    fn append(&self, records: Vec<ShortUrl>) -> Result<(), AppError>;

    /// Finds a record by its shortcode. First match wins.
    fn find_by_code(&self, code: &str) -> Result<Option<ShortUrl>, AppError>;

    /// Appends `click` to the record matching `code`, bumps its counter, and
    /// persists the whole collection.
    ///
    /// Returns `Ok(false)` when no record matches; nothing is written in
    /// that case.
    fn record_click(&self, code: &str, click: Click) -> Result<bool, AppError>;
}

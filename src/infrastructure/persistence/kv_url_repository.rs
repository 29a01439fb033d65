//! Record store implementation over a key-value persistence substrate.

use std::sync::{Mutex, PoisonError};

use tracing::warn;

use crate::domain::entities::{Click, ShortUrl};
use crate::domain::repositories::{KeyValueStore, UrlRepository};
use crate::error::AppError;

/// [`UrlRepository`] keeping the whole collection as one JSON array under a
/// single key of the backing [`KeyValueStore`].
///
/// # Read policy
///
/// Reads fail open: an absent key, an unparsable blob, or a substrate read
/// failure all surface as an empty collection (with a warn-level log), never
/// as an error. Write failures do propagate.
///
/// # Concurrency
///
/// Every mutation is a load-then-save of the full collection. An internal
/// mutex serializes those sequences, so overlapping callers within one
/// process cannot drop each other's writes. Writers in other processes
/// remain last-writer-wins.
pub struct KvUrlRepository<S: KeyValueStore> {
    store: S,
    key: String,
    write_lock: Mutex<()>,
}

impl<S: KeyValueStore> KvUrlRepository<S> {
    /// Creates a repository persisting under `key` in `store`.
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Loads the persisted collection, treating anything unreadable as empty.
    fn load(&self) -> Vec<ShortUrl> {
        let raw = match self.store.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                warn!(key = %self.key, error = %e, "Failed to read stored collection, treating as empty");
                return Vec::new();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(records) => records,
            Err(e) => {
                warn!(key = %self.key, error = %e, "Stored collection is unparsable, treating as empty");
                Vec::new()
            }
        }
    }

    /// Serializes and writes the full collection, replacing prior content.
    fn save(&self, records: &[ShortUrl]) -> Result<(), AppError> {
        let raw = serde_json::to_string(records)?;
        self.store.set(&self.key, &raw)
    }
}

impl<S: KeyValueStore> UrlRepository for KvUrlRepository<S> {
    fn list_all(&self) -> Result<Vec<ShortUrl>, AppError> {
        Ok(self.load())
    }

    fn append(&self, records: Vec<ShortUrl>) -> Result<(), AppError> {
        let _guard = self
            .write_lock
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        let mut all = self.load();
        all.extend(records);
        self.save(&all)
    }

    fn find_by_code(&self, code: &str) -> Result<Option<ShortUrl>, AppError> {
        Ok(self.load().into_iter().find(|r| r.shortcode == code))
    }

    fn record_click(&self, code: &str, click: Click) -> Result<bool, AppError> {
        let _guard = self
            .write_lock
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        let mut all = self.load();

        let Some(record) = all.iter_mut().find(|r| r.shortcode == code) else {
            return Ok(false);
        };

        record.push_click(click);
        self.save(&all)?;
        Ok(true)
    }
}

//! In-memory key-value store.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use crate::domain::repositories::KeyValueStore;
use crate::error::AppError;

/// [`KeyValueStore`] backed by a process-local map.
///
/// Contents vanish with the process; intended for tests and ephemeral runs.
#[derive(Debug, Default)]
pub struct MemoryStore {
    data: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        let data = self.data.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(data.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        let mut data = self.data.lock().unwrap_or_else(PoisonError::into_inner);
        data.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

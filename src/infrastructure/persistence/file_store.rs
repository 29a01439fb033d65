//! File-backed key-value store.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use crate::domain::repositories::KeyValueStore;
use crate::error::AppError;

/// [`KeyValueStore`] keeping each key as a JSON text file under a base
/// directory.
///
/// The directory is created lazily on first write. A missing file reads as
/// an absent key; any other IO failure maps to [`AppError::Storage`].
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(AppError::Storage(format!(
                "failed to read key '{key}': {e}"
            ))),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        fs::create_dir_all(&self.dir).map_err(|e| {
            AppError::Storage(format!(
                "failed to create storage directory '{}': {e}",
                self.dir.display()
            ))
        })?;

        fs::write(self.path_for(key), value)
            .map_err(|e| AppError::Storage(format!("failed to write key '{key}': {e}")))
    }
}

//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before any command
//! runs. A `.env` file is honored when present.
//!
//! ## Variables
//!
//! - `BASE_URL` - Origin prefix for rendered short URLs
//!   (default: `http://localhost:3000`)
//! - `STORAGE_DIR` - Directory of the file-backed store (default: `.urlstash`)
//! - `STORAGE_KEY` - Key the record collection is persisted under
//!   (default: `shortenedUrls`)
//! - `RUST_LOG` - Log level when no filter is set (default: `info`)

use std::env;
use std::path::PathBuf;

use anyhow::Result;

/// Runtime configuration for the CLI and its services.
#[derive(Debug, Clone)]
pub struct Config {
    /// Origin prefix short URLs are rendered under.
    pub base_url: String,
    /// Directory the file store writes into.
    pub storage_dir: PathBuf,
    /// Key holding the serialized record collection.
    pub storage_key: String,
    pub log_level: String,
}

impl Config {
    /// Loads configuration from environment variables, applying defaults for
    /// anything unset.
    pub fn from_env() -> Self {
        let base_url =
            env::var("BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string());
        let storage_dir = env::var("STORAGE_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(".urlstash"));
        let storage_key =
            env::var("STORAGE_KEY").unwrap_or_else(|_| "shortenedUrls".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

        Self {
            base_url,
            storage_dir,
            storage_key,
            log_level,
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `BASE_URL` is not an absolute URL
    /// - `STORAGE_KEY` is empty or contains path separators
    pub fn validate(&self) -> Result<()> {
        if url::Url::parse(&self.base_url).is_err() {
            anyhow::bail!("BASE_URL must be an absolute URL, got '{}'", self.base_url);
        }

        if self.storage_key.trim().is_empty() {
            anyhow::bail!("STORAGE_KEY must not be empty");
        }

        if self.storage_key.contains(['/', '\\']) {
            anyhow::bail!(
                "STORAGE_KEY must not contain path separators, got '{}'",
                self.storage_key
            );
        }

        Ok(())
    }
}

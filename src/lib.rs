//! # urlstash
//!
//! A local-first URL shortener with expiring links and click tracking. No
//! server, no accounts: records live in a single flat collection persisted
//! through a pluggable key-value store.
//!
//! ## Architecture
//!
//! The crate follows Clean Architecture principles with clear layer
//! separation:
//!
//! - **Domain Layer** ([`domain`]) - Entities and repository traits
//! - **Application Layer** ([`application`]) - Shortening, resolution, and
//!   statistics services
//! - **Infrastructure Layer** ([`infrastructure`]) - File and in-memory
//!   persistence
//!
//! The CLI binary is the bundled presentation layer; the library surface is
//! usable on its own.
//!
//! ## Quick Start
//!
//! ```
//! use std::sync::Arc;
//! use urlstash::prelude::*;
//!
//! let repository = Arc::new(KvUrlRepository::new(MemoryStore::new(), "shortenedUrls"));
//!
//! let shortener = ShortenService::new(repository.clone());
//! let batch = shortener
//!     .shorten(&[CreationRequest {
//!         long_url: "https://example.com".to_string(),
//!         ..Default::default()
//!     }])
//!     .unwrap();
//! assert_eq!(batch.created().count(), 1);
//!
//! let resolver = ResolutionService::new(repository);
//! let code = batch.created().next().unwrap().shortcode.clone();
//! assert!(matches!(
//!     resolver.resolve(&code, "direct_access"),
//!     ResolutionOutcome::Redirect(_)
//! ));
//! ```
//!
//! ## Configuration
//!
//! The binary loads its settings from environment variables via
//! [`config::Config`]; see the [`config`] module for the available options.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod utils;

pub use error::AppError;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{
        BatchResult, CreationRequest, FieldErrors, RequestResult, ResolutionOutcome,
        ResolutionService, ShortenService, StatsService,
    };
    pub use crate::domain::entities::{Click, ShortUrl, sources};
    pub use crate::domain::repositories::{KeyValueStore, UrlRepository};
    pub use crate::error::AppError;
    pub use crate::infrastructure::persistence::{FileStore, KvUrlRepository, MemoryStore};
}

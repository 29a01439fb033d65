//! Core domain entities representing the business data model.
//!
//! - [`ShortUrl`] - A shortened URL mapping with its click ledger
//! - [`Click`] - One access of a shortened URL
//!
//! Entities serialize with camelCase keys matching the persisted collection
//! shape; see [`crate::domain::repositories::KeyValueStore`] for where that
//! collection lives.

pub mod click;
pub mod short_url;

pub use click::{Click, UNKNOWN_LOCATION, sources};
pub use short_url::ShortUrl;

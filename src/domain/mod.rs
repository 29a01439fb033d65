//! Domain layer containing business entities and data-access contracts.
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Record store and persistence-substrate traits
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers; business logic lives in [`crate::application::services`].

pub mod entities;
pub mod repositories;

//! Application error type shared across layers.

use thiserror::Error;

/// Errors surfaced by the core services and repositories.
///
/// Per-field validation problems with individual creation requests are not
/// errors; they travel as ordinary values inside the batch result (see
/// [`crate::application::services::FieldErrors`]). This type covers the
/// request-level and infrastructure failures that remain.
#[derive(Debug, Error)]
pub enum AppError {
    /// A request-level rule was violated (e.g. oversized batch).
    #[error("Validation error: {0}")]
    Validation(String),

    /// The persistence substrate rejected a read or write.
    #[error("Storage error: {0}")]
    Storage(String),

    /// The record collection could not be serialized.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// An internal invariant could not be satisfied.
    #[error("Internal error: {0}")]
    Internal(String),
}

//! Statistics listing over the record collection.

use std::sync::Arc;

use tracing::info;

use crate::domain::entities::ShortUrl;
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;

/// Read-only service backing the statistics display.
///
/// Listing is a pure read; it never mutates records or their ledgers.
/// Opening a link from the statistics display goes through
/// [`crate::application::services::ResolutionService::resolve_short_url`]
/// instead, so that clicks and expiration are handled uniformly.
pub struct StatsService<R: UrlRepository> {
    repository: Arc<R>,
}

impl<R: UrlRepository> StatsService<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Returns the full record collection in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on substrate failures not covered by
    /// the fail-open read policy.
    pub fn list_all(&self) -> Result<Vec<ShortUrl>, AppError> {
        let records = self.repository.list_all()?;
        info!(count = records.len(), "Statistics loaded");
        Ok(records)
    }

    /// Total clicks across every record.
    pub fn total_clicks(&self) -> Result<u64, AppError> {
        Ok(self.repository.list_all()?.iter().map(|r| r.clicks).sum())
    }
}

//! Shortcode resolution and redirect decision service.

use std::sync::Arc;

use chrono::Utc;
use tracing::{error, info, warn};

use crate::domain::entities::Click;
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;

/// Result of resolving a shortcode.
///
/// All four outcomes are ordinary values; resolution never panics or
/// returns an error to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolutionOutcome {
    /// Live record; the caller should navigate to the contained URL.
    Redirect(String),
    /// No record carries this shortcode.
    NotFound,
    /// The record exists but its validity window has passed.
    Expired,
    /// An infrastructure failure was caught; details were logged.
    Failed,
}

/// Service deciding whether a shortcode redirects, and recording clicks.
///
/// Expired and unknown codes are terminal outcomes that leave the click
/// ledger untouched; only a successful resolution appends a click.
pub struct ResolutionService<R: UrlRepository> {
    repository: Arc<R>,
}

impl<R: UrlRepository> ResolutionService<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Resolves `code` to a redirect decision, recording a click on success.
    ///
    /// `source` is the provenance tag stored with the click. Storage
    /// failures are logged and mapped to [`ResolutionOutcome::Failed`]; they
    /// never propagate to the caller.
    pub fn resolve(&self, code: &str, source: &str) -> ResolutionOutcome {
        match self.try_resolve(code, source) {
            Ok(outcome) => outcome,
            Err(e) => {
                error!(shortcode = %code, error = %e, "Redirect failed - unexpected error");
                ResolutionOutcome::Failed
            }
        }
    }

    /// Resolves a fully-qualified short URL by its trailing path segment.
    ///
    /// This is the manual "open" action on the statistics listing. It runs
    /// the same pipeline as [`Self::resolve`], so expiration is checked
    /// uniformly across both call sites.
    pub fn resolve_short_url(&self, short_url: &str, source: &str) -> ResolutionOutcome {
        match derive_shortcode(short_url) {
            Some(code) => self.resolve(code, source),
            None => {
                error!(short_url = %short_url, "Redirect failed - no shortcode in URL");
                ResolutionOutcome::NotFound
            }
        }
    }

    fn try_resolve(&self, code: &str, source: &str) -> Result<ResolutionOutcome, AppError> {
        let Some(record) = self.repository.find_by_code(code)? else {
            error!(shortcode = %code, "Redirect failed - short URL not found");
            return Ok(ResolutionOutcome::NotFound);
        };

        if record.is_expired(Utc::now()) {
            warn!(
                shortcode = %code,
                expires_at = %record.expires_at,
                "Redirect failed - URL expired"
            );
            return Ok(ResolutionOutcome::Expired);
        }

        if !self.repository.record_click(code, Click::now(source))? {
            // The record vanished between lookup and click write; the
            // redirect target is still known, so proceed.
            warn!(shortcode = %code, "Record disappeared before the click could be written");
        }

        info!(shortcode = %code, long_url = %record.long_url, "Redirect successful");
        Ok(ResolutionOutcome::Redirect(record.long_url))
    }
}

/// Extracts the shortcode from the trailing path segment of a short URL.
fn derive_shortcode(short_url: &str) -> Option<&str> {
    short_url
        .trim_end_matches('/')
        .rsplit('/')
        .next()
        .filter(|segment| !segment.is_empty() && !segment.contains(':'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{ShortUrl, sources};
    use crate::domain::repositories::MockUrlRepository;
    use chrono::Duration;

    fn live_record(code: &str) -> ShortUrl {
        ShortUrl::new(
            "https://example.com/target".to_string(),
            code.to_string(),
            Utc::now(),
            30,
        )
    }

    fn expired_record(code: &str) -> ShortUrl {
        ShortUrl::new(
            "https://example.com/target".to_string(),
            code.to_string(),
            Utc::now() - Duration::minutes(10),
            1,
        )
    }

    #[test]
    fn test_unknown_code_is_not_found_and_records_nothing() {
        let mut repo = MockUrlRepository::new();
        repo.expect_find_by_code().returning(|_| Ok(None));
        repo.expect_record_click().times(0);
        let service = ResolutionService::new(Arc::new(repo));

        let outcome = service.resolve("doesnotexist", "test");

        assert_eq!(outcome, ResolutionOutcome::NotFound);
    }

    #[test]
    fn test_expired_record_is_terminal_without_click() {
        let mut repo = MockUrlRepository::new();
        repo.expect_find_by_code()
            .returning(|_| Ok(Some(expired_record("oldcode1"))));
        repo.expect_record_click().times(0);
        let service = ResolutionService::new(Arc::new(repo));

        let outcome = service.resolve("oldcode1", sources::DIRECT_ACCESS);

        assert_eq!(outcome, ResolutionOutcome::Expired);
    }

    #[test]
    fn test_live_record_redirects_and_records_click() {
        let mut repo = MockUrlRepository::new();
        repo.expect_find_by_code()
            .returning(|_| Ok(Some(live_record("livecode"))));
        repo.expect_record_click()
            .withf(|code, click| {
                code == "livecode" && click.source == "direct_access" && click.location == "Unknown"
            })
            .times(1)
            .returning(|_, _| Ok(true));
        let service = ResolutionService::new(Arc::new(repo));

        let outcome = service.resolve("livecode", sources::DIRECT_ACCESS);

        assert_eq!(
            outcome,
            ResolutionOutcome::Redirect("https://example.com/target".to_string())
        );
    }

    #[test]
    fn test_storage_failure_maps_to_failed() {
        let mut repo = MockUrlRepository::new();
        repo.expect_find_by_code()
            .returning(|_| Ok(Some(live_record("livecode"))));
        repo.expect_record_click()
            .returning(|_, _| Err(AppError::Storage("disk full".to_string())));
        let service = ResolutionService::new(Arc::new(repo));

        let outcome = service.resolve("livecode", sources::DIRECT_ACCESS);

        assert_eq!(outcome, ResolutionOutcome::Failed);
    }

    #[test]
    fn test_short_url_resolution_derives_trailing_segment() {
        let mut repo = MockUrlRepository::new();
        repo.expect_find_by_code()
            .withf(|code| code == "abc12345")
            .returning(|_| Ok(Some(live_record("abc12345"))));
        repo.expect_record_click()
            .withf(|_, click| click.source == "statistics_page")
            .times(1)
            .returning(|_, _| Ok(true));
        let service = ResolutionService::new(Arc::new(repo));

        let outcome =
            service.resolve_short_url("http://localhost:3000/abc12345", sources::STATISTICS_PAGE);

        assert!(matches!(outcome, ResolutionOutcome::Redirect(_)));
    }

    #[test]
    fn test_short_url_resolution_checks_expiration_too() {
        let mut repo = MockUrlRepository::new();
        repo.expect_find_by_code()
            .returning(|_| Ok(Some(expired_record("oldcode1"))));
        repo.expect_record_click().times(0);
        let service = ResolutionService::new(Arc::new(repo));

        let outcome =
            service.resolve_short_url("http://localhost:3000/oldcode1", sources::STATISTICS_PAGE);

        assert_eq!(outcome, ResolutionOutcome::Expired);
    }

    #[test]
    fn test_short_url_without_path_segment_is_not_found() {
        let repo = MockUrlRepository::new();
        let service = ResolutionService::new(Arc::new(repo));

        let outcome = service.resolve_short_url("http://", sources::STATISTICS_PAGE);

        assert_eq!(outcome, ResolutionOutcome::NotFound);
    }
}

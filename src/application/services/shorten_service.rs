//! Batch URL shortening service.

use std::collections::HashSet;
use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use crate::domain::entities::ShortUrl;
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;
use crate::utils::code_generator::generate_shortcode;
use crate::utils::validation::{is_valid_duration, is_valid_shortcode, is_valid_url};

/// Maximum number of creation requests accepted per batch.
pub const MAX_BATCH_SIZE: usize = 5;

/// Validity window in minutes applied when a request does not specify one.
pub const DEFAULT_VALIDITY_MINUTES: i64 = 30;

/// Collision retry budget for generated shortcodes.
const MAX_GENERATION_ATTEMPTS: usize = 10;

/// One URL entry in a shortening batch.
///
/// `validity` and `shortcode` carry raw user text exactly as collected by
/// the presentation layer; empty or whitespace-only values count as absent.
#[derive(Debug, Clone, Default)]
pub struct CreationRequest {
    pub long_url: String,
    /// Validity window in minutes, as raw text.
    pub validity: Option<String>,
    /// Custom shortcode, validated if present.
    pub shortcode: Option<String>,
}

/// Per-field validation messages for one rejected request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub long_url: Option<String>,
    pub validity: Option<String>,
    pub shortcode: Option<String>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.long_url.is_none() && self.validity.is_none() && self.shortcode.is_none()
    }
}

/// Outcome of a single request, kept at the same index as its input.
#[derive(Debug, Clone)]
pub enum RequestResult {
    Created(ShortUrl),
    Rejected(FieldErrors),
}

/// Results for a whole batch, indexed like the input requests.
#[derive(Debug, Clone)]
pub struct BatchResult {
    pub results: Vec<RequestResult>,
}

impl BatchResult {
    /// Records built by this batch, in input order.
    pub fn created(&self) -> impl Iterator<Item = &ShortUrl> {
        self.results.iter().filter_map(|r| match r {
            RequestResult::Created(record) => Some(record),
            RequestResult::Rejected(_) => None,
        })
    }

    pub fn has_errors(&self) -> bool {
        self.results
            .iter()
            .any(|r| matches!(r, RequestResult::Rejected(_)))
    }
}

/// Service turning validated creation requests into stored records.
///
/// Requests are validated independently; one rejected request never blocks
/// its siblings. All records built by a batch are appended to the store in a
/// single call, preserving input order.
pub struct ShortenService<R: UrlRepository> {
    repository: Arc<R>,
}

impl<R: UrlRepository> ShortenService<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Shortens a batch of up to [`MAX_BATCH_SIZE`] requests.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for an oversized batch,
    /// [`AppError::Internal`] if unique code generation is exhausted, and
    /// storage errors from the final append. Per-field problems are not
    /// errors; they come back as [`RequestResult::Rejected`] entries.
    pub fn shorten(&self, requests: &[CreationRequest]) -> Result<BatchResult, AppError> {
        if requests.len() > MAX_BATCH_SIZE {
            return Err(AppError::Validation(format!(
                "A batch may contain at most {MAX_BATCH_SIZE} requests, got {}",
                requests.len()
            )));
        }

        // Codes taken by earlier requests in this batch, before anything is
        // persisted.
        let mut claimed: HashSet<String> = HashSet::new();
        let mut results = Vec::with_capacity(requests.len());
        let mut new_records = Vec::new();

        for request in requests {
            let result = self.process_request(request, &mut claimed)?;
            if let RequestResult::Created(record) = &result {
                new_records.push(record.clone());
            }
            results.push(result);
        }

        if !new_records.is_empty() {
            self.repository.append(new_records)?;
        }

        Ok(BatchResult { results })
    }

    fn process_request(
        &self,
        request: &CreationRequest,
        claimed: &mut HashSet<String>,
    ) -> Result<RequestResult, AppError> {
        let mut errors = FieldErrors::default();

        let long_url = request.long_url.trim();
        if long_url.is_empty() {
            errors.long_url = Some("URL is required".to_string());
        } else if !is_valid_url(long_url) {
            errors.long_url = Some("Invalid URL format".to_string());
        }

        let validity_minutes = match normalized(&request.validity) {
            Some(raw) => match raw.parse::<i64>() {
                Ok(minutes) if is_valid_duration(minutes) => minutes,
                _ => {
                    errors.validity = Some("Validity must be a positive integer".to_string());
                    DEFAULT_VALIDITY_MINUTES
                }
            },
            None => DEFAULT_VALIDITY_MINUTES,
        };

        let custom_code = normalized(&request.shortcode);
        if let Some(code) = &custom_code {
            if !is_valid_shortcode(code) {
                errors.shortcode =
                    Some("Shortcode must be 5-20 alphanumeric characters".to_string());
            } else if claimed.contains(code) || self.repository.find_by_code(code)?.is_some() {
                errors.shortcode = Some("Shortcode is already taken".to_string());
            }
        }

        if !errors.is_empty() {
            return Ok(RequestResult::Rejected(errors));
        }

        let shortcode = match custom_code {
            Some(code) => code,
            None => self.generate_unique_code(claimed)?,
        };
        claimed.insert(shortcode.clone());

        let record = ShortUrl::new(
            long_url.to_string(),
            shortcode,
            Utc::now(),
            validity_minutes,
        );

        info!(
            long_url = %record.long_url,
            shortcode = %record.shortcode,
            validity_minutes,
            "URL shortened successfully"
        );

        Ok(RequestResult::Created(record))
    }

    /// Generates a shortcode free in both the store and the current batch,
    /// retrying up to [`MAX_GENERATION_ATTEMPTS`] times.
    fn generate_unique_code(&self, claimed: &HashSet<String>) -> Result<String, AppError> {
        for _ in 0..MAX_GENERATION_ATTEMPTS {
            let code = generate_shortcode();
            if !claimed.contains(&code) && self.repository.find_by_code(&code)?.is_none() {
                return Ok(code);
            }
        }

        Err(AppError::Internal(
            "Failed to generate a unique shortcode".to_string(),
        ))
    }
}

/// Treats empty and whitespace-only optional text as absent.
fn normalized(field: &Option<String>) -> Option<String> {
    field
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

//! Short URL entity representing a shortened link and its click ledger.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::click::Click;

/// A shortened URL mapping with expiration and click-tracking metadata.
///
/// `long_url`, `shortcode`, `created_at`, and `expires_at` are write-once;
/// after creation the only permitted mutation is appending a click via
/// [`ShortUrl::push_click`]. The fully-qualified short URL is derived from
/// the origin on demand and never stored, so it cannot drift from the
/// shortcode. Unknown keys in persisted blobs (such as a legacy stored
/// `shortUrl`) are ignored on read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortUrl {
    pub long_url: String,
    pub shortcode: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    /// Always equal to `click_data.len()`.
    pub clicks: u64,
    /// Append-only; insertion order is chronological order.
    pub click_data: Vec<Click>,
}

impl ShortUrl {
    /// Creates a fresh record expiring `validity_minutes` after `created_at`,
    /// with an empty click ledger.
    pub fn new(
        long_url: String,
        shortcode: String,
        created_at: DateTime<Utc>,
        validity_minutes: i64,
    ) -> Self {
        Self {
            long_url,
            shortcode,
            created_at,
            expires_at: created_at + Duration::minutes(validity_minutes),
            clicks: 0,
            click_data: Vec::new(),
        }
    }

    /// Returns true once `now` is strictly past the expiry time.
    ///
    /// A record resolved exactly at `expires_at` is still live.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }

    /// The fully-qualified short link under `origin`.
    pub fn short_url(&self, origin: &str) -> String {
        format!("{}/{}", origin.trim_end_matches('/'), self.shortcode)
    }

    /// Appends a click and bumps the counter, keeping both in lockstep.
    pub fn push_click(&mut self, click: Click) {
        self.click_data.push(click);
        self.clicks += 1;
    }
}

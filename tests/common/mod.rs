#![allow(dead_code)]

use std::sync::Arc;

use chrono::{Duration, Utc};
use urlstash::prelude::*;

pub type TestRepo = KvUrlRepository<MemoryStore>;

pub fn test_repository() -> Arc<TestRepo> {
    Arc::new(KvUrlRepository::new(MemoryStore::new(), "shortenedUrls"))
}

pub fn request(url: &str) -> CreationRequest {
    CreationRequest {
        long_url: url.to_string(),
        ..Default::default()
    }
}

pub fn request_full(url: &str, validity: Option<&str>, shortcode: Option<&str>) -> CreationRequest {
    CreationRequest {
        long_url: url.to_string(),
        validity: validity.map(str::to_string),
        shortcode: shortcode.map(str::to_string),
    }
}

/// A record whose validity window already passed, created ten minutes ago
/// with one minute of validity.
pub fn expired_record(code: &str, url: &str) -> ShortUrl {
    ShortUrl::new(
        url.to_string(),
        code.to_string(),
        Utc::now() - Duration::minutes(10),
        1,
    )
}

pub fn live_record(code: &str, url: &str) -> ShortUrl {
    ShortUrl::new(url.to_string(), code.to_string(), Utc::now(), 30)
}

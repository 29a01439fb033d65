//! Pure validation predicates over raw creation input.
//!
//! These functions carry no state and perform no IO; callers are responsible
//! for parsing numeric text before asking about durations.

use regex::Regex;
use std::sync::LazyLock;
use url::Url;

static SHORTCODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9]{5,20}$").expect("shortcode regex is valid"));

/// Returns true if `candidate` parses as an absolute URL with a scheme and
/// an authority. No network check is performed.
pub fn is_valid_url(candidate: &str) -> bool {
    Url::parse(candidate).map(|url| url.has_host()).unwrap_or(false)
}

/// Returns true if `candidate` is 5-20 ASCII alphanumeric characters.
pub fn is_valid_shortcode(candidate: &str) -> bool {
    SHORTCODE_RE.is_match(candidate)
}

/// Returns true if `candidate` is a usable validity window in minutes.
pub fn is_valid_duration(candidate: i64) -> bool {
    candidate > 0
}

//! Click entity representing a single resolution of a short URL.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Source tags used by the built-in resolution callers.
///
/// The `source` field is an open set; external callers may record their own
/// tags. These constants cover the two paths this crate ships with.
pub mod sources {
    /// A shortcode resolved directly (e.g. pasted or followed link).
    pub const DIRECT_ACCESS: &str = "direct_access";

    /// A short URL opened from the statistics listing.
    pub const STATISTICS_PAGE: &str = "statistics_page";
}

/// Placeholder recorded while no geolocation integration exists.
pub const UNKNOWN_LOCATION: &str = "Unknown";

/// One access of a short URL, appended to the owning record's ledger.
///
/// Serialized field names match the persisted collection shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Click {
    pub timestamp: DateTime<Utc>,
    /// Provenance tag identifying which caller triggered the resolution.
    pub source: String,
    /// Always [`UNKNOWN_LOCATION`] for clicks created by this crate.
    pub location: String,
}

impl Click {
    /// Creates a click stamped with the current time and the placeholder
    /// location.
    pub fn now(source: &str) -> Self {
        Self {
            timestamp: Utc::now(),
            source: source.to_string(),
            location: UNKNOWN_LOCATION.to_string(),
        }
    }
}

//! Contract models for the URL shortener
//!
//! These models are transport-agnostic and used for inter-module communication.

use chrono::{DateTime, Utc};

/// Longest normalized URL that can be stored
pub const MAX_ORIGINAL_URL_LENGTH: usize = 2048;

/// Upper bound for generated short codes (matches the storage column width)
pub const MAX_SHORT_CODE_LENGTH: usize = 10;

/// A persisted mapping from a short code to a normalized URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortUrl {
    /// Surrogate key assigned by storage
    pub id: i64,
    /// Normalized original URL (unique)
    pub original_url: String,
    /// Base62 short code (unique)
    pub short_code: String,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

/// A mapping that has not been persisted yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewShortUrl {
    pub original_url: String,
    pub short_code: String,
}

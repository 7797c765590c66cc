//! Native client trait for inter-module communication
//!
//! This trait defines the API that other modules use to shorten and resolve URLs.
//! NO HTTP - direct function calls.

use super::{error::UrlShortenerError, model::ShortUrl};
use async_trait::async_trait;

/// URL shortener API for inter-module communication
#[async_trait]
pub trait UrlShortenerApi: Send + Sync {
    /// Shorten a raw (not yet normalized) URL.
    ///
    /// Idempotent: shortening the same normalized URL again returns the
    /// existing mapping.
    async fn shorten_url(&self, raw_url: &str) -> Result<ShortUrl, UrlShortenerError>;

    /// Resolve a short code to the normalized original URL
    async fn resolve_url(&self, short_code: &str) -> Result<String, UrlShortenerError>;
}

//! Repository traits for data access
//!
//! These traits define the interface for data access operations.
//! Implementations are in infra/storage/repositories.rs

use crate::contract::{NewShortUrl, ShortUrl};
use anyhow::Result;
use async_trait::async_trait;

/// Result of inserting a new mapping
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InsertOutcome {
    /// Row was stored
    Inserted(ShortUrl),
    /// A unique constraint (original URL or short code) rejected the row
    Conflict,
}

/// Repository for short URL mappings
#[async_trait]
pub trait ShortUrlRepository: Send + Sync {
    /// Find a mapping by its normalized original URL
    async fn find_by_original_url(&self, original_url: &str) -> Result<Option<ShortUrl>>;

    /// Find a mapping by short code
    async fn find_by_short_code(&self, short_code: &str) -> Result<Option<ShortUrl>>;

    /// Insert a new mapping, stamping `created_at`
    async fn insert(&self, new: NewShortUrl) -> Result<InsertOutcome>;

    /// Number of stored mappings
    async fn count(&self) -> Result<u64>;
}

//! Domain service - business logic orchestration

use super::codegen::CodeGenerator;
use super::normalize::normalize_url;
use super::repository::{InsertOutcome, ShortUrlRepository};
use crate::contract::{NewShortUrl, ShortUrl, UrlShortenerError};
use std::sync::Arc;

/// Default number of deterministic candidates tried before giving up
pub const DEFAULT_MAX_ATTEMPTS: u32 = 10;

/// Domain service for shortening and resolving URLs
pub struct Service {
    repo: Arc<dyn ShortUrlRepository>,
    generator: Arc<dyn CodeGenerator>,
    max_attempts: u32,
}

impl Service {
    /// Create a new service instance
    pub fn new(
        repo: Arc<dyn ShortUrlRepository>,
        generator: Arc<dyn CodeGenerator>,
        max_attempts: u32,
    ) -> Self {
        Self {
            repo,
            generator,
            max_attempts: max_attempts.max(1),
        }
    }

    /// Shorten a raw URL, returning the existing mapping when the normalized
    /// URL was shortened before
    pub async fn shorten_url(&self, raw_url: &str) -> Result<ShortUrl, UrlShortenerError> {
        if raw_url.trim().is_empty() {
            return Err(UrlShortenerError::invalid_url(
                "Original URL must not be blank",
            ));
        }

        let normalized = normalize_url(raw_url).map_err(|e| {
            UrlShortenerError::invalid_url(format!("Invalid URL: {e}"))
        })?;

        if let Some(existing) = self
            .repo
            .find_by_original_url(&normalized)
            .await
            .map_err(internal)?
        {
            tracing::debug!(short_code = %existing.short_code, "URL already shortened");
            return Ok(existing);
        }

        for attempt in 0..self.max_attempts {
            let seed = candidate_seed(&normalized, attempt);
            let code = self.generator.generate(&seed)?;

            match self
                .repo
                .find_by_short_code(&code)
                .await
                .map_err(internal)?
            {
                None => {
                    let new = NewShortUrl {
                        original_url: normalized.clone(),
                        short_code: code.clone(),
                    };
                    match self.repo.insert(new).await.map_err(internal)? {
                        InsertOutcome::Inserted(created) => {
                            tracing::info!(
                                short_code = %created.short_code,
                                attempt,
                                "Created short URL"
                            );
                            return Ok(created);
                        }
                        InsertOutcome::Conflict => {
                            // Lost a race: either the same URL was stored
                            // concurrently or another URL took this code.
                            if let Some(existing) = self
                                .repo
                                .find_by_original_url(&normalized)
                                .await
                                .map_err(internal)?
                            {
                                return Ok(existing);
                            }
                        }
                    }
                }
                Some(existing) if existing.original_url == normalized => {
                    return Ok(existing);
                }
                Some(_) => {
                    tracing::debug!(short_code = %code, attempt, "Short code collision");
                }
            }
        }

        tracing::warn!(
            attempts = self.max_attempts,
            "Exhausted short code candidates"
        );
        Err(UrlShortenerError::CodeSpaceExhausted {
            attempts: self.max_attempts,
        })
    }

    /// Resolve a short code to its original URL
    pub async fn resolve_url(&self, short_code: &str) -> Result<String, UrlShortenerError> {
        if short_code.trim().is_empty() {
            return Err(UrlShortenerError::blank_short_code());
        }

        self.repo
            .find_by_short_code(short_code)
            .await
            .map_err(internal)?
            .map(|mapping| mapping.original_url)
            .ok_or_else(|| UrlShortenerError::not_found(short_code))
    }

    /// Number of stored mappings
    pub async fn count(&self) -> Result<u64, UrlShortenerError> {
        self.repo.count().await.map_err(internal)
    }
}

/// Attempt 0 hashes the normalized URL as-is; later attempts append `#<n>`
fn candidate_seed(normalized: &str, attempt: u32) -> String {
    if attempt == 0 {
        normalized.to_string()
    } else {
        format!("{normalized}#{attempt}")
    }
}

fn internal(error: anyhow::Error) -> UrlShortenerError {
    tracing::error!(error = ?error, "Short URL storage failure");
    UrlShortenerError::Internal
}

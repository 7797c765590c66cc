//! Deterministic short code generation
//!
//! The same seed always yields the same code. Collisions are possible and are
//! resolved by the service, which re-seeds deterministically.

use super::base62;
use crate::contract::{UrlShortenerError, MAX_SHORT_CODE_LENGTH};
use sha2::{Digest, Sha256};

/// Produces a short code candidate from a seed string
pub trait CodeGenerator: Send + Sync {
    fn generate(&self, seed: &str) -> Result<String, UrlShortenerError>;
}

/// SHA-256 based generator: first 8 digest bytes, masked to 63 bits,
/// Base62-encoded and truncated to `max_length`
#[derive(Debug, Clone)]
pub struct Sha256CodeGenerator {
    max_length: usize,
}

impl Sha256CodeGenerator {
    /// Create a generator; `max_length` is clamped to `1..=MAX_SHORT_CODE_LENGTH`
    pub fn new(max_length: usize) -> Self {
        Self {
            max_length: max_length.clamp(1, MAX_SHORT_CODE_LENGTH),
        }
    }

    pub fn max_length(&self) -> usize {
        self.max_length
    }
}

impl Default for Sha256CodeGenerator {
    fn default() -> Self {
        Self::new(MAX_SHORT_CODE_LENGTH)
    }
}

impl CodeGenerator for Sha256CodeGenerator {
    fn generate(&self, seed: &str) -> Result<String, UrlShortenerError> {
        if seed.trim().is_empty() {
            return Err(UrlShortenerError::invalid_url(
                "Short code seed must not be blank",
            ));
        }

        let digest = Sha256::digest(seed.as_bytes());
        let mut prefix = [0u8; 8];
        prefix.copy_from_slice(&digest[..8]);
        let value = u64::from_be_bytes(prefix) & (i64::MAX as u64);

        let mut code = base62::encode_u64(value);
        code.truncate(self.max_length);
        Ok(code)
    }
}

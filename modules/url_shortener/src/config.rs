//! Configuration for the URL shortener module

use crate::contract::MAX_SHORT_CODE_LENGTH;
use crate::domain::service::DEFAULT_MAX_ATTEMPTS;
use serde::{Deserialize, Serialize};

/// URL shortener configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Public base URL that short links are built on (trailing `/` ignored)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Length short codes are truncated to
    #[serde(default = "default_short_code_length")]
    pub short_code_length: usize,

    /// Deterministic candidates tried before giving up on a URL
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,

    /// Status code returned by `GET /u/{code}` (301, 302, 307 or 308)
    #[serde(default = "default_redirect_status")]
    pub redirect_status: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            short_code_length: default_short_code_length(),
            max_attempts: default_max_attempts(),
            redirect_status: default_redirect_status(),
        }
    }
}

impl Config {
    /// Reject values the service cannot run with
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.base_url.trim_end_matches('/').is_empty() {
            anyhow::bail!("base_url must not be empty");
        }
        if !(1..=MAX_SHORT_CODE_LENGTH).contains(&self.short_code_length) {
            anyhow::bail!(
                "short_code_length must be between 1 and {MAX_SHORT_CODE_LENGTH}, got {}",
                self.short_code_length
            );
        }
        if self.max_attempts == 0 {
            anyhow::bail!("max_attempts must be at least 1");
        }
        if !matches!(self.redirect_status, 301 | 302 | 307 | 308) {
            anyhow::bail!(
                "redirect_status must be one of 301, 302, 307, 308, got {}",
                self.redirect_status
            );
        }
        Ok(())
    }

    /// Base URL without trailing slashes
    pub fn normalized_base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}

fn default_base_url() -> String {
    "http://localhost:8080".to_string()
}

fn default_short_code_length() -> usize {
    MAX_SHORT_CODE_LENGTH
}

fn default_max_attempts() -> u32 {
    DEFAULT_MAX_ATTEMPTS
}

fn default_redirect_status() -> u16 {
    302
}

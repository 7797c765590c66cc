//! Contract error types for the URL shortener
//!
//! These errors are transport-agnostic and used for inter-module communication.

use thiserror::Error;

/// URL shortener domain errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UrlShortenerError {
    /// The submitted URL is blank, malformed or uses an unsupported scheme
    #[error("{message}")]
    InvalidUrl {
        /// Human-readable reason
        message: String,
    },

    /// Short code is blank or unknown
    #[error("{message}")]
    NotFound {
        /// Human-readable reason
        message: String,
    },

    /// Every deterministic retry produced a code owned by another URL
    #[error("Unable to generate a unique short code after {attempts} attempts")]
    CodeSpaceExhausted {
        /// Number of candidates tried
        attempts: u32,
    },

    /// Internal error
    #[error("Internal error")]
    Internal,
}

impl UrlShortenerError {
    pub fn invalid_url(message: impl Into<String>) -> Self {
        Self::InvalidUrl {
            message: message.into(),
        }
    }

    pub fn not_found(code: &str) -> Self {
        Self::NotFound {
            message: format!("Unknown short code: {code}"),
        }
    }

    pub fn blank_short_code() -> Self {
        Self::NotFound {
            message: "Short code must not be blank".to_string(),
        }
    }
}

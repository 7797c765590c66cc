//! Contract layer - public API for inter-module communication
//!
//! This layer contains transport-agnostic models and the native client trait.
//! NO serde derives on models - these are pure domain types.

pub mod client;
pub mod error;
pub mod model;

pub use client::UrlShortenerApi;
pub use error::UrlShortenerError;
pub use model::{NewShortUrl, ShortUrl, MAX_ORIGINAL_URL_LENGTH, MAX_SHORT_CODE_LENGTH};

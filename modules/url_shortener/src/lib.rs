//! URL Shortener Module
//!
//! Turns absolute http(s) URLs into short, deterministic Base62 codes and
//! resolves them back. Mappings are stored through SeaORM; the REST surface
//! is served with axum and documented with utoipa.

// Public exports
pub mod contract;
pub use contract::{client::UrlShortenerApi, error::UrlShortenerError, ShortUrl};

pub mod module;
pub use module::UrlShortenerModule;

pub mod config;
pub use config::Config;

// Internal modules (hidden from public API)
#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;

//! Native client implementation - wraps domain service for in-process calls

use crate::contract::{ShortUrl, UrlShortenerApi, UrlShortenerError};
use crate::domain::Service;
use async_trait::async_trait;
use std::sync::Arc;

/// Native client implementation that directly calls the domain service
///
/// This client is used for in-process communication without HTTP overhead.
#[derive(Clone)]
pub struct NativeClient {
    service: Arc<Service>,
}

impl NativeClient {
    /// Create a new native client
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl UrlShortenerApi for NativeClient {
    async fn shorten_url(&self, raw_url: &str) -> Result<ShortUrl, UrlShortenerError> {
        self.service.shorten_url(raw_url).await
    }

    async fn resolve_url(&self, short_code: &str) -> Result<String, UrlShortenerError> {
        self.service.resolve_url(short_code).await
    }
}

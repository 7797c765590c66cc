//! REST DTOs with serde derives for HTTP API

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Shorten request
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ShortenRequest {
    /// Absolute http(s) URL to shorten
    #[schema(example = "https://example.com/some/long/path?with=query")]
    pub url: String,
}

/// Shorten response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ShortenResponse {
    /// Full short link
    #[schema(example = "http://localhost:8080/u/3voipHMxsn")]
    pub short_url: String,

    /// Short code
    #[schema(example = "3voipHMxsn")]
    pub short_code: String,

    /// Normalized original URL
    pub original_url: String,
}

/// Resolve response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ResolveResponse {
    /// Normalized original URL
    pub url: String,
}

/// Error body returned by every failing endpoint
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Stable machine-readable code
    #[schema(example = "INVALID_URL")]
    pub error: String,

    /// Human-readable explanation
    pub message: String,
}

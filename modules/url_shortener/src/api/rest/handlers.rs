//! HTTP request handlers - thin layer that delegates to domain service

use super::{
    dto::*,
    error::{map_domain_error, map_json_rejection, ApiError},
};
use crate::contract::UrlShortenerError;
use crate::domain::Service;
use axum::{
    extract::{rejection::JsonRejection, Path},
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;

/// State shared by all REST handlers
pub struct RestState {
    pub service: Arc<Service>,
    /// Base URL with trailing slashes removed
    pub base_url: String,
    pub redirect_status: StatusCode,
}

impl RestState {
    fn short_url(&self, short_code: &str) -> String {
        format!("{}/u/{}", self.base_url, short_code)
    }
}

/// Shorten a URL
#[utoipa::path(
    post,
    path = "/api/shorten",
    tag = "url-shortener",
    request_body = ShortenRequest,
    responses(
        (status = 200, description = "Short URL created or already existing", body = ShortenResponse),
        (status = 400, description = "Invalid URL or malformed body", body = ErrorResponse),
        (status = 500, description = "Unexpected failure", body = ErrorResponse)
    )
)]
pub async fn shorten(
    state: Arc<RestState>,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<Json<ShortenResponse>, ApiError> {
    let Json(req) = payload.map_err(map_json_rejection)?;

    let mapping = state
        .service
        .shorten_url(&req.url)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(ShortenResponse {
        short_url: state.short_url(&mapping.short_code),
        short_code: mapping.short_code,
        original_url: mapping.original_url,
    }))
}

/// Resolve a short code to its original URL
#[utoipa::path(
    get,
    path = "/api/resolve/{code}",
    tag = "url-shortener",
    params(("code" = String, Path, description = "Short code")),
    responses(
        (status = 200, description = "Original URL", body = ResolveResponse),
        (status = 404, description = "Unknown short code", body = ErrorResponse)
    )
)]
pub async fn resolve(
    state: Arc<RestState>,
    Path(code): Path<String>,
) -> Result<Json<ResolveResponse>, ApiError> {
    let url = state
        .service
        .resolve_url(&code)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(ResolveResponse { url }))
}

/// Redirect a short code to its original URL
#[utoipa::path(
    get,
    path = "/u/{code}",
    tag = "url-shortener",
    params(("code" = String, Path, description = "Short code")),
    responses(
        (status = 302, description = "Redirect to the original URL (status is configurable)"),
        (status = 404, description = "Unknown short code", body = ErrorResponse)
    )
)]
pub async fn redirect(
    state: Arc<RestState>,
    Path(code): Path<String>,
) -> Result<Response, ApiError> {
    let url = state
        .service
        .resolve_url(&code)
        .await
        .map_err(map_domain_error)?;

    let location = HeaderValue::from_str(&url).map_err(|e| {
        tracing::error!(error = %e, short_code = %code, "Stored URL is not a valid header value");
        map_domain_error(UrlShortenerError::Internal)
    })?;

    Ok((state.redirect_status, [(header::LOCATION, location)]).into_response())
}

//! OpenAPI document assembled from the handler annotations

use super::dto::{ErrorResponse, ResolveResponse, ShortenRequest, ShortenResponse};
use super::handlers;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(title = "URL Shortener API", description = "Shorten http(s) URLs and resolve short codes"),
    paths(handlers::shorten, handlers::resolve, handlers::redirect),
    components(schemas(ShortenRequest, ShortenResponse, ResolveResponse, ErrorResponse)),
    tags((name = "url-shortener", description = "Short URL operations"))
)]
pub struct ApiDoc;

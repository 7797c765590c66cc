//! Route registration

use super::{dto::*, error::ApiError, handlers, handlers::RestState, openapi::ApiDoc};
use axum::{
    extract::{rejection::JsonRejection, Path},
    response::Response,
    routing::{get, post},
    Extension, Json, Router,
};
use std::sync::Arc;
use utoipa::OpenApi;
use utoipa_rapidoc::RapiDoc;

/// Path the OpenAPI document is served on
pub const OPENAPI_PATH: &str = "/v3/api-docs";

/// Path of the interactive API browser, which loads [`OPENAPI_PATH`]
pub const DOCS_UI_PATH: &str = "/swagger-ui";

/// Register all REST routes, the OpenAPI document and its browser UI
pub fn register_routes(router: Router, state: Arc<RestState>) -> anyhow::Result<Router> {
    let router = router
        .route("/api/shorten", post(shorten_handler))
        .route("/api/resolve/{code}", get(resolve_handler))
        .route("/u/{code}", get(redirect_handler))
        .route(OPENAPI_PATH, get(openapi_handler))
        .merge(RapiDoc::new(OPENAPI_PATH).path(DOCS_UI_PATH))
        // Add state as extension for handlers
        .layer(Extension(state));

    Ok(router)
}

// ===== Handler wrappers that extract state from Extension =====

async fn shorten_handler(
    Extension(state): Extension<Arc<RestState>>,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<Json<ShortenResponse>, ApiError> {
    handlers::shorten(state, payload).await
}

async fn resolve_handler(
    Extension(state): Extension<Arc<RestState>>,
    path: Path<String>,
) -> Result<Json<ResolveResponse>, ApiError> {
    handlers::resolve(state, path).await
}

async fn redirect_handler(
    Extension(state): Extension<Arc<RestState>>,
    path: Path<String>,
) -> Result<Response, ApiError> {
    handlers::redirect(state, path).await
}

async fn openapi_handler() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

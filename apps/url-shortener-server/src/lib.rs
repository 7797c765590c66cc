//! URL Shortener Server
//!
//! Composition root: configuration, logging, database and HTTP wiring.

pub mod config;
pub mod logging;

use anyhow::Result;
use axum::Router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use url_shortener::{infra::storage, UrlShortenerModule};

pub use config::AppConfig;

/// Connect the database, run migrations and build the HTTP router
pub async fn build_app(cfg: &AppConfig) -> Result<Router> {
    tracing::info!(database_url = %cfg.database.url, "Connecting to database");
    let db = storage::connect(&cfg.database.url).await?;
    UrlShortenerModule::migrate(&db).await?;

    let module = UrlShortenerModule::init(cfg.modules.url_shortener.clone(), Arc::new(db)).await?;

    let router = module
        .register_rest(Router::new())?
        .layer(TraceLayer::new_for_http());

    Ok(router)
}

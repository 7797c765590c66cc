//! Module declaration and lifecycle: migrations, wiring, REST registration

use crate::api::native::NativeClient;
use crate::api::rest::{handlers::RestState, routes};
use crate::config::Config;
use crate::contract::UrlShortenerApi;
use crate::domain::{Service, Sha256CodeGenerator};
use crate::infra::storage::{self, repositories::SeaOrmShortUrlRepository};
use anyhow::Result;
use axum::http::StatusCode;
use sea_orm::DatabaseConnection;
use std::sync::Arc;

/// URL shortener module
pub struct UrlShortenerModule {
    config: Config,
    service: Arc<Service>,
}

impl UrlShortenerModule {
    /// Validate configuration and wire repository, generator and service
    pub async fn init(config: Config, db: Arc<DatabaseConnection>) -> Result<Self> {
        config.validate()?;

        let repo = Arc::new(SeaOrmShortUrlRepository::new(db));
        let generator = Arc::new(Sha256CodeGenerator::new(config.short_code_length));
        let service = Arc::new(Service::new(repo, generator, config.max_attempts));

        let existing = service
            .count()
            .await
            .map_err(|e| anyhow::anyhow!("Failed to read short URL table: {e}"))?;

        tracing::info!(
            base_url = %config.normalized_base_url(),
            short_code_length = config.short_code_length,
            existing_mappings = existing,
            "URL shortener initialized"
        );

        Ok(Self { config, service })
    }

    /// Run database migrations
    pub async fn migrate(db: &DatabaseConnection) -> Result<()> {
        storage::migrate(db).await?;
        tracing::info!("URL shortener migrations completed");
        Ok(())
    }

    /// In-process client for other modules
    pub fn client(&self) -> Arc<dyn UrlShortenerApi> {
        Arc::new(NativeClient::new(self.service.clone()))
    }

    /// Register REST routes on `router`
    pub fn register_rest(&self, router: axum::Router) -> Result<axum::Router> {
        let state = Arc::new(RestState {
            service: self.service.clone(),
            base_url: self.config.normalized_base_url().to_string(),
            redirect_status: StatusCode::from_u16(self.config.redirect_status)?,
        });

        tracing::info!("Registering URL shortener REST routes");
        routes::register_routes(router, state)
    }
}

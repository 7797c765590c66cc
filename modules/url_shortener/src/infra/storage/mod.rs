//! Storage layer - database entities and repositories

pub mod entity;
pub mod mapper;
pub mod migrations;
pub mod repositories;

use anyhow::Result;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;
use std::time::Duration;

/// Effectively unbounded; `ConnectOptions` has no way to disable reaping
const PINNED_CONNECTION_LIFETIME: Duration = Duration::from_secs(u32::MAX as u64);

/// Open a connection pool for `url`.
///
/// An in-memory SQLite database exists per connection, so such URLs are
/// pinned to a single pooled connection that is never recycled.
pub async fn connect(url: &str) -> Result<DatabaseConnection> {
    let mut options = ConnectOptions::new(url.to_owned());
    options.sqlx_logging(false);
    if is_sqlite_memory(url) {
        options
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(PINNED_CONNECTION_LIFETIME)
            .max_lifetime(PINNED_CONNECTION_LIFETIME);
    }

    let db = Database::connect(options).await?;
    tracing::debug!(backend = ?db.get_database_backend(), "Database connected");
    Ok(db)
}

/// Apply all pending migrations
pub async fn migrate(db: &DatabaseConnection) -> Result<()> {
    migrations::Migrator::up(db, None).await?;
    Ok(())
}

fn is_sqlite_memory(url: &str) -> bool {
    url.starts_with("sqlite:") && url.contains(":memory:")
}

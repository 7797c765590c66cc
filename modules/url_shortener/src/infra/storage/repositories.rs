//! SeaORM repository implementations

use crate::contract::{NewShortUrl, ShortUrl};
use crate::domain::repository::{InsertOutcome, ShortUrlRepository};
use anyhow::Result;
use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter, SqlErr,
};
use std::sync::Arc;

use super::entity;

pub struct SeaOrmShortUrlRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmShortUrlRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ShortUrlRepository for SeaOrmShortUrlRepository {
    async fn find_by_original_url(&self, original_url: &str) -> Result<Option<ShortUrl>> {
        let result = entity::Entity::find()
            .filter(entity::Column::OriginalUrl.eq(original_url))
            .one(&*self.db)
            .await?;

        Ok(result.map(Into::into))
    }

    async fn find_by_short_code(&self, short_code: &str) -> Result<Option<ShortUrl>> {
        let result = entity::Entity::find()
            .filter(entity::Column::ShortCode.eq(short_code))
            .one(&*self.db)
            .await?;

        Ok(result.map(Into::into))
    }

    async fn insert(&self, new: NewShortUrl) -> Result<InsertOutcome> {
        let active: entity::ActiveModel = new.into();

        match entity::Entity::insert(active)
            .exec_with_returning(&*self.db)
            .await
        {
            Ok(model) => Ok(InsertOutcome::Inserted(model.into())),
            Err(e) if is_unique_violation(&e) => {
                tracing::debug!(error = %e, "Insert rejected by unique constraint");
                Ok(InsertOutcome::Conflict)
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn count(&self) -> Result<u64> {
        Ok(entity::Entity::find().count(&*self.db).await?)
    }
}

fn is_unique_violation(error: &DbErr) -> bool {
    matches!(error.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}

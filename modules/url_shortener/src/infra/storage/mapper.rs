//! Entity to model mappers
//!
//! Conversions between SeaORM entities and contract models

use super::entity;
use crate::contract::{NewShortUrl, ShortUrl};

impl From<entity::Model> for ShortUrl {
    fn from(entity: entity::Model) -> Self {
        Self {
            id: entity.id,
            original_url: entity.original_url,
            short_code: entity.short_code,
            created_at: entity.created_at,
        }
    }
}

impl From<NewShortUrl> for entity::ActiveModel {
    fn from(model: NewShortUrl) -> Self {
        use sea_orm::ActiveValue::*;

        Self {
            id: NotSet,
            original_url: Set(model.original_url),
            short_code: Set(model.short_code),
            created_at: Set(chrono::Utc::now()),
        }
    }
}

//! SeaORM entities for database tables

use sea_orm::entity::prelude::*;

/// Short URL mapping table entity
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "short_urls")]
pub struct Model {
    /// Surrogate key
    #[sea_orm(primary_key)]
    pub id: i64,

    /// Normalized original URL (unique)
    #[sea_orm(unique)]
    pub original_url: String,

    /// Base62 short code (unique)
    #[sea_orm(unique)]
    pub short_code: String,

    /// Creation timestamp
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

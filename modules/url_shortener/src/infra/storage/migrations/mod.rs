//! Database migrations for the URL shortener

use sea_orm_migration::prelude::*;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20250201_000001_create_short_urls::Migration)]
    }
}

mod m20250201_000001_create_short_urls {
    use super::*;
    use crate::contract::{MAX_ORIGINAL_URL_LENGTH, MAX_SHORT_CODE_LENGTH};

    #[derive(DeriveMigrationName)]
    pub struct Migration;

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(ShortUrls::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(ShortUrls::Id)
                                .big_integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(
                            ColumnDef::new(ShortUrls::OriginalUrl)
                                .string_len(MAX_ORIGINAL_URL_LENGTH as u32)
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(ShortUrls::ShortCode)
                                .string_len(MAX_SHORT_CODE_LENGTH as u32)
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(ShortUrls::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null()
                                .default(Expr::current_timestamp()),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name("uk_short_urls_original_url")
                        .table(ShortUrls::Table)
                        .col(ShortUrls::OriginalUrl)
                        .unique()
                        .if_not_exists()
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name("uk_short_urls_short_code")
                        .table(ShortUrls::Table)
                        .col(ShortUrls::ShortCode)
                        .unique()
                        .if_not_exists()
                        .to_owned(),
                )
                .await?;

            Ok(())
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(ShortUrls::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum ShortUrls {
        Table,
        Id,
        OriginalUrl,
        ShortCode,
        CreatedAt,
    }
}

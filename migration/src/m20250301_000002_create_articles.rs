// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use sea_orm_migration::prelude::*;

/// 长文阅读表（双语字段）
#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Articles::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Articles::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Articles::TitleEn).string().not_null())
                    .col(ColumnDef::new(Articles::TitleZh).string().not_null())
                    .col(ColumnDef::new(Articles::ContentEn).text().not_null())
                    .col(ColumnDef::new(Articles::ContentZh).text().not_null())
                    .col(ColumnDef::new(Articles::Category).string().not_null())
                    .col(ColumnDef::new(Articles::Source).string().not_null())
                    .col(ColumnDef::new(Articles::ImageUrl).string())
                    .col(ColumnDef::new(Articles::SourceUrl).string().not_null())
                    .col(
                        ColumnDef::new(Articles::CreatedAt)
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
                    .name("idx_articles_category_created_at")
                    .table(Articles::Table)
                    .col(Articles::Category)
                    .col(Articles::CreatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Articles::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Articles {
    Table,
    Id,
    TitleEn,
    TitleZh,
    ContentEn,
    ContentZh,
    Category,
    Source,
    ImageUrl,
    SourceUrl,
    CreatedAt,
}

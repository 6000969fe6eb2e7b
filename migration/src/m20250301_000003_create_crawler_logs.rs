// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use sea_orm_migration::prelude::*;

/// 采集审计日志表（只追加）
#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CrawlerLogs::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CrawlerLogs::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(CrawlerLogs::Source).string().not_null())
                    .col(ColumnDef::new(CrawlerLogs::Status).string().not_null())
                    .col(
                        ColumnDef::new(CrawlerLogs::ArticleCount)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(CrawlerLogs::Error).text())
                    .col(
                        ColumnDef::new(CrawlerLogs::StartedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CrawlerLogs::CompletedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_crawler_logs_started_at")
                    .table(CrawlerLogs::Table)
                    .col(CrawlerLogs::StartedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CrawlerLogs::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum CrawlerLogs {
    Table,
    Id,
    Source,
    Status,
    ArticleCount,
    Error,
    StartedAt,
    CompletedAt,
}

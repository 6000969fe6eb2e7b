// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::batch::NormalizedBatch;
use crate::domain::models::content::{ArticleItem, NewsItem};
use crate::domain::models::raw_record::ContentKind;
use crate::domain::repositories::content_repository::ContentRepository;
use crate::utils::errors::IngestionError;
use serde::Serialize;
use std::sync::Arc;
use tracing::info;

/// 写入结果
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistSummary {
    pub news_saved: u64,
    pub articles_saved: u64,
}

impl PersistSummary {
    pub fn total(&self) -> u64 {
        self.news_saved + self.articles_saved
    }
}

/// 内容写入器
///
/// 每种内容一次批量写入，先新闻后长文。两次写入相互独立：
/// 长文写入失败时已写入的新闻不会回滚。
pub struct IngestionWriter {
    repository: Arc<dyn ContentRepository>,
}

impl IngestionWriter {
    pub fn new(repository: Arc<dyn ContentRepository>) -> Self {
        Self { repository }
    }

    /// 持久化批次，空序列跳过
    pub async fn persist(&self, batch: &NormalizedBatch) -> Result<PersistSummary, IngestionError> {
        let mut summary = PersistSummary::default();

        if !batch.news_items.is_empty() {
            let rows: Vec<NewsItem> = batch.news_items.iter().map(NewsItem::from).collect();
            summary.news_saved = self
                .repository
                .create_many_news(&rows)
                .await
                .map_err(|source| IngestionError::Persist {
                    kind: ContentKind::News,
                    saved: 0,
                    source,
                })?;
        }

        if !batch.article_items.is_empty() {
            let rows: Vec<ArticleItem> =
                batch.article_items.iter().map(ArticleItem::from).collect();
            summary.articles_saved = self
                .repository
                .create_many_articles(&rows)
                .await
                .map_err(|source| IngestionError::Persist {
                    kind: ContentKind::Article,
                    saved: summary.news_saved,
                    source,
                })?;
        }

        info!(
            news = summary.news_saved,
            articles = summary.articles_saved,
            "Batch persisted"
        );
        Ok(summary)
    }
}

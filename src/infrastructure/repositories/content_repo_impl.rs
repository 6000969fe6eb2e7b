// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::domain::models::content::{ArticleItem, NewsItem};
use crate::domain::repositories::content_repository::ContentRepository;
use crate::infrastructure::database::entities::{articles, news};
use crate::utils::errors::RepositoryError;
use async_trait::async_trait;
use sea_orm::*;
use std::sync::Arc;

/// 内容仓库实现
///
/// 每种内容一条多行 INSERT，不做去重
pub struct ContentRepositoryImpl {
    db: Arc<DatabaseConnection>,
}

impl ContentRepositoryImpl {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn news_model(item: &NewsItem) -> news::ActiveModel {
    news::ActiveModel {
        id: Set(item.id),
        title: Set(item.title.clone()),
        summary: Set(item.summary.clone()),
        source: Set(item.source.clone()),
        category: Set(item.category.to_string()),
        image_url: Set(item.image_url.clone()),
        url: Set(item.url.clone()),
        created_at: Set(item.created_at.into()),
    }
}

fn article_model(item: &ArticleItem) -> articles::ActiveModel {
    articles::ActiveModel {
        id: Set(item.id),
        title_en: Set(item.title_en.clone()),
        title_zh: Set(item.title_zh.clone()),
        content_en: Set(item.content_en.clone()),
        content_zh: Set(item.content_zh.clone()),
        category: Set(item.category.to_string()),
        source: Set(item.source.clone()),
        image_url: Set(item.image_url.clone()),
        source_url: Set(item.source_url.clone()),
        created_at: Set(item.created_at.into()),
    }
}

#[async_trait]
impl ContentRepository for ContentRepositoryImpl {
    async fn create_many_news(&self, items: &[NewsItem]) -> Result<u64, RepositoryError> {
        if items.is_empty() {
            return Ok(0);
        }

        let rows = news::Entity::insert_many(items.iter().map(news_model))
            .exec_without_returning(self.db.as_ref())
            .await?;
        Ok(rows)
    }

    async fn create_many_articles(&self, items: &[ArticleItem]) -> Result<u64, RepositoryError> {
        if items.is_empty() {
            return Ok(0);
        }

        let rows = articles::Entity::insert_many(items.iter().map(article_model))
            .exec_without_returning(self.db.as_ref())
            .await?;
        Ok(rows)
    }
}

#[cfg(test)]
#[path = "content_repo_impl_test.rs"]
mod tests;

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

use crate::domain::models::crawler_log::{CrawlerLogEntry, RunSource, RunStatus};
use crate::domain::repositories::crawler_log_repository::CrawlerLogRepository;
use crate::infrastructure::database::entities::crawler_logs;
use crate::utils::errors::RepositoryError;
use async_trait::async_trait;
use sea_orm::*;
use std::sync::Arc;

/// 采集日志仓库实现
pub struct CrawlerLogRepositoryImpl {
    db: Arc<DatabaseConnection>,
}

impl CrawlerLogRepositoryImpl {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

impl TryFrom<crawler_logs::Model> for CrawlerLogEntry {
    type Error = RepositoryError;

    fn try_from(m: crawler_logs::Model) -> Result<Self, Self::Error> {
        let source = m
            .source
            .parse::<RunSource>()
            .map_err(|e| RepositoryError::InvalidData(e.to_string()))?;
        let status = m
            .status
            .parse::<RunStatus>()
            .map_err(|e| RepositoryError::InvalidData(e.to_string()))?;
        let article_count = u32::try_from(m.article_count).map_err(|_| {
            RepositoryError::InvalidData(format!("negative article count: {}", m.article_count))
        })?;

        Ok(CrawlerLogEntry {
            id: m.id,
            source,
            status,
            article_count,
            error: m.error,
            started_at: m.started_at.into(),
            completed_at: m.completed_at.into(),
        })
    }
}

#[async_trait]
impl CrawlerLogRepository for CrawlerLogRepositoryImpl {
    async fn create(&self, entry: &CrawlerLogEntry) -> Result<CrawlerLogEntry, RepositoryError> {
        let model = crawler_logs::ActiveModel {
            id: Set(entry.id),
            source: Set(entry.source.to_string()),
            status: Set(entry.status.to_string()),
            article_count: Set(i32::try_from(entry.article_count).unwrap_or(i32::MAX)),
            error: Set(entry.error.clone()),
            started_at: Set(entry.started_at.into()),
            completed_at: Set(entry.completed_at.into()),
        };

        model.insert(self.db.as_ref()).await?;
        Ok(entry.clone())
    }

    async fn find_recent(&self, limit: u64) -> Result<Vec<CrawlerLogEntry>, RepositoryError> {
        crawler_logs::Entity::find()
            .order_by_desc(crawler_logs::Column::StartedAt)
            .limit(limit)
            .all(self.db.as_ref())
            .await?
            .into_iter()
            .map(CrawlerLogEntry::try_from)
            .collect()
    }
}

#[cfg(test)]
#[path = "crawler_log_repo_impl_test.rs"]
mod tests;

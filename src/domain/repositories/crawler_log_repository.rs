// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::crawler_log::CrawlerLogEntry;
use crate::utils::errors::RepositoryError;
use async_trait::async_trait;

/// 采集日志仓库特质
///
/// 只追加：没有更新和删除接口
#[async_trait]
pub trait CrawlerLogRepository: Send + Sync {
    /// 追加一条日志
    async fn create(&self, entry: &CrawlerLogEntry) -> Result<CrawlerLogEntry, RepositoryError>;
    /// 按开始时间倒序返回最近的日志
    async fn find_recent(&self, limit: u64) -> Result<Vec<CrawlerLogEntry>, RepositoryError>;
}

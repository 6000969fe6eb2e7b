// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::content::{ArticleItem, NewsItem};
use crate::utils::errors::RepositoryError;
use async_trait::async_trait;

/// 内容仓库特质
///
/// 每个方法对应一次批量写入，要么整体成功要么返回错误
#[async_trait]
pub trait ContentRepository: Send + Sync {
    /// 批量写入新闻，返回写入行数
    async fn create_many_news(&self, items: &[NewsItem]) -> Result<u64, RepositoryError>;
    /// 批量写入长文，返回写入行数
    async fn create_many_articles(&self, items: &[ArticleItem]) -> Result<u64, RepositoryError>;
}

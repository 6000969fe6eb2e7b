// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::raw_record::{ContentCategory, RawRecord};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 新闻条目
///
/// 只由写入器从 [`RawRecord`] 创建，本子系统从不更新或删除
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsItem {
    pub id: Uuid,
    pub title: String,
    pub summary: String,
    pub source: String,
    pub category: ContentCategory,
    pub image_url: Option<String>,
    pub url: String,
    pub created_at: DateTime<Utc>,
}

impl From<&RawRecord> for NewsItem {
    fn from(record: &RawRecord) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: record.title.clone(),
            summary: record.body.clone(),
            source: record.source_name.clone(),
            category: record.category,
            image_url: record.image_url.clone(),
            url: record.canonical_url.clone(),
            created_at: Utc::now(),
        }
    }
}

/// 长文条目
///
/// 双语字段目前由单语数据源直接透传：`title_zh == title_en`，
/// `content_zh == content_en`。翻译步骤尚未确定，这里不做任何转换。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleItem {
    pub id: Uuid,
    pub title_en: String,
    pub title_zh: String,
    pub content_en: String,
    pub content_zh: String,
    pub category: ContentCategory,
    pub source: String,
    pub image_url: Option<String>,
    pub source_url: String,
    pub created_at: DateTime<Utc>,
}

impl From<&RawRecord> for ArticleItem {
    fn from(record: &RawRecord) -> Self {
        Self {
            id: Uuid::new_v4(),
            title_en: record.title.clone(),
            title_zh: record.title.clone(),
            content_en: record.body.clone(),
            content_zh: record.body.clone(),
            category: record.category,
            source: record.source_name.clone(),
            image_url: record.image_url.clone(),
            source_url: record.canonical_url.clone(),
            created_at: Utc::now(),
        }
    }
}

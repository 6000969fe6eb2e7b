// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::raw_record::{ContentCategory, ContentKind, RawRecord};
use serde::Serialize;

/// 一次采集运行的规整结果
///
/// 新闻与长文两个互不相交的有序序列
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NormalizedBatch {
    pub news_items: Vec<RawRecord>,
    pub article_items: Vec<RawRecord>,
}

impl NormalizedBatch {
    pub fn new(news_items: Vec<RawRecord>, article_items: Vec<RawRecord>) -> Self {
        Self {
            news_items,
            article_items,
        }
    }

    /// 按内容种类追加记录
    pub fn extend(&mut self, kind: ContentKind, records: Vec<RawRecord>) {
        match kind {
            ContentKind::News => self.news_items.extend(records),
            ContentKind::Article => self.article_items.extend(records),
        }
    }

    pub fn len(&self) -> usize {
        self.news_items.len() + self.article_items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.news_items.is_empty() && self.article_items.is_empty()
    }
}

/// 单个数据源在一次运行中的采集摘要
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceSummary {
    pub name: String,
    pub kind: ContentKind,
    pub category: ContentCategory,
    /// 过滤前的记录数
    pub crawled: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

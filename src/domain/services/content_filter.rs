// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::batch::NormalizedBatch;
use crate::domain::models::raw_record::RawRecord;

/// 内置过滤词表：推广和付费墙相关用语
pub const DEFAULT_DENYLIST: &[&str] = &[
    "VIP",
    "会员",
    "付费",
    "广告",
    "订阅",
    "推广",
    "sponsored",
    "advertisement",
    "subscribe",
    "paywall",
    "premium content",
];

/// 内容过滤器
///
/// 记录的文本中包含任一过滤词（忽略大小写的子串匹配）即被拒绝。
/// 这是粗粒度的适宜性门槛，不做拼写、语法或去重检查。
#[derive(Debug, Clone)]
pub struct ContentFilter {
    terms: Vec<String>,
}

impl Default for ContentFilter {
    fn default() -> Self {
        Self::new(DEFAULT_DENYLIST.iter().copied())
    }
}

impl ContentFilter {
    /// 创建过滤器，空白词条被忽略
    pub fn new<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let terms = terms
            .into_iter()
            .map(|t| t.as_ref().trim().to_lowercase())
            .filter(|t| !t.is_empty())
            .collect();
        Self { terms }
    }

    /// 记录是否可以入库
    pub fn admit(&self, record: &RawRecord) -> bool {
        let text = record.searchable_text().to_lowercase();
        !self.terms.iter().any(|term| text.contains(term.as_str()))
    }

    /// 过滤一组记录，保持原有顺序
    pub fn filter_records(&self, records: Vec<RawRecord>) -> Vec<RawRecord> {
        records.into_iter().filter(|r| self.admit(r)).collect()
    }

    /// 过滤整个批次
    pub fn filter_batch(&self, batch: NormalizedBatch) -> NormalizedBatch {
        NormalizedBatch::new(
            self.filter_records(batch.news_items),
            self.filter_records(batch.article_items),
        )
    }
}

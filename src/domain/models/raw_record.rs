// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use std::fmt;

/// 内容分类
///
/// 决定内容在阅读库中归入哪个栏目
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentCategory {
    /// 时事新闻
    News,
    /// 经典古籍
    Classics,
    /// 文化
    Culture,
    /// 历史
    History,
}

impl fmt::Display for ContentCategory {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ContentCategory::News => write!(f, "news"),
            ContentCategory::Classics => write!(f, "classics"),
            ContentCategory::Culture => write!(f, "culture"),
            ContentCategory::History => write!(f, "history"),
        }
    }
}

/// 内容种类
///
/// 由产生记录的数据源决定，对应两张内容表
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    /// 新闻条目，写入 news 表
    News,
    /// 长文，写入 articles 表
    Article,
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ContentKind::News => write!(f, "news"),
            ContentKind::Article => write!(f, "article"),
        }
    }
}

/// 原始采集记录
///
/// 由数据源适配器产生，只在一次触发调用内存在，不直接持久化
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawRecord {
    /// 标题
    pub title: String,
    /// 正文摘要，可能为空
    pub body: String,
    /// 数据源名称
    pub source_name: String,
    /// 分类
    pub category: ContentCategory,
    /// 配图地址
    pub image_url: Option<String>,
    /// 原文绝对地址
    pub canonical_url: String,
}

impl RawRecord {
    /// 用于内容过滤的文本表示
    ///
    /// 按行拼接所有字段值
    pub fn searchable_text(&self) -> String {
        let mut parts = vec![
            self.title.as_str(),
            self.body.as_str(),
            self.source_name.as_str(),
        ];
        if let Some(image) = &self.image_url {
            parts.push(image.as_str());
        }
        parts.push(self.canonical_url.as_str());
        parts.join("\n")
    }
}

// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::raw_record::{ContentCategory, ContentKind};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// 数据源配置
///
/// 可以写在配置文件的 `[[crawler.sources]]` 中，也可以使用内置列表
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceConfig {
    /// 数据源名称
    pub name: String,
    /// 站点根地址，相对链接据此解析
    pub base_url: String,
    /// 列表页地址，缺省时使用 `base_url`
    #[serde(default)]
    pub listing_url: Option<String>,
    /// 写入新闻表还是长文表
    pub kind: ContentKind,
    /// 内容分类
    pub category: ContentCategory,
    /// 抽取规则
    pub rules: ExtractionRules,
    /// 单个数据源最多保留的记录数，缺省时使用全局设置
    #[serde(default)]
    pub max_items: Option<usize>,
}

impl SourceConfig {
    pub fn listing_url(&self) -> &str {
        self.listing_url.as_deref().unwrap_or(&self.base_url)
    }
}

/// 声明式抽取规则
///
/// `item` 匹配列表中的每个候选元素，其余选择器在候选元素内部查询。
/// `title`/`link` 缺省时取候选元素自身。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractionRules {
    pub item: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default = "default_link_attr")]
    pub link_attr: String,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default = "default_image_attr")]
    pub image_attr: String,
}

impl ExtractionRules {
    /// 只指定候选元素选择器的规则
    pub fn new(item: impl Into<String>) -> Self {
        Self {
            item: item.into(),
            title: None,
            link: None,
            link_attr: default_link_attr(),
            body: None,
            image: None,
            image_attr: default_image_attr(),
        }
    }

    pub fn title(mut self, selector: impl Into<String>) -> Self {
        self.title = Some(selector.into());
        self
    }

    pub fn link(mut self, selector: impl Into<String>) -> Self {
        self.link = Some(selector.into());
        self
    }

    pub fn body(mut self, selector: impl Into<String>) -> Self {
        self.body = Some(selector.into());
        self
    }

    pub fn image(mut self, selector: impl Into<String>) -> Self {
        self.image = Some(selector.into());
        self
    }

    pub fn image_attr(mut self, attr: impl Into<String>) -> Self {
        self.image_attr = attr.into();
        self
    }
}

fn default_link_attr() -> String {
    "href".to_string()
}

fn default_image_attr() -> String {
    "src".to_string()
}

/// 抓取请求参数，所有数据源共用
#[derive(Debug, Clone)]
pub struct FetchOptions {
    /// 列表页请求超时
    pub timeout: Duration,
    /// robots.txt 匹配使用的爬虫标识
    pub robots_agent: String,
    /// 单个数据源默认最多保留的记录数
    pub max_items: usize,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(10),
            robots_agent: "InkWordsBot".to_string(),
            max_items: 20,
        }
    }
}

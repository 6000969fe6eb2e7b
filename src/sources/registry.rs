// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::raw_record::{ContentCategory, ContentKind};
use crate::sources::config::{ExtractionRules, SourceConfig};

/// 内置数据源列表
///
/// 配置文件没有声明 `crawler.sources` 时使用。每个站点一份抽取映射，
/// 站点改版时需要同步更新这里的选择器。
pub fn default_sources() -> Vec<SourceConfig> {
    vec![
        SourceConfig {
            name: "China Daily".to_string(),
            base_url: "https://www.chinadaily.com.cn".to_string(),
            listing_url: Some("https://www.chinadaily.com.cn/china".to_string()),
            kind: ContentKind::News,
            category: ContentCategory::News,
            rules: ExtractionRules::new("div.mb10.tw3_01_2")
                .title("h4 a")
                .link("h4 a")
                .body("p")
                .image("img"),
            max_items: None,
        },
        SourceConfig {
            name: "CGTN Culture".to_string(),
            base_url: "https://news.cgtn.com".to_string(),
            listing_url: Some("https://www.cgtn.com/culture".to_string()),
            kind: ContentKind::News,
            category: ContentCategory::News,
            rules: ExtractionRules::new("div.cg-newsWrapper")
                .title("h4 a")
                .link("h4 a")
                .body("div.cg-content-description")
                .image("img")
                .image_attr("data-original"),
            max_items: None,
        },
        SourceConfig {
            name: "China Culture Classics".to_string(),
            base_url: "http://en.chinaculture.org".to_string(),
            listing_url: Some("http://en.chinaculture.org/classics/node_1234.htm".to_string()),
            kind: ContentKind::Article,
            category: ContentCategory::Classics,
            rules: ExtractionRules::new("div.list ul li")
                .title("a")
                .link("a")
                .body("span.intro"),
            max_items: None,
        },
        SourceConfig {
            name: "The World of Chinese".to_string(),
            base_url: "https://www.theworldofchinese.com".to_string(),
            listing_url: Some(
                "https://www.theworldofchinese.com/category/culture/".to_string(),
            ),
            kind: ContentKind::Article,
            category: ContentCategory::Culture,
            rules: ExtractionRules::new("article")
                .title("h2.entry-title a")
                .link("h2.entry-title a")
                .body("div.entry-summary p")
                .image("img"),
            max_items: None,
        },
        SourceConfig {
            name: "China Daily History".to_string(),
            base_url: "https://www.chinadaily.com.cn".to_string(),
            listing_url: Some("https://www.chinadaily.com.cn/culture/history".to_string()),
            kind: ContentKind::Article,
            category: ContentCategory::History,
            rules: ExtractionRules::new("div.mb10.tw3_01_2")
                .title("h4 a")
                .link("h4 a")
                .body("p")
                .image("img"),
            max_items: None,
        },
    ]
}

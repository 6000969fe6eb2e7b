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

use crate::domain::models::raw_record::{ContentCategory, ContentKind, RawRecord};
use crate::infrastructure::metrics;
use crate::sources::config::{FetchOptions, SourceConfig};
use crate::sources::traits::{SourceAdapter, SourceError, SourceOutcome};
use crate::utils::errors::CrawlError;
use crate::utils::robots::RobotsCheckerTrait;
use crate::utils::text::element_text;
use crate::utils::url_utils::resolve_link;
use async_trait::async_trait;
use reqwest::header::LOCATION;
use reqwest::Client;
use scraper::{ElementRef, Html, Selector};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};
use url::Url;

/// 编译后的抽取规则
struct CompiledRules {
    item: Selector,
    title: Option<Selector>,
    link: Option<Selector>,
    link_attr: String,
    body: Option<Selector>,
    image: Option<Selector>,
    image_attr: String,
}

fn compile(selector: &str) -> Result<Selector, SourceError> {
    Selector::parse(selector).map_err(|e| SourceError::InvalidSelector {
        selector: selector.to_string(),
        message: format!("{:?}", e),
    })
}

fn compile_opt(selector: Option<&String>) -> Result<Option<Selector>, SourceError> {
    selector.map(|s| compile(s)).transpose()
}

/// 单次抓取最多跟随的重定向次数
const MAX_REDIRECTS: usize = 5;

fn parse_url(url: &str) -> Result<Url, SourceError> {
    Url::parse(url).map_err(|e| SourceError::InvalidUrl {
        url: url.to_string(),
        message: e.to_string(),
    })
}

/// 基于 CSS 选择器的列表页适配器
///
/// 每个已知站点对应一份 [`SourceConfig`]，抓取逻辑共用。
/// 客户端应关闭自动重定向，由适配器逐跳检查 robots.txt 后再跟随。
pub struct HtmlSourceAdapter {
    config: SourceConfig,
    listing_url: Url,
    rules: CompiledRules,
    client: Client,
    options: FetchOptions,
    robots: Option<Arc<dyn RobotsCheckerTrait>>,
}

impl HtmlSourceAdapter {
    /// 创建适配器
    ///
    /// 选择器和地址在这里校验，配置错误不会拖到抓取时才暴露
    ///
    /// # 参数
    ///
    /// * `config` - 数据源配置
    /// * `client` - 共享的HTTP客户端（已设置 User-Agent）
    /// * `options` - 抓取参数
    /// * `robots` - robots.txt 检查器，`None` 表示不检查
    pub fn new(
        config: SourceConfig,
        client: Client,
        options: FetchOptions,
        robots: Option<Arc<dyn RobotsCheckerTrait>>,
    ) -> Result<Self, SourceError> {
        parse_url(&config.base_url)?;
        let listing_url = parse_url(config.listing_url())?;

        let rules = CompiledRules {
            item: compile(&config.rules.item)?,
            title: compile_opt(config.rules.title.as_ref())?,
            link: compile_opt(config.rules.link.as_ref())?,
            link_attr: config.rules.link_attr.clone(),
            body: compile_opt(config.rules.body.as_ref())?,
            image: compile_opt(config.rules.image.as_ref())?,
            image_attr: config.rules.image_attr.clone(),
        };

        Ok(Self {
            config,
            listing_url,
            rules,
            client,
            options,
            robots,
        })
    }

    fn max_items(&self) -> usize {
        self.config.max_items.unwrap_or(self.options.max_items)
    }

    /// 从列表页HTML中抽取记录，相对链接按配置的列表页地址解析
    pub fn parse_listing(&self, html: &str) -> Vec<RawRecord> {
        self.parse_page(html, &self.listing_url)
    }

    /// 从 `page_url` 返回的HTML中抽取记录
    ///
    /// 缺少标题或链接的候选元素被跳过
    fn parse_page(&self, html: &str, page_url: &Url) -> Vec<RawRecord> {
        let document = Html::parse_document(html);
        let mut records = Vec::new();

        for element in document.select(&self.rules.item) {
            if records.len() >= self.max_items() {
                break;
            }
            match self.extract(&element, page_url) {
                Some(record) => records.push(record),
                None => debug!(source = %self.config.name, "Skipping incomplete listing entry"),
            }
        }

        records
    }

    fn extract(&self, element: &ElementRef<'_>, page_url: &Url) -> Option<RawRecord> {
        let title = match &self.rules.title {
            Some(selector) => element.select(selector).next().map(|e| element_text(&e))?,
            None => element_text(element),
        };
        if title.is_empty() {
            return None;
        }

        let href = match &self.rules.link {
            Some(selector) => element
                .select(selector)
                .next()
                .and_then(|e| e.value().attr(&self.rules.link_attr))?,
            None => element.value().attr(&self.rules.link_attr)?,
        };
        let canonical_url = resolve_link(page_url, href)?;

        let body = self
            .rules
            .body
            .as_ref()
            .and_then(|selector| element.select(selector).next())
            .map(|e| element_text(&e))
            .unwrap_or_default();

        let image_url = self
            .rules
            .image
            .as_ref()
            .and_then(|selector| element.select(selector).next())
            .and_then(|e| e.value().attr(&self.rules.image_attr))
            .and_then(|src| resolve_link(page_url, src));

        Some(RawRecord {
            title,
            body,
            source_name: self.config.name.clone(),
            category: self.config.category,
            image_url,
            canonical_url,
        })
    }

    async fn check_robots(&self, url: &Url) -> Result<(), SourceError> {
        let Some(robots) = &self.robots else {
            return Ok(());
        };

        let url = url.as_str();
        match robots.is_allowed(url, &self.options.robots_agent).await {
            Ok(true) => Ok(()),
            Ok(false) => Err(SourceError::DisallowedByRobots(url.to_string())),
            Err(e) => Err(SourceError::RobotsUnavailable(e.to_string())),
        }
    }

    async fn try_fetch(&self) -> Result<Vec<RawRecord>, SourceError> {
        let mut url = self.listing_url.clone();

        for _ in 0..=MAX_REDIRECTS {
            self.check_robots(&url).await?;

            let response = self
                .client
                .get(url.clone())
                .timeout(self.options.timeout)
                .send()
                .await?;

            // 客户端自行跟随了重定向时，最终地址同样要过 robots.txt
            let page_url = response.url().clone();
            if page_url != url {
                self.check_robots(&page_url).await?;
            }

            let status = response.status();
            if status.is_redirection() {
                let location = response
                    .headers()
                    .get(LOCATION)
                    .and_then(|value| value.to_str().ok())
                    .ok_or_else(|| SourceError::UnexpectedStatus {
                        status: status.as_u16(),
                        url: page_url.to_string(),
                    })?;
                url = page_url.join(location).map_err(|e| SourceError::InvalidUrl {
                    url: location.to_string(),
                    message: e.to_string(),
                })?;
                debug!(source = %self.config.name, to = %url, "Following redirect");
                continue;
            }

            if !status.is_success() {
                return Err(SourceError::UnexpectedStatus {
                    status: status.as_u16(),
                    url: page_url.to_string(),
                });
            }

            let html = response.text().await?;
            return Ok(self.parse_page(&html, &page_url));
        }

        Err(SourceError::TooManyRedirects(self.listing_url.to_string()))
    }
}

#[async_trait]
impl SourceAdapter for HtmlSourceAdapter {
    fn name(&self) -> &str {
        &self.config.name
    }

    fn kind(&self) -> ContentKind {
        self.config.kind
    }

    fn category(&self) -> ContentCategory {
        self.config.category
    }

    async fn fetch(&self) -> Result<SourceOutcome, CrawlError> {
        let start = Instant::now();
        match self.try_fetch().await {
            Ok(records) => {
                info!(
                    source = %self.config.name,
                    count = records.len(),
                    elapsed_ms = start.elapsed().as_millis() as u64,
                    "Fetched source listing"
                );
                Ok(SourceOutcome::ok(records))
            }
            Err(e) => {
                warn!(source = %self.config.name, error = %e, "Source fetch failed");
                metrics::record_source_failure(&self.config.name);
                Ok(SourceOutcome::failed(e.to_string()))
            }
        }
    }
}

#[cfg(test)]
#[path = "html_adapter_test.rs"]
mod tests;

// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::CrawlerSettings;
use crate::utils::robots::{RobotsChecker, RobotsCheckerTrait};
use std::sync::Arc;
use tracing::info;

/// 数据源模块
///
/// 每个外部站点一个适配器：抓取列表页并按声明式规则抽取原始记录
pub mod config;
pub mod html_adapter;
pub mod registry;
pub mod traits;

use self::config::FetchOptions;
use self::html_adapter::HtmlSourceAdapter;
use self::traits::{SourceAdapter, SourceError};

/// 构建所有数据源共用的HTTP客户端
///
/// 不自动跟随重定向：适配器在每一跳之前检查 robots.txt
pub fn build_http_client(settings: &CrawlerSettings) -> Result<reqwest::Client, SourceError> {
    let client = reqwest::Client::builder()
        .user_agent(settings.user_agent.as_str())
        .timeout(settings.request_timeout())
        .redirect(reqwest::redirect::Policy::none())
        .build()?;
    Ok(client)
}

/// 按配置构建适配器列表
///
/// 配置中没有声明数据源时使用 [`registry::default_sources`]
pub fn build_adapters(
    settings: &CrawlerSettings,
    client: reqwest::Client,
) -> Result<Vec<Arc<dyn SourceAdapter>>, SourceError> {
    let robots: Option<Arc<dyn RobotsCheckerTrait>> = if settings.respect_robots {
        // robots.txt 本身常被重定向到 https 或主域名，单独用默认策略的客户端
        let robots_client = reqwest::Client::builder()
            .user_agent(settings.user_agent.as_str())
            .build()?;
        Some(Arc::new(RobotsChecker::new(
            robots_client,
            settings.request_timeout(),
        )))
    } else {
        None
    };

    let options = FetchOptions {
        timeout: settings.request_timeout(),
        robots_agent: settings.robots_agent.clone(),
        max_items: settings.max_items_per_source,
    };

    let configs = if settings.sources.is_empty() {
        registry::default_sources()
    } else {
        settings.sources.clone()
    };

    let mut adapters: Vec<Arc<dyn SourceAdapter>> = Vec::with_capacity(configs.len());
    for config in configs {
        let adapter =
            HtmlSourceAdapter::new(config, client.clone(), options.clone(), robots.clone())?;
        adapters.push(Arc::new(adapter));
    }

    info!(count = adapters.len(), "Source adapters registered");
    Ok(adapters)
}

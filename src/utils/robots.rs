// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use anyhow::Result;
use async_trait::async_trait;
use parking_lot::Mutex;
use reqwest::Client;
use robotstxt::DefaultMatcher;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use url::Url;

use crate::utils::url_utils::origin_of;

const ROBOTS_CACHE_TTL: Duration = Duration::from_secs(3600);

/// Robots.txt检查器接口
#[async_trait]
pub trait RobotsCheckerTrait: Send + Sync {
    /// 检查URL是否被允许访问
    ///
    /// 无法获取 robots.txt 时返回错误，调用方据此拒绝访问
    async fn is_allowed(&self, url_str: &str, user_agent: &str) -> Result<bool>;
}

/// 缓存的Robots.txt内容
#[derive(Clone)]
struct CachedRobots {
    /// 内容
    content: String,

    /// 过期时间
    expires_at: Instant,
}

/// Robots.txt检查器
///
/// 按站点缓存 robots.txt 一小时。404 和其他 4xx 视为没有限制，
/// 网络错误和 5xx 返回错误。
#[derive(Clone)]
pub struct RobotsChecker {
    /// HTTP客户端
    client: Client,

    /// 内存缓存
    memory_cache: Arc<Mutex<HashMap<String, CachedRobots>>>,

    /// 单次请求超时
    timeout: Duration,
}

#[async_trait]
impl RobotsCheckerTrait for RobotsChecker {
    async fn is_allowed(&self, url_str: &str, user_agent: &str) -> Result<bool> {
        let content = self.get_robots_content(url_str).await?;
        let mut matcher = DefaultMatcher::default();
        Ok(matcher.one_agent_allowed_by_robots(&content, user_agent, url_str))
    }
}

impl RobotsChecker {
    /// 创建新的Robots检查器实例
    ///
    /// # 参数
    ///
    /// * `client` - 共享的HTTP客户端
    /// * `timeout` - 获取 robots.txt 的超时时间
    pub fn new(client: Client, timeout: Duration) -> Self {
        Self {
            client,
            memory_cache: Arc::new(Mutex::new(HashMap::new())),
            timeout,
        }
    }

    /// 获取Robots.txt内容（带缓存）
    async fn get_robots_content(&self, url_str: &str) -> Result<String> {
        let url = Url::parse(url_str)?;
        if url.host_str().is_none() {
            anyhow::bail!("URL has no host: {}", url_str);
        }
        let robots_url = format!("{}/robots.txt", origin_of(&url));

        {
            let mut cache = self.memory_cache.lock();
            if let Some(cached) = cache.get(&robots_url) {
                if cached.expires_at > Instant::now() {
                    return Ok(cached.content.clone());
                }
                cache.remove(&robots_url);
            }
        }

        let response = self
            .client
            .get(&robots_url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| anyhow::anyhow!("Failed to fetch {}: {}", robots_url, e))?;

        let status = response.status();
        let content = if status.is_success() {
            response.text().await?
        } else if status.is_client_error() {
            // 404 等表示站点没有 robots.txt
            String::new()
        } else {
            anyhow::bail!("Unexpected status {} for {}", status, robots_url);
        };

        self.memory_cache.lock().insert(
            robots_url,
            CachedRobots {
                content: content.clone(),
                expires_at: Instant::now() + ROBOTS_CACHE_TTL,
            },
        );

        Ok(content)
    }
}

#[cfg(test)]
#[path = "robots_test.rs"]
mod tests;

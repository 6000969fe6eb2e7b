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

use crate::domain::services::content_filter::DEFAULT_DENYLIST;
use crate::sources::config::SourceConfig;
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

/// 两个数据源之间的最小间隔
pub const MIN_POLITENESS_DELAY: Duration = Duration::from_secs(1);

const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// 应用程序配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// 数据库配置
    pub database: DatabaseSettings,
    /// 服务器配置
    pub server: ServerSettings,
    /// 指标配置
    pub metrics: MetricsSettings,
    /// 采集配置
    pub crawler: CrawlerSettings,
}

/// 数据库配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    /// 数据库连接URL
    pub url: String,
    /// 最大连接数
    pub max_connections: Option<u32>,
    /// 最小连接数
    pub min_connections: Option<u32>,
    /// 连接超时时间（秒）
    pub connect_timeout: Option<u64>,
    /// 空闲连接超时时间（秒）
    pub idle_timeout: Option<u64>,
}

/// 服务器配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    /// 服务器监听主机地址
    pub host: String,
    /// 服务器监听端口
    pub port: u16,
}

/// 指标配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct MetricsSettings {
    /// 是否启动 Prometheus 导出
    pub enabled: bool,
    /// 导出监听地址
    pub listen: String,
}

/// 采集配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct CrawlerSettings {
    /// 定时触发使用的共享密钥，未设置时定时接口拒绝所有请求
    pub cron_secret: Option<String>,
    /// 请求列表页使用的浏览器 User-Agent
    pub user_agent: String,
    /// robots.txt 匹配使用的爬虫标识
    pub robots_agent: String,
    /// 单个数据源请求超时（秒）
    pub request_timeout_secs: u64,
    /// 数据源之间的间隔（毫秒），低于 1000 按 1000 处理
    pub politeness_delay_ms: u64,
    /// 是否遵守 robots.txt
    pub respect_robots: bool,
    /// 单个数据源最多保留的记录数
    pub max_items_per_source: usize,
    /// 内容过滤词表
    #[serde(default = "default_denylist")]
    pub denylist: Vec<String>,
    /// 数据源列表，为空时使用内置列表
    #[serde(default)]
    pub sources: Vec<SourceConfig>,
}

fn default_denylist() -> Vec<String> {
    DEFAULT_DENYLIST.iter().map(|s| s.to_string()).collect()
}

impl CrawlerSettings {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn politeness_delay(&self) -> Duration {
        Duration::from_millis(self.politeness_delay_ms).max(MIN_POLITENESS_DELAY)
    }
}

/// 配置校验错误
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error(transparent)]
    Load(#[from] ConfigError),
    #[error("invalid setting {key}: {message}")]
    Invalid { key: String, message: String },
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 依次叠加：内置默认值、`config/default.toml`、`config/{APP_ENVIRONMENT}.toml`、
    /// `INKWORDS__*` 环境变量，最后是 `CRON_SECRET`
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载并通过校验的配置
    /// * `Err(SettingsError)` - 配置加载或校验失败
    pub fn new() -> Result<Self, SettingsError> {
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "development".to_string());
        let builder = Self::defaults()?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::with_prefix("INKWORDS").separator("__"))
            .set_override_option("crawler.cron_secret", std::env::var("CRON_SECRET").ok())?;

        let settings: Settings = builder.build()?.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    /// 内置默认值
    pub fn defaults() -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            .set_default("database.url", "sqlite://inkwords.db?mode=rwc")?
            .set_default("database.max_connections", 10)?
            .set_default("database.min_connections", 1)?
            .set_default("database.connect_timeout", 10)?
            .set_default("database.idle_timeout", 300)?
            .set_default("metrics.enabled", true)?
            .set_default("metrics.listen", "0.0.0.0:9000")?
            .set_default("crawler.user_agent", DEFAULT_USER_AGENT)?
            .set_default("crawler.robots_agent", "InkWordsBot")?
            .set_default("crawler.request_timeout_secs", 10)?
            .set_default("crawler.politeness_delay_ms", 1000)?
            .set_default("crawler.respect_robots", true)?
            .set_default("crawler.max_items_per_source", 20)
    }

    /// 校验配置取值
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.crawler.request_timeout_secs == 0 {
            return Err(SettingsError::Invalid {
                key: "crawler.request_timeout_secs".to_string(),
                message: "must be greater than zero".to_string(),
            });
        }
        if self.crawler.max_items_per_source == 0 {
            return Err(SettingsError::Invalid {
                key: "crawler.max_items_per_source".to_string(),
                message: "must be greater than zero".to_string(),
            });
        }
        for source in &self.crawler.sources {
            if source.name.trim().is_empty() || source.base_url.trim().is_empty() {
                return Err(SettingsError::Invalid {
                    key: "crawler.sources".to_string(),
                    message: "every source needs a name and a base_url".to_string(),
                });
            }
        }
        if matches!(&self.crawler.cron_secret, Some(s) if s.is_empty()) {
            return Err(SettingsError::Invalid {
                key: "crawler.cron_secret".to_string(),
                message: "must not be empty when set".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "settings_test.rs"]
mod tests;

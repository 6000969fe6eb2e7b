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
use crate::utils::errors::CrawlError;
use async_trait::async_trait;
use thiserror::Error;

/// 单个数据源的错误类型
///
/// 在适配器内部被捕获并记录，不会中断整次运行
#[derive(Error, Debug)]
pub enum SourceError {
    /// 请求失败
    #[error("Request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),
    /// 非 2xx 响应
    #[error("Unexpected status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },
    /// robots.txt 不允许访问
    #[error("Disallowed by robots.txt: {0}")]
    DisallowedByRobots(String),
    /// robots.txt 检查失败
    #[error("robots.txt check failed: {0}")]
    RobotsUnavailable(String),
    /// 重定向次数过多
    #[error("Too many redirects from {0}")]
    TooManyRedirects(String),
    /// 无效的地址
    #[error("Invalid URL {url}: {message}")]
    InvalidUrl { url: String, message: String },
    /// 无效的 CSS 选择器
    #[error("Invalid selector `{selector}`: {message}")]
    InvalidSelector { selector: String, message: String },
}

/// 一次数据源抓取的结果
///
/// 抓取失败时 `records` 为空，`error` 记录原因
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SourceOutcome {
    pub records: Vec<RawRecord>,
    pub error: Option<String>,
}

impl SourceOutcome {
    pub fn ok(records: Vec<RawRecord>) -> Self {
        Self {
            records,
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            records: Vec::new(),
            error: Some(error.into()),
        }
    }
}

/// 数据源适配器特质
///
/// 每个外部站点一个实现。适配器必须自行处理网络和解析错误，
/// 返回空结果；只有无法恢复的情况才返回 [`CrawlError`]，这会终止整次运行。
#[async_trait]
pub trait SourceAdapter: Send + Sync {
    /// 数据源名称
    fn name(&self) -> &str;

    /// 记录写入哪张内容表
    fn kind(&self) -> ContentKind;

    /// 内容分类
    fn category(&self) -> ContentCategory;

    /// 抓取列表页并抽取记录
    async fn fetch(&self) -> Result<SourceOutcome, CrawlError>;
}

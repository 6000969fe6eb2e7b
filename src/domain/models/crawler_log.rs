// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

/// 触发来源
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunSource {
    /// 手动触发
    Manual,
    /// 定时任务触发（需要密钥）
    Scheduled,
    /// 调试触发
    Test,
}

impl RunSource {
    /// 该触发方式是否在写入前执行内容过滤
    pub fn applies_filter(&self) -> bool {
        !matches!(self, RunSource::Manual)
    }
}

impl fmt::Display for RunSource {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RunSource::Manual => write!(f, "manual"),
            RunSource::Scheduled => write!(f, "scheduled"),
            RunSource::Test => write!(f, "test"),
        }
    }
}

/// 运行结果状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunStatus {
    Success,
    Failed,
}

impl fmt::Display for RunStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RunStatus::Success => write!(f, "success"),
            RunStatus::Failed => write!(f, "failed"),
        }
    }
}

#[derive(Debug, Error)]
#[error("invalid {field}: {value}")]
pub struct ParseLogFieldError {
    field: &'static str,
    value: String,
}

impl FromStr for RunSource {
    type Err = ParseLogFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "manual" => Ok(RunSource::Manual),
            "scheduled" => Ok(RunSource::Scheduled),
            "test" => Ok(RunSource::Test),
            other => Err(ParseLogFieldError {
                field: "run source",
                value: other.to_string(),
            }),
        }
    }
}

impl FromStr for RunStatus {
    type Err = ParseLogFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "success" => Ok(RunStatus::Success),
            "failed" => Ok(RunStatus::Failed),
            other => Err(ParseLogFieldError {
                field: "run status",
                value: other.to_string(),
            }),
        }
    }
}

/// 采集审计日志
///
/// 每次触发调用恰好一条，只追加，创建后不再修改
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrawlerLogEntry {
    pub id: Uuid,
    pub source: RunSource,
    pub status: RunStatus,
    /// 本次运行写入的内容总数（新闻 + 长文）
    pub article_count: u32,
    pub error: Option<String>,
    pub started_at: DateTime<Utc>,
    pub completed_at: DateTime<Utc>,
}

impl CrawlerLogEntry {
    /// 成功运行的日志
    pub fn success(
        source: RunSource,
        article_count: u32,
        started_at: DateTime<Utc>,
        completed_at: DateTime<Utc>,
    ) -> Self {
        Self::build(source, RunStatus::Success, article_count, None, started_at, completed_at)
    }

    /// 失败运行的日志
    ///
    /// `article_count` 为失败前已经落库的条数
    pub fn failed(
        source: RunSource,
        article_count: u32,
        error: impl Into<String>,
        started_at: DateTime<Utc>,
        completed_at: DateTime<Utc>,
    ) -> Self {
        Self::build(
            source,
            RunStatus::Failed,
            article_count,
            Some(error.into()),
            started_at,
            completed_at,
        )
    }

    fn build(
        source: RunSource,
        status: RunStatus,
        article_count: u32,
        error: Option<String>,
        started_at: DateTime<Utc>,
        completed_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            source,
            status,
            article_count,
            error,
            started_at,
            // 墙钟可能回拨
            completed_at: completed_at.max(started_at),
        }
    }
}

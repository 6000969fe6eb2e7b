// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::application::use_cases::ingestion_use_case::RunReport;
use crate::domain::models::batch::SourceSummary;
use crate::domain::models::crawler_log::CrawlerLogEntry;
use crate::utils::errors::{error_chain, IngestionError};
use serde::Serialize;

/// 手动触发响应
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ManualRunResponse {
    pub success: bool,
    pub news_count: u64,
    pub article_count: u64,
}

impl From<&RunReport> for ManualRunResponse {
    fn from(report: &RunReport) -> Self {
        Self {
            success: true,
            news_count: report.news_saved,
            article_count: report.articles_saved,
        }
    }
}

/// 定时触发响应
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledRunResponse {
    pub success: bool,
    pub news_count: u64,
    pub article_count: u64,
    pub filtered: usize,
}

impl From<&RunReport> for ScheduledRunResponse {
    fn from(report: &RunReport) -> Self {
        Self {
            success: true,
            news_count: report.news_saved,
            article_count: report.articles_saved,
            filtered: report.filtered,
        }
    }
}

/// 调试触发响应
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TestRunResponse {
    pub success: bool,
    pub message: String,
    pub news_count: u64,
    pub article_count: u64,
    pub filtered: usize,
    pub details: TestRunDetails,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TestRunDetails {
    pub news_sources: Vec<SourceSummary>,
    pub article_sources: Vec<SourceSummary>,
    pub total_crawled: usize,
    pub total_saved: u64,
    pub total_filtered: usize,
}

impl From<RunReport> for TestRunResponse {
    fn from(report: RunReport) -> Self {
        let total_saved = report.total_saved();
        Self {
            success: true,
            message: format!(
                "Test crawl completed: {} saved, {} filtered",
                total_saved, report.filtered
            ),
            news_count: report.news_saved,
            article_count: report.articles_saved,
            filtered: report.filtered,
            details: TestRunDetails {
                news_sources: report.news_sources,
                article_sources: report.article_sources,
                total_crawled: report.crawled,
                total_saved,
                total_filtered: report.filtered,
            },
        }
    }
}

/// 调试触发失败响应
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TestRunFailure {
    pub error: String,
    pub message: String,
    pub details: FailureDetails,
}

/// `stack` 为错误及其来源链，逐行排列
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FailureDetails {
    pub error: String,
    pub stack: String,
}

impl From<&IngestionError> for TestRunFailure {
    fn from(err: &IngestionError) -> Self {
        Self {
            error: "Test crawl failed".to_string(),
            message: err.to_string(),
            details: FailureDetails {
                error: err.to_string(),
                stack: error_chain(err).join("\n"),
            },
        }
    }
}

/// 最近日志列表
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CrawlerLogListResponse {
    pub logs: Vec<CrawlerLogEntry>,
    pub count: usize,
}

impl From<Vec<CrawlerLogEntry>> for CrawlerLogListResponse {
    fn from(logs: Vec<CrawlerLogEntry>) -> Self {
        Self {
            count: logs.len(),
            logs,
        }
    }
}

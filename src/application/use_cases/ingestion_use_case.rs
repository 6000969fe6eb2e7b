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

use crate::domain::models::batch::SourceSummary;
use crate::domain::models::crawler_log::{CrawlerLogEntry, RunSource};
use crate::domain::models::raw_record::ContentKind;
use crate::domain::repositories::crawler_log_repository::CrawlerLogRepository;
use crate::domain::services::content_filter::ContentFilter;
use crate::domain::services::crawl_orchestrator::CrawlOrchestrator;
use crate::domain::services::ingestion_writer::IngestionWriter;
use crate::infrastructure::metrics;
use crate::utils::errors::IngestionError;
use chrono::Utc;
use std::sync::Arc;
use std::time::Instant;
use tracing::{error, info, warn};

/// 一次运行的结果报告
#[derive(Debug, Clone, PartialEq)]
pub struct RunReport {
    pub trigger: RunSource,
    pub news_saved: u64,
    pub articles_saved: u64,
    /// 过滤前的记录总数
    pub crawled: usize,
    /// 被过滤器丢弃的记录数，手动运行恒为 0
    pub filtered: usize,
    pub news_sources: Vec<SourceSummary>,
    pub article_sources: Vec<SourceSummary>,
}

impl RunReport {
    pub fn total_saved(&self) -> u64 {
        self.news_saved + self.articles_saved
    }
}

/// 采集入库用例
///
/// 串联 编排 → 过滤 → 写入，并为每次调用追加一条审计日志。
/// 三种触发方式共用此流程，区别只在是否过滤。
pub struct IngestionUseCase {
    orchestrator: CrawlOrchestrator,
    filter: ContentFilter,
    writer: IngestionWriter,
    log_repo: Arc<dyn CrawlerLogRepository>,
}

impl IngestionUseCase {
    pub fn new(
        orchestrator: CrawlOrchestrator,
        filter: ContentFilter,
        writer: IngestionWriter,
        log_repo: Arc<dyn CrawlerLogRepository>,
    ) -> Self {
        Self {
            orchestrator,
            filter,
            writer,
            log_repo,
        }
    }

    /// 执行一次完整运行
    ///
    /// 无论成功与否都会尝试写入日志；日志写入失败只记录告警，
    /// 不改变本次运行的结果。
    pub async fn run(&self, trigger: RunSource) -> Result<RunReport, IngestionError> {
        let started_at = Utc::now();
        let timer = Instant::now();
        info!(trigger = %trigger, sources = self.orchestrator.source_count(), "Ingestion run started");

        let result = self.execute(trigger).await;

        let completed_at = Utc::now();
        let entry = match &result {
            Ok(report) => CrawlerLogEntry::success(
                trigger,
                u32::try_from(report.total_saved()).unwrap_or(u32::MAX),
                started_at,
                completed_at,
            ),
            Err(e) => CrawlerLogEntry::failed(
                trigger,
                u32::try_from(e.saved()).unwrap_or(u32::MAX),
                e.to_string(),
                started_at,
                completed_at,
            ),
        };

        if let Err(e) = self.log_repo.create(&entry).await {
            warn!(trigger = %trigger, error = %e, "Failed to append crawler log entry");
        }
        metrics::record_run(trigger, entry.status, timer.elapsed());

        match &result {
            Ok(report) => info!(
                trigger = %trigger,
                news = report.news_saved,
                articles = report.articles_saved,
                filtered = report.filtered,
                elapsed_ms = timer.elapsed().as_millis() as u64,
                "Ingestion run completed"
            ),
            Err(e) => error!(trigger = %trigger, error = %e, "Ingestion run failed"),
        }

        result
    }

    async fn execute(&self, trigger: RunSource) -> Result<RunReport, IngestionError> {
        let outcome = self.orchestrator.run_crawl().await?;
        let crawled = outcome.batch.len();

        let batch = if trigger.applies_filter() {
            self.filter.filter_batch(outcome.batch)
        } else {
            outcome.batch
        };
        let filtered = crawled - batch.len();
        metrics::record_filtered(filtered as u64);

        let saved = self.writer.persist(&batch).await?;
        metrics::record_saved(ContentKind::News, saved.news_saved);
        metrics::record_saved(ContentKind::Article, saved.articles_saved);

        let (news_sources, article_sources) = outcome
            .sources
            .into_iter()
            .partition(|s| s.kind == ContentKind::News);

        Ok(RunReport {
            trigger,
            news_saved: saved.news_saved,
            articles_saved: saved.articles_saved,
            crawled,
            filtered,
            news_sources,
            article_sources,
        })
    }
}

#[cfg(test)]
#[path = "ingestion_use_case_test.rs"]
mod tests;

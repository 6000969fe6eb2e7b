// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::MIN_POLITENESS_DELAY;
use crate::domain::models::batch::{NormalizedBatch, SourceSummary};
use crate::sources::traits::SourceAdapter;
use crate::utils::errors::CrawlError;
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info};

/// 一次采集的输出：过滤前的批次和各数据源摘要
#[derive(Debug, Clone, Default)]
pub struct CrawlOutcome {
    pub batch: NormalizedBatch,
    pub sources: Vec<SourceSummary>,
}

/// 采集编排器
///
/// 按注册顺序逐个调用数据源适配器，不并发。相邻两个数据源之间
/// 固定等待 `politeness_delay`（不少于 1 秒）。
pub struct CrawlOrchestrator {
    adapters: Vec<Arc<dyn SourceAdapter>>,
    politeness_delay: Duration,
}

impl CrawlOrchestrator {
    pub fn new(adapters: Vec<Arc<dyn SourceAdapter>>, politeness_delay: Duration) -> Self {
        Self {
            adapters,
            politeness_delay: politeness_delay.max(MIN_POLITENESS_DELAY),
        }
    }

    pub fn politeness_delay(&self) -> Duration {
        self.politeness_delay
    }

    pub fn source_count(&self) -> usize {
        self.adapters.len()
    }

    /// 执行一次采集
    ///
    /// 适配器返回的错误对整次运行是致命的，直接向上传递
    pub async fn run_crawl(&self) -> Result<CrawlOutcome, CrawlError> {
        let mut outcome = CrawlOutcome::default();

        for (index, adapter) in self.adapters.iter().enumerate() {
            if index > 0 {
                tokio::time::sleep(self.politeness_delay).await;
            }

            let fetched = adapter.fetch().await.map_err(|e| {
                error!(source = %adapter.name(), error = %e, "Source adapter aborted the crawl");
                e
            })?;

            outcome.sources.push(SourceSummary {
                name: adapter.name().to_string(),
                kind: adapter.kind(),
                category: adapter.category(),
                crawled: fetched.records.len(),
                error: fetched.error,
            });
            outcome.batch.extend(adapter.kind(), fetched.records);
        }

        info!(
            sources = self.adapters.len(),
            news = outcome.batch.news_items.len(),
            articles = outcome.batch.article_items.len(),
            "Crawl finished"
        );

        Ok(outcome)
    }
}

#[cfg(test)]
#[path = "crawl_orchestrator_test.rs"]
mod tests;

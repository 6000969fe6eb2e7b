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

use async_trait::async_trait;
use axum::{body::Body, http::Request, response::Response, Router};
use inkwords_ingest::application::use_cases::ingestion_use_case::IngestionUseCase;
use inkwords_ingest::domain::models::content::{ArticleItem, NewsItem};
use inkwords_ingest::domain::models::crawler_log::CrawlerLogEntry;
use inkwords_ingest::domain::models::raw_record::{ContentCategory, ContentKind, RawRecord};
use inkwords_ingest::domain::repositories::content_repository::ContentRepository;
use inkwords_ingest::domain::repositories::crawler_log_repository::CrawlerLogRepository;
use inkwords_ingest::domain::services::content_filter::ContentFilter;
use inkwords_ingest::domain::services::crawl_orchestrator::CrawlOrchestrator;
use inkwords_ingest::domain::services::ingestion_writer::IngestionWriter;
use inkwords_ingest::presentation::middleware::cron_auth::CronAuthState;
use inkwords_ingest::presentation::routes;
use inkwords_ingest::sources::traits::{SourceAdapter, SourceOutcome};
use inkwords_ingest::utils::errors::{CrawlError, RepositoryError};
use parking_lot::Mutex;
use sea_orm::DbErr;
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceExt;

pub const CRON_SECRET: &str = "test-cron-secret";

/// 返回固定标题列表的数据源
pub struct FixedSource {
    name: String,
    kind: ContentKind,
    category: ContentCategory,
    titles: Vec<String>,
}

impl FixedSource {
    pub fn news(name: &str, titles: &[&str]) -> Arc<dyn SourceAdapter> {
        Self::build(name, ContentKind::News, ContentCategory::News, titles)
    }

    pub fn article(name: &str, titles: &[&str]) -> Arc<dyn SourceAdapter> {
        Self::build(name, ContentKind::Article, ContentCategory::Culture, titles)
    }

    fn build(
        name: &str,
        kind: ContentKind,
        category: ContentCategory,
        titles: &[&str],
    ) -> Arc<dyn SourceAdapter> {
        Arc::new(Self {
            name: name.to_string(),
            kind,
            category,
            titles: titles.iter().map(|t| t.to_string()).collect(),
        })
    }
}

#[async_trait]
impl SourceAdapter for FixedSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> ContentKind {
        self.kind
    }

    fn category(&self) -> ContentCategory {
        self.category
    }

    async fn fetch(&self) -> Result<SourceOutcome, CrawlError> {
        Ok(SourceOutcome::ok(
            self.titles
                .iter()
                .enumerate()
                .map(|(i, title)| RawRecord {
                    title: title.clone(),
                    body: format!("Story {} from {}", i, self.name),
                    source_name: self.name.clone(),
                    category: self.category,
                    image_url: None,
                    canonical_url: format!("https://{}.example.com/{}", self.name, i),
                })
                .collect(),
        ))
    }
}

/// 内存内容仓库，可模拟长文写入失败
#[derive(Default)]
pub struct MemoryContentRepo {
    pub news: Mutex<Vec<NewsItem>>,
    pub articles: Mutex<Vec<ArticleItem>>,
    pub fail_articles: bool,
}

#[async_trait]
impl ContentRepository for MemoryContentRepo {
    async fn create_many_news(&self, items: &[NewsItem]) -> Result<u64, RepositoryError> {
        self.news.lock().extend_from_slice(items);
        Ok(items.len() as u64)
    }

    async fn create_many_articles(&self, items: &[ArticleItem]) -> Result<u64, RepositoryError> {
        if self.fail_articles {
            return Err(RepositoryError::Database(DbErr::Custom(
                "articles insert rejected".to_string(),
            )));
        }
        self.articles.lock().extend_from_slice(items);
        Ok(items.len() as u64)
    }
}

/// 内存日志仓库
#[derive(Default)]
pub struct MemoryLogRepo {
    pub entries: Mutex<Vec<CrawlerLogEntry>>,
}

#[async_trait]
impl CrawlerLogRepository for MemoryLogRepo {
    async fn create(&self, entry: &CrawlerLogEntry) -> Result<CrawlerLogEntry, RepositoryError> {
        self.entries.lock().push(entry.clone());
        Ok(entry.clone())
    }

    async fn find_recent(&self, limit: u64) -> Result<Vec<CrawlerLogEntry>, RepositoryError> {
        let mut entries = self.entries.lock().clone();
        entries.sort_by(|a, b| b.started_at.cmp(&a.started_at));
        entries.truncate(limit as usize);
        Ok(entries)
    }
}

/// 使用内存仓库组装的完整路由
pub struct TestApp {
    pub router: Router,
    pub content: Arc<MemoryContentRepo>,
    pub logs: Arc<MemoryLogRepo>,
}

impl TestApp {
    pub fn new(adapters: Vec<Arc<dyn SourceAdapter>>) -> Self {
        Self::with_content_repo(adapters, MemoryContentRepo::default())
    }

    pub fn with_content_repo(
        adapters: Vec<Arc<dyn SourceAdapter>>,
        content: MemoryContentRepo,
    ) -> Self {
        let content = Arc::new(content);
        let logs = Arc::new(MemoryLogRepo::default());
        let use_case = Arc::new(IngestionUseCase::new(
            CrawlOrchestrator::new(adapters, Duration::from_secs(1)),
            ContentFilter::default(),
            IngestionWriter::new(content.clone()),
            logs.clone(),
        ));
        let router = routes::routes(
            use_case,
            logs.clone(),
            CronAuthState::new(Some(CRON_SECRET.to_string())),
        );
        Self {
            router,
            content,
            logs,
        }
    }

    pub async fn send(&self, request: Request<Body>) -> Response {
        self.router.clone().oneshot(request).await.unwrap()
    }
}

pub fn post(uri: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn get(uri: &str, bearer: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(token) = bearer {
        builder = builder.header("Authorization", format!("Bearer {}", token));
    }
    builder.body(Body::empty()).unwrap()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

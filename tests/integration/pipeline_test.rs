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

use crate::helpers::{body_json, get, post, CRON_SECRET};
use axum::http::StatusCode;
use inkwords_ingest::application::use_cases::ingestion_use_case::IngestionUseCase;
use inkwords_ingest::config::settings::{CrawlerSettings, Settings};
use inkwords_ingest::domain::models::raw_record::{ContentCategory, ContentKind};
use inkwords_ingest::domain::repositories::crawler_log_repository::CrawlerLogRepository;
use inkwords_ingest::domain::services::content_filter::ContentFilter;
use inkwords_ingest::domain::services::crawl_orchestrator::CrawlOrchestrator;
use inkwords_ingest::domain::services::ingestion_writer::IngestionWriter;
use inkwords_ingest::infrastructure::database::entities::{articles, crawler_logs, news};
use inkwords_ingest::infrastructure::repositories::content_repo_impl::ContentRepositoryImpl;
use inkwords_ingest::infrastructure::repositories::crawler_log_repo_impl::CrawlerLogRepositoryImpl;
use inkwords_ingest::presentation::middleware::cron_auth::CronAuthState;
use inkwords_ingest::presentation::routes;
use inkwords_ingest::sources::config::{ExtractionRules, SourceConfig};
use inkwords_ingest::sources::{build_adapters, build_http_client};
use migration::{Migrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection, EntityTrait, PaginatorTrait};
use std::sync::Arc;
use tempfile::TempDir;
use tower::ServiceExt;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const NEWS_LISTING: &str = r#"
<html><body>
  <ul class="news">
    <li><a href="/news/1.html">Lantern festival lights up the old town</a><p>Thousands gather.</p></li>
    <li><a href="/news/2.html">Members-only VIP gala announced</a><p>Tickets now.</p></li>
    <li><a href="https://other.example.org/3">Dragon boat teams train</a><p>Race week.</p></li>
    <li><p>No link, no record.</p></li>
  </ul>
</body></html>
"#;

const CULTURE_LISTING: &str = r#"
<html><body>
  <div class="card">
    <h2>The art of the ink stone</h2>
    <a class="more" href="/culture/ink-stone">Read</a>
    <div class="summary">Four treasures of the study.</div>
    <img src="/img/ink.jpg">
  </div>
</body></html>
"#;

async fn migrated_db() -> (TempDir, Arc<DatabaseConnection>) {
    let dir = tempfile::tempdir().unwrap();
    let url = format!("sqlite://{}?mode=rwc", dir.path().join("pipeline.db").display());
    let db = Database::connect(url).await.unwrap();
    Migrator::up(&db, None).await.unwrap();
    (dir, Arc::new(db))
}

fn crawler_settings(server_uri: &str) -> CrawlerSettings {
    let settings: Settings = Settings::defaults()
        .unwrap()
        .set_override("crawler.cron_secret", CRON_SECRET)
        .unwrap()
        .build()
        .unwrap()
        .try_deserialize()
        .unwrap();

    let mut crawler = settings.crawler;
    crawler.request_timeout_secs = 2;
    crawler.sources = vec![
        SourceConfig {
            name: "Town Daily".to_string(),
            base_url: server_uri.to_string(),
            listing_url: Some(format!("{}/news/", server_uri)),
            kind: ContentKind::News,
            category: ContentCategory::News,
            rules: ExtractionRules::new("ul.news li").link("a").title("a").body("p"),
            max_items: None,
        },
        SourceConfig {
            name: "Broken Feed".to_string(),
            base_url: server_uri.to_string(),
            listing_url: Some(format!("{}/broken/", server_uri)),
            kind: ContentKind::News,
            category: ContentCategory::News,
            rules: ExtractionRules::new("li").link("a"),
            max_items: None,
        },
        SourceConfig {
            name: "Study Notes".to_string(),
            base_url: server_uri.to_string(),
            listing_url: Some(format!("{}/culture/", server_uri)),
            kind: ContentKind::Article,
            category: ContentCategory::Culture,
            rules: ExtractionRules::new("div.card")
                .title("h2")
                .link("a.more")
                .body("div.summary")
                .image("img"),
            max_items: None,
        },
    ];
    crawler
}

async fn mount_site(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/robots.txt"))
        .respond_with(ResponseTemplate::new(200).set_body_string("User-agent: *\nDisallow: /private/\n"))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/news/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(NEWS_LISTING))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/broken/"))
        .respond_with(ResponseTemplate::new(503))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/culture/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(CULTURE_LISTING))
        .mount(server)
        .await;
}

async fn build_router(
    crawler: &CrawlerSettings,
    db: Arc<DatabaseConnection>,
) -> axum::Router {
    let client = build_http_client(crawler).unwrap();
    let adapters = build_adapters(crawler, client).unwrap();
    let log_repo: Arc<dyn CrawlerLogRepository> =
        Arc::new(CrawlerLogRepositoryImpl::new(db.clone()));
    let use_case = Arc::new(IngestionUseCase::new(
        CrawlOrchestrator::new(adapters, crawler.politeness_delay()),
        ContentFilter::new(&crawler.denylist),
        IngestionWriter::new(Arc::new(ContentRepositoryImpl::new(db))),
        log_repo.clone(),
    ));
    routes::routes(
        use_case,
        log_repo,
        CronAuthState::new(crawler.cron_secret.clone()),
    )
}

/// 真实 HTTP 数据源 + SQLite：失败的数据源被隔离，过滤生效，日志落库
#[tokio::test]
async fn scheduled_pipeline_against_live_sources() {
    let server = MockServer::start().await;
    mount_site(&server).await;
    let (_dir, db) = migrated_db().await;
    let crawler = crawler_settings(&server.uri());
    let router = build_router(&crawler, db.clone()).await;

    let response = router
        .oneshot(get("/api/cron/crawl", Some(CRON_SECRET)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["newsCount"], 2);
    assert_eq!(body["articleCount"], 1);
    assert_eq!(body["filtered"], 1);

    let news_rows = news::Entity::find().all(db.as_ref()).await.unwrap();
    assert_eq!(news_rows.len(), 2);
    let mut urls: Vec<_> = news_rows.iter().map(|n| n.url.clone()).collect();
    urls.sort();
    assert_eq!(
        urls,
        vec![
            format!("{}/news/1.html", server.uri()),
            "https://other.example.org/3".to_string(),
        ]
    );

    let article = articles::Entity::find()
        .one(db.as_ref())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(article.title_en, "The art of the ink stone");
    assert_eq!(article.content_en, "Four treasures of the study.");
    assert_eq!(
        article.image_url,
        Some(format!("{}/img/ink.jpg", server.uri()))
    );
    assert_eq!(
        article.source_url,
        format!("{}/culture/ink-stone", server.uri())
    );

    let logs = crawler_logs::Entity::find().all(db.as_ref()).await.unwrap();
    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0].source, "scheduled");
    assert_eq!(logs[0].status, "success");
    assert_eq!(logs[0].article_count, 3);
}

/// 手动触发两次会重复写入，不做去重
#[tokio::test]
async fn manual_runs_are_not_idempotent() {
    let server = MockServer::start().await;
    mount_site(&server).await;
    let (_dir, db) = migrated_db().await;
    let mut crawler = crawler_settings(&server.uri());
    crawler.sources.truncate(1);
    let router = build_router(&crawler, db.clone()).await;

    for _ in 0..2 {
        let response = router.clone().oneshot(post("/api/crawler/run")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    // 手动触发不过滤，VIP 条目也会写入
    assert_eq!(news::Entity::find().count(db.as_ref()).await.unwrap(), 6);
    assert_eq!(crawler_logs::Entity::find().count(db.as_ref()).await.unwrap(), 2);
}

/// robots.txt 禁止时该数据源不发出列表请求
#[tokio::test]
async fn robots_disallow_skips_listing_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/robots.txt"))
        .respond_with(ResponseTemplate::new(200).set_body_string("User-agent: *\nDisallow: /news/\n"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/news/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(NEWS_LISTING))
        .expect(0)
        .mount(&server)
        .await;
    let (_dir, db) = migrated_db().await;
    let mut crawler = crawler_settings(&server.uri());
    crawler.sources.truncate(1);
    let router = build_router(&crawler, db.clone()).await;

    let response = router.oneshot(post("/api/crawler/run")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["newsCount"], 0);
    assert_eq!(crawler_logs::Entity::find().count(db.as_ref()).await.unwrap(), 1);
}

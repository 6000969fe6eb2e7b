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

use crate::helpers::{body_json, get, post, FixedSource, MemoryContentRepo, TestApp, CRON_SECRET};
use axum::http::StatusCode;
use inkwords_ingest::domain::models::crawler_log::{RunSource, RunStatus};

/// 健康检查与版本端点
#[tokio::test]
async fn health_and_version_respond() {
    let app = TestApp::new(Vec::new());

    let health = app.send(get("/health", None)).await;
    let version = app.send(get("/version", None)).await;

    assert_eq!(health.status(), StatusCode::OK);
    assert_eq!(version.status(), StatusCode::OK);
}

/// 缺少或错误的令牌返回 401 且不写日志
#[tokio::test(start_paused = true)]
async fn scheduled_rejects_bad_tokens_without_logging() {
    let app = TestApp::new(vec![FixedSource::news("daily", &["one"])]);

    let missing = app.send(get("/api/cron/crawl", None)).await;
    let wrong = app.send(get("/api/cron/crawl", Some("not-the-secret"))).await;

    assert_eq!(missing.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(wrong.status(), StatusCode::UNAUTHORIZED);
    assert!(app.logs.entries.lock().is_empty());
    assert!(app.content.news.lock().is_empty());
}

/// 两个数据源各 3 条，全部入库
#[tokio::test(start_paused = true)]
async fn scheduled_run_persists_all_clean_records() {
    let app = TestApp::new(vec![
        FixedSource::news("daily", &["Lantern festival", "Dragon boats", "Rice harvest"]),
        FixedSource::article("culture", &["Ink painting", "Tea houses", "Paper cutting"]),
    ]);

    let response = app.send(get("/api/cron/crawl", Some(CRON_SECRET))).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(
        body,
        serde_json::json!({
            "success": true,
            "newsCount": 3,
            "articleCount": 3,
            "filtered": 0
        })
    );
    let entries = app.logs.entries.lock();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].source, RunSource::Scheduled);
    assert_eq!(entries[0].status, RunStatus::Success);
    assert_eq!(entries[0].article_count, 6);
}

/// 含过滤词的记录被丢弃并计入 filtered
#[tokio::test(start_paused = true)]
async fn scheduled_run_reports_filtered_records() {
    let app = TestApp::new(vec![FixedSource::news(
        "daily",
        &[
            "Opera season opens",
            "VIP tickets on sale",
            "Calligraphy contest",
            "Become a VIP member",
            "Temple fair guide",
        ],
    )]);

    let response = app.send(get("/api/cron/crawl", Some(CRON_SECRET))).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["newsCount"], 3);
    assert_eq!(body["filtered"], 2);
    assert_eq!(app.content.news.lock().len(), 3);
}

/// 手动触发不过滤
#[tokio::test(start_paused = true)]
async fn manual_run_does_not_filter() {
    let app = TestApp::new(vec![FixedSource::news("daily", &["VIP tickets on sale", "Opera"])]);

    let response = app.send(post("/api/crawler/run")).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(
        body,
        serde_json::json!({ "success": true, "newsCount": 2, "articleCount": 0 })
    );
    assert_eq!(app.logs.entries.lock()[0].source, RunSource::Manual);
}

/// 长文写入失败：500，失败日志，新闻保留
#[tokio::test(start_paused = true)]
async fn article_insert_failure_keeps_news_and_logs_failure() {
    let app = TestApp::with_content_repo(
        vec![
            FixedSource::news("daily", &["Opera", "Kites"]),
            FixedSource::article("culture", &["Ink painting"]),
        ],
        MemoryContentRepo {
            fail_articles: true,
            ..Default::default()
        },
    );

    let response = app.send(post("/api/crawler/run")).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    assert!(body["error"]
        .as_str()
        .unwrap()
        .contains("articles insert rejected"));
    assert_eq!(app.content.news.lock().len(), 2);
    let entries = app.logs.entries.lock();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].status, RunStatus::Failed);
    assert!(entries[0].error.is_some());
}

/// 调试触发返回数据源明细
#[tokio::test(start_paused = true)]
async fn test_run_returns_source_details() {
    let app = TestApp::new(vec![
        FixedSource::news("daily", &["Opera", "Sponsored: buy now"]),
        FixedSource::article("culture", &["Ink painting"]),
    ]);

    let response = app.send(post("/api/crawler/test")).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["success"], true);
    assert!(body["message"].is_string());
    assert_eq!(body["newsCount"], 1);
    assert_eq!(body["articleCount"], 1);
    assert_eq!(body["filtered"], 1);
    let details = &body["details"];
    assert_eq!(details["totalCrawled"], 3);
    assert_eq!(details["totalSaved"], 2);
    assert_eq!(details["totalFiltered"], 1);
    assert_eq!(details["newsSources"][0]["name"], "daily");
    assert_eq!(details["newsSources"][0]["crawled"], 2);
    assert_eq!(details["articleSources"][0]["name"], "culture");
    assert_eq!(app.logs.entries.lock()[0].source, RunSource::Test);
}

/// 调试触发失败时返回错误链
#[tokio::test(start_paused = true)]
async fn test_run_failure_includes_stack() {
    let app = TestApp::with_content_repo(
        vec![FixedSource::article("culture", &["Ink painting"])],
        MemoryContentRepo {
            fail_articles: true,
            ..Default::default()
        },
    );

    let response = app.send(post("/api/crawler/test")).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    assert!(body["error"].is_string());
    assert!(body["message"].is_string());
    assert!(body["details"]["error"].is_string());
    assert!(body["details"]["stack"]
        .as_str()
        .unwrap()
        .contains("articles insert rejected"));
}

/// 日志列表按时间倒序，并受 limit 限制
#[tokio::test(start_paused = true)]
async fn logs_endpoint_lists_recent_runs() {
    let app = TestApp::new(vec![FixedSource::news("daily", &["Opera"])]);

    app.send(post("/api/crawler/run")).await;
    app.send(post("/api/crawler/test")).await;
    let response = app.send(get("/api/crawler/logs?limit=1", None)).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["count"], 1);
    assert_eq!(body["logs"].as_array().unwrap().len(), 1);
    assert!(body["logs"][0]["startedAt"].is_string());
    assert_eq!(body["logs"][0]["status"], "success");
}

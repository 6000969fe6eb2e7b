// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::application::use_cases::ingestion_use_case::IngestionUseCase;
use crate::domain::repositories::crawler_log_repository::CrawlerLogRepository;
use crate::presentation::handlers::crawler_handler;
use crate::presentation::middleware::cron_auth::{require_cron_secret, CronAuthState};
use axum::{
    middleware,
    routing::{get, post},
    Extension, Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// 创建应用路由
///
/// 只有定时触发接口挂载密钥校验
pub fn routes(
    use_case: Arc<IngestionUseCase>,
    log_repo: Arc<dyn CrawlerLogRepository>,
    cron_auth: CronAuthState,
) -> Router {
    let public_routes = Router::new()
        .route("/health", get(health_check))
        .route("/version", get(version))
        .route("/api/crawler/run", post(crawler_handler::run_manual))
        .route("/api/crawler/test", post(crawler_handler::run_test))
        .route("/api/crawler/logs", get(crawler_handler::list_logs));

    let protected_routes = Router::new()
        .route("/api/cron/crawl", get(crawler_handler::run_scheduled))
        .layer(middleware::from_fn_with_state(cron_auth, require_cron_secret));

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(Extension(use_case))
        .layer(Extension(log_repo))
        .layer(TraceLayer::new_for_http())
}

/// 健康检查端点
pub async fn health_check() -> &'static str {
    "OK"
}

/// 版本信息端点
pub async fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

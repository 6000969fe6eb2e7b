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

use axum::{
    extract::{Extension, Query},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use std::sync::Arc;

use crate::{
    application::{
        dto::{
            crawl_response::{
                CrawlerLogListResponse, ManualRunResponse, ScheduledRunResponse, TestRunFailure,
                TestRunResponse,
            },
            log_query::LogQuery,
        },
        use_cases::ingestion_use_case::IngestionUseCase,
    },
    domain::{
        models::crawler_log::RunSource, repositories::crawler_log_repository::CrawlerLogRepository,
    },
    presentation::errors::AppError,
};

/// 手动触发，不过滤
pub async fn run_manual(
    Extension(use_case): Extension<Arc<IngestionUseCase>>,
) -> Result<Json<ManualRunResponse>, AppError> {
    let report = use_case.run(RunSource::Manual).await?;
    Ok(Json(ManualRunResponse::from(&report)))
}

/// 定时触发，鉴权由中间件完成
pub async fn run_scheduled(
    Extension(use_case): Extension<Arc<IngestionUseCase>>,
) -> Result<Json<ScheduledRunResponse>, AppError> {
    let report = use_case.run(RunSource::Scheduled).await?;
    Ok(Json(ScheduledRunResponse::from(&report)))
}

/// 调试触发，返回各数据源明细
pub async fn run_test(
    Extension(use_case): Extension<Arc<IngestionUseCase>>,
) -> impl IntoResponse {
    match use_case.run(RunSource::Test).await {
        Ok(report) => (StatusCode::OK, Json(TestRunResponse::from(report))).into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(TestRunFailure::from(&e)),
        )
            .into_response(),
    }
}

/// 最近的采集日志，按开始时间倒序
pub async fn list_logs(
    Extension(log_repo): Extension<Arc<dyn CrawlerLogRepository>>,
    Query(query): Query<LogQuery>,
) -> Result<Json<CrawlerLogListResponse>, AppError> {
    let logs = log_repo.find_recent(query.effective_limit()).await?;
    Ok(Json(CrawlerLogListResponse::from(logs)))
}

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
    extract::{Request, State},
    http::{header, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::sync::Arc;
use tracing::warn;

/// 定时触发鉴权状态
///
/// `secret` 为空时拒绝所有请求
#[derive(Clone, Default)]
pub struct CronAuthState {
    pub secret: Option<Arc<str>>,
}

impl CronAuthState {
    pub fn new(secret: Option<String>) -> Self {
        Self {
            secret: secret.map(Arc::from),
        }
    }

    fn accepts(&self, authorization: Option<&str>) -> bool {
        match (&self.secret, authorization) {
            (Some(secret), Some(value)) => value
                .strip_prefix("Bearer ")
                .is_some_and(|token| token == secret.as_ref()),
            _ => false,
        }
    }
}

/// 定时触发鉴权中间件
///
/// 校验 `Authorization: Bearer <secret>`，失败直接返回 401，
/// 请求不会进入处理器，因此不会产生采集日志。
pub async fn require_cron_secret(
    State(state): State<CronAuthState>,
    req: Request,
    next: Next,
) -> Response {
    let authorization = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok());

    if !state.accepts(authorization) {
        if state.secret.is_none() {
            warn!("Scheduled crawl rejected: no cron secret configured");
        } else {
            warn!("Scheduled crawl rejected: missing or invalid bearer token");
        }
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "error": "Unauthorized" })),
        )
            .into_response();
    }

    next.run(req).await
}

#[cfg(test)]
#[path = "cron_auth_test.rs"]
mod tests;

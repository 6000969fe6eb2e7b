// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::Deserialize;

pub const DEFAULT_LOG_LIMIT: u64 = 20;
pub const MAX_LOG_LIMIT: u64 = 100;

/// 日志查询参数
#[derive(Debug, Default, Deserialize)]
pub struct LogQuery {
    pub limit: Option<u64>,
}

impl LogQuery {
    /// 缺省 20，上限 100，0 视为 1
    pub fn effective_limit(&self) -> u64 {
        self.limit
            .unwrap_or(DEFAULT_LOG_LIMIT)
            .clamp(1, MAX_LOG_LIMIT)
    }
}

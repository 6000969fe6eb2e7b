// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 数据传输对象模块
///
/// 触发接口的请求参数和响应体
pub mod crawl_response;
pub mod log_query;

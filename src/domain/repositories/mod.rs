// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 仓库接口模块
///
/// 定义领域层的持久化抽象契约，具体实现由基础设施层提供：
/// - 内容仓库（content_repository）：新闻与长文的批量写入
/// - 采集日志仓库（crawler_log_repository）：审计日志的追加与查询
pub mod content_repository;
pub mod crawler_log_repository;

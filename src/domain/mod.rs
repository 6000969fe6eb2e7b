// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域层模块
///
/// 该模块包含内容采集的核心逻辑，包括：
/// - 领域模型（models）：原始记录、批次、内容条目和审计日志
/// - 仓库接口（repositories）：数据持久化抽象接口
/// - 服务（services）：过滤、编排和写入
///
/// 领域层不依赖于任何外部实现，持久化通过仓库接口注入。
pub mod models;
pub mod repositories;
pub mod services;

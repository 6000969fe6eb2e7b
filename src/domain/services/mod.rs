// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域服务模块
///
/// 内容采集流水线的三个核心环节：
/// - 内容过滤（content_filter）：基于过滤词表的入库门槛
/// - 采集编排（crawl_orchestrator）：顺序调用各数据源并汇总记录
/// - 内容写入（ingestion_writer）：按内容种类批量写入
pub mod content_filter;
pub mod crawl_orchestrator;
pub mod ingestion_writer;

// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域模型模块
///
/// 该模块定义了内容采集流水线的核心数据结构：
/// - 原始记录（raw_record）：数据源适配器产生的单条候选内容
/// - 批次（batch）：一次运行规整后的新闻/长文序列及各数据源摘要
/// - 内容（content）：写入内容表的新闻与长文条目
/// - 采集日志（crawler_log）：每次触发调用的审计记录
pub mod batch;
pub mod content;
pub mod crawler_log;
pub mod raw_record;

// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 数据库实体模块
///
/// 使用SeaORM映射内容表和采集日志表
pub mod articles;
pub mod crawler_logs;
pub mod news;

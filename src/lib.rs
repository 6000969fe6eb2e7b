// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 应用程序模块
///
/// 采集入库用例和响应体
pub mod application;

/// 配置模块
///
/// 处理应用程序的配置设置和环境变量
pub mod config;

/// 领域模块
///
/// 记录模型、仓库接口以及过滤、编排、写入服务
pub mod domain;

/// 基础设施模块
///
/// 数据库、仓库实现和指标导出
pub mod infrastructure;

/// 表示层模块
///
/// 处理HTTP请求和响应，包括路由、处理器和中间件
pub mod presentation;

/// 数据源模块
///
/// 外部站点适配器及内置数据源清单
pub mod sources;

/// 工具模块
///
/// 提供通用的工具函数和辅助功能
pub mod utils;

// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 集成测试模块
///
/// 通过 HTTP 路由驱动整条采集流水线
pub mod pipeline_test;
pub mod trigger_api_test;

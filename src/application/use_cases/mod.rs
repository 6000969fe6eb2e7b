// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 用例模块
///
/// 采集入库是唯一的业务用例，三种触发方式共享
pub mod ingestion_use_case;

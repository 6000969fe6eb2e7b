// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use sea_orm_migration::prelude::*;

/// 迁移命令行
///
/// `cargo run -p migration -- up` 创建 news、articles、crawler_logs 三张表
#[async_std::main]
async fn main() {
    cli::run_cli(migration::Migrator).await;
}

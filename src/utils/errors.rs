// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::raw_record::ContentKind;
use sea_orm::DbErr;
use thiserror::Error;

/// 仓库层错误类型
#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    Database(#[from] DbErr),

    #[error("Invalid stored value: {0}")]
    InvalidData(String),
}

/// 编排层错误
///
/// 只有越过适配器边界的错误才会出现在这里，对整次运行是致命的
#[derive(Error, Debug)]
pub enum CrawlError {
    #[error("crawl aborted: {0}")]
    Aborted(String),
}

/// 一次采集运行的失败原因
#[derive(Error, Debug)]
pub enum IngestionError {
    #[error("crawl failed: {0}")]
    Crawl(#[from] CrawlError),

    /// `saved` 为失败前已经落库的条数，不会回滚
    #[error("failed to persist {kind} items: {source}")]
    Persist {
        kind: ContentKind,
        saved: u64,
        #[source]
        source: RepositoryError,
    },
}

impl IngestionError {
    /// 失败前已经写入的内容条数
    pub fn saved(&self) -> u64 {
        match self {
            IngestionError::Crawl(_) => 0,
            IngestionError::Persist { saved, .. } => *saved,
        }
    }
}

/// 展开错误及其来源链
pub fn error_chain(err: &(dyn std::error::Error + 'static)) -> Vec<String> {
    let mut chain = vec![err.to_string()];
    let mut current = err.source();
    while let Some(cause) = current {
        chain.push(cause.to_string());
        current = cause.source();
    }
    chain
}

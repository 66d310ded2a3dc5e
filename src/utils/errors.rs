// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use thiserror::Error;

use crate::domain::repositories::storage_repository::StorageError;
use crate::domain::services::feed_service::FeedError;
use crate::engines::traits::EngineError;

/// 单个卡片的提取错误
///
/// 只会导致当前卡片被跳过，不会中断整个运行
#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("Couldn't find title")]
    MissingTitle,
}

/// 运行级错误
///
/// 任何一种都会使进程以非零状态退出
#[derive(Error, Debug)]
pub enum RunError {
    #[error("Scraping failed: {0}")]
    Scrape(#[from] EngineError),

    #[error("Feed generation failed: {0}")]
    Feed(#[from] FeedError),

    #[error("Writing feed failed: {0}")]
    FileWrite(#[from] StorageError),
}

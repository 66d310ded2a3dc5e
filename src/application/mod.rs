// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 应用程序模块
///
/// 把抓取、序列化和存储串联成一次完整的运行
pub mod use_cases;

// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域层模块
///
/// 该模块包含系统的核心逻辑，包括：
/// - 领域模型（models）：优惠实体
/// - 仓库接口（repositories）：订阅文件存储抽象
/// - 服务（services）：标题规范化、卡片提取、采集与 RSS 序列化
pub mod models;
pub mod repositories;
pub mod services;

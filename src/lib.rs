// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 应用程序模块
///
/// 包含一次完整运行的编排逻辑
pub mod application;

/// 配置模块
///
/// 处理应用程序的配置设置和环境变量
pub mod config;

/// 领域模块
///
/// 包含优惠实体、标题规范化、提取与采集服务以及 RSS 序列化
pub mod domain;

/// 引擎模块
///
/// 基于 chromiumoxide 的浏览器驱动以及 HTML 快照适配器
pub mod engines;

/// 基础设施模块
///
/// 提供订阅文件的存储实现
pub mod infrastructure;

/// 工具模块
///
/// 提供日志初始化、URL 处理和错误类型
pub mod utils;

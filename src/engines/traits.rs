// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::domain::models::offer::Offer;
use async_trait::async_trait;
use thiserror::Error;

/// 引擎错误类型
#[derive(Error, Debug)]
pub enum EngineError {
    /// 浏览器启动或连接失败
    #[error("Browser unavailable: {0}")]
    Browser(String),
    /// 页面导航超时
    #[error("Navigation to {url} timed out")]
    NavigationTimeout { url: String },
    /// 内容标记在超时时间内未出现
    #[error("Content marker {selector} did not appear in time")]
    ContentNotReady { selector: String },
    /// 无效的 CSS 选择器
    #[error("Invalid selector: {0}")]
    InvalidSelector(String),
    /// CDP 调用失败
    #[error("CDP error: {0}")]
    Cdp(#[from] chromiumoxide::error::CdpError),
    /// 其他错误
    #[error("Other error: {0}")]
    Other(String),
}

/// 优惠卡片句柄
///
/// 对单个卡片 DOM 片段的只读访问。实现可以是实时的浏览器元素，也可以是 HTML 快照。
/// 超时由调用方控制。
#[async_trait]
pub trait OfferCard: Send + Sync {
    /// 读取第一个匹配子元素的文本，子元素不存在时返回 `None`
    async fn child_text(&self, selector: &str) -> Result<Option<String>, EngineError>;

    /// 读取第一个匹配子元素的属性，子元素或属性不存在时返回 `None`
    async fn child_attribute(
        &self,
        selector: &str,
        name: &str,
    ) -> Result<Option<String>, EngineError>;

    /// 读取卡片元素自身的属性
    async fn attribute(&self, name: &str) -> Result<Option<String>, EngineError>;
}

/// 优惠抓取器特质
///
/// 负责一次完整的页面抓取，并在返回前释放所持有的浏览器资源
#[async_trait]
pub trait OfferScraper: Send + Sync {
    /// 读取当前页面上的全部优惠
    async fn read_offers(&self) -> Result<Vec<Offer>, EngineError>;

    /// 抓取器名称
    fn name(&self) -> &'static str;
}

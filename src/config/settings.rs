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

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::time::Duration;

/// 应用程序配置设置
///
/// 默认值即为抓取 Prime Gaming 所需的固定常量，文件和环境变量仅用于覆盖
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// 目标站点与选择器
    pub source: SourceSettings,
    /// 浏览器配置
    pub browser: BrowserSettings,
    /// 超时配置
    pub timeouts: TimeoutSettings,
    /// 抓取方式
    pub scrape: ScrapeSettings,
    /// 订阅元数据
    pub feed: FeedSettings,
    /// 输出配置
    pub output: OutputSettings,
}

/// 目标站点配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct SourceSettings {
    /// 站点根地址，相对链接以此为基准
    pub base_url: String,
    /// 优惠列表页路径，同时作为链接缺失时的回退地址
    pub offer_path: String,
    /// 页面内容就绪标记
    pub content_selector: String,
    /// "Games" 过滤按钮
    pub filter_selector: String,
    /// 优惠卡片
    pub card_selector: String,
    /// 卡片内标题元素
    pub title_selector: String,
    /// 卡片内主图片元素
    pub image_selector: String,
    /// 主图片缺失时的回退图片元素
    pub fallback_image_selector: String,
}

impl SourceSettings {
    /// 优惠列表页的完整地址
    pub fn offer_url(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), self.offer_path)
    }
}

/// 浏览器配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct BrowserSettings {
    /// 是否以无头模式启动
    pub headless: bool,
    /// 远程 Chrome 调试地址，设置后不再启动本地浏览器
    pub remote_debugging_url: Option<String>,
    /// CDP 请求超时时间（秒）
    pub request_timeout_secs: u64,
}

/// 超时配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct TimeoutSettings {
    /// 页面导航超时（秒）
    pub navigation_secs: u64,
    /// 等待内容标记出现的超时（秒）
    pub content_secs: u64,
    /// 单个属性读取超时（毫秒）
    pub attribute_ms: u64,
    /// 滚动到底部后的等待时间（毫秒）
    pub scroll_settle_ms: u64,
}

impl TimeoutSettings {
    pub fn navigation(&self) -> Duration {
        Duration::from_secs(self.navigation_secs)
    }

    pub fn content(&self) -> Duration {
        Duration::from_secs(self.content_secs)
    }

    pub fn attribute(&self) -> Duration {
        Duration::from_millis(self.attribute_ms)
    }

    pub fn scroll_settle(&self) -> Duration {
        Duration::from_millis(self.scroll_settle_ms)
    }
}

/// 抓取方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrapeMode {
    /// 通过 CDP 元素句柄逐个读取卡片
    Live,
    /// 滚动完成后抓取整页 HTML，离线解析卡片
    Snapshot,
}

/// 抓取配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct ScrapeSettings {
    pub mode: ScrapeMode,
}

/// RSS 订阅元数据
#[derive(Debug, Clone, Deserialize)]
pub struct FeedSettings {
    pub title: String,
    pub description: String,
    pub site_url: String,
    pub feed_url: String,
    pub managing_editor: String,
    pub webmaster: String,
    pub language: String,
}

/// 输出配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct OutputSettings {
    /// 订阅文件路径（相对于工作目录）
    pub path: String,
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 依次叠加内置默认值、`config/default`、`config/{APP_ENVIRONMENT}` 以及
    /// `PRIME_RSS__` 前缀的环境变量
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载的配置
    /// * `Err(ConfigError)` - 配置加载失败
    pub fn new() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        let builder = Self::with_defaults(Config::builder())?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::with_prefix("PRIME_RSS").separator("__"));

        let mut settings: Settings = builder.build()?.try_deserialize()?;
        if settings.browser.remote_debugging_url.is_none() {
            settings.browser.remote_debugging_url =
                std::env::var("CHROMIUM_REMOTE_DEBUGGING_URL").ok();
        }
        Ok(settings)
    }

    /// 仅使用内置默认值构建配置，不读取文件和环境变量
    pub fn defaults() -> Result<Self, ConfigError> {
        Self::with_defaults(Config::builder())?
            .build()?
            .try_deserialize()
    }

    fn with_defaults(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        builder
            // Source page and selectors
            .set_default("source.base_url", "https://gaming.amazon.com")?
            .set_default("source.offer_path", "/home")?
            .set_default("source.content_selector", ".offer-list__content")?
            .set_default(
                "source.filter_selector",
                r#"button[data-a-target="offer-filter-button-Game"]"#,
            )?
            .set_default(
                "source.card_selector",
                r#"[data-a-target="offer-list-FGWP_FULL"] .item-card__action > a:first-child"#,
            )?
            .set_default(
                "source.title_selector",
                ".item-card-details__body__primary h3",
            )?
            .set_default(
                "source.image_selector",
                r#"[data-a-target="card-image"] img"#,
            )?
            .set_default("source.fallback_image_selector", "img")?
            // Browser
            .set_default("browser.headless", true)?
            .set_default("browser.request_timeout_secs", 30)?
            // Timeouts
            .set_default("timeouts.navigation_secs", 30)?
            .set_default("timeouts.content_secs", 30)?
            .set_default("timeouts.attribute_ms", 5000)?
            .set_default("timeouts.scroll_settle_ms", 2000)?
            // Scraping
            .set_default("scrape.mode", "live")?
            // Feed envelope
            .set_default("feed.title", "Prime Gaming RSS Games")?
            .set_default(
                "feed.description",
                "Awesome RSS Feeds about Prime Gaming games offers!",
            )?
            .set_default(
                "feed.site_url",
                "https://feuerlord2.github.io/PrimeGaming-RSS-Site/",
            )?
            .set_default(
                "feed.feed_url",
                "https://feuerlord2.github.io/PrimeGaming-RSS-Site/games.rss",
            )?
            .set_default(
                "feed.managing_editor",
                "DanielWinterEmsdetten+rss@gmail.com (Daniel Winter)",
            )?
            .set_default(
                "feed.webmaster",
                "DanielWinterEmsdetten+rss@gmail.com (Daniel Winter)",
            )?
            .set_default("feed.language", "en")?
            // Output
            .set_default("output.path", "docs/games.rss")
    }
}

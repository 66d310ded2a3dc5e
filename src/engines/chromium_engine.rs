// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use chromiumoxide::{Browser, BrowserConfig, Element, Page};
use futures::StreamExt;
use std::future::Future;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::config::settings::{BrowserSettings, ScrapeMode, Settings};
use crate::domain::models::offer::Offer;
use crate::domain::services::collection_service::collect_offers;
use crate::domain::services::extraction_service::OfferExtractor;
use crate::engines::snapshot_engine;
use crate::engines::traits::{EngineError, OfferCard, OfferScraper};

const SCROLL_TO_BOTTOM: &str =
    "document.documentElement.scrollTop = document.documentElement.scrollHeight;";

const CONTENT_POLL_INTERVAL: Duration = Duration::from_millis(250);

/// 浏览器会话
///
/// 每次运行启动（或连接）一个浏览器，运行结束时必须调用 [`BrowserSession::close`]。
pub struct BrowserSession {
    browser: Browser,
    handler: JoinHandle<()>,
    remote: bool,
}

impl BrowserSession {
    /// 启动本地 Chrome，或连接到配置的远程调试地址
    pub async fn launch(settings: &BrowserSettings) -> Result<Self, EngineError> {
        let remote_debugging_url = settings.remote_debugging_url.as_deref();

        let (browser, mut handler) = if let Some(url) = remote_debugging_url {
            info!("Connecting to remote Chrome instance at: {}", url);
            Browser::connect(url).await.map_err(|e| {
                EngineError::Browser(format!("Failed to connect to remote Chrome: {}", e))
            })?
        } else {
            let mut builder = BrowserConfig::builder()
                .no_sandbox()
                .request_timeout(Duration::from_secs(settings.request_timeout_secs));

            if !settings.headless {
                builder = builder.with_head();
            }

            // CI runners have a tiny /dev/shm and no GPU
            builder = builder.arg("--disable-gpu").arg("--disable-dev-shm-usage");

            let config = builder.build().map_err(EngineError::Browser)?;
            Browser::launch(config)
                .await
                .map_err(|e| EngineError::Browser(e.to_string()))?
        };

        let handler = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if let Err(e) = event {
                    debug!("Browser handler error: {}", e);
                }
            }
        });

        info!(remote = remote_debugging_url.is_some(), "Browser launched");
        Ok(Self {
            browser,
            handler,
            remote: remote_debugging_url.is_some(),
        })
    }

    pub async fn new_page(&self) -> Result<Page, EngineError> {
        Ok(self.browser.new_page("about:blank").await?)
    }

    /// 关闭标签页
    ///
    /// 远程浏览器在运行之间共享，标签页必须逐个关闭。
    pub async fn close_page(&self, page: Page) {
        if let Err(e) = page.close().await {
            warn!("Failed to close page: {}", e);
        }
    }

    /// 释放浏览器
    ///
    /// 本地浏览器被关闭并回收进程；远程浏览器只断开连接。
    pub async fn close(mut self) {
        if !self.remote {
            if let Err(e) = self.browser.close().await {
                warn!("Failed to close browser: {}", e);
            }
            if let Err(e) = self.browser.wait().await {
                warn!("Failed to wait for browser exit: {}", e);
            }
        }
        self.handler.abort();
        debug!("Browser session released");
    }
}

/// 浏览器中的优惠卡片
pub struct ChromiumCard {
    element: Element,
}

impl ChromiumCard {
    pub fn new(element: Element) -> Self {
        Self { element }
    }

    async fn first_child(&self, selector: &str) -> Result<Option<Element>, EngineError> {
        let mut children = self.element.find_elements(selector).await?;
        if children.is_empty() {
            return Ok(None);
        }
        Ok(Some(children.swap_remove(0)))
    }
}

#[async_trait]
impl OfferCard for ChromiumCard {
    async fn child_text(&self, selector: &str) -> Result<Option<String>, EngineError> {
        // textContent, not innerText: hidden nodes count the same as in snapshot mode
        match self.first_child(selector).await? {
            Some(child) => Ok(child.string_property("textContent").await?),
            None => Ok(None),
        }
    }

    async fn child_attribute(
        &self,
        selector: &str,
        name: &str,
    ) -> Result<Option<String>, EngineError> {
        match self.first_child(selector).await? {
            Some(child) => Ok(child.attribute(name).await?),
            None => Ok(None),
        }
    }

    async fn attribute(&self, name: &str) -> Result<Option<String>, EngineError> {
        Ok(self.element.attribute(name).await?)
    }
}

/// 基于 chromiumoxide 的优惠抓取器
pub struct ChromiumScraper {
    settings: Settings,
    extractor: OfferExtractor,
}

impl ChromiumScraper {
    pub fn new(settings: Settings) -> Result<Self, EngineError> {
        let extractor = OfferExtractor::new(&settings.source, settings.timeouts.attribute())
            .map_err(|e| EngineError::Other(format!("Invalid base URL: {}", e)))?;
        Ok(Self {
            settings,
            extractor,
        })
    }

    async fn scrape_page(&self, page: &Page) -> Result<Vec<Offer>, EngineError> {
        let source = &self.settings.source;
        let timeouts = &self.settings.timeouts;

        let offer_url = source.offer_url();
        tokio::time::timeout(timeouts.navigation(), page.goto(offer_url.as_str()))
            .await
            .map_err(|_| EngineError::NavigationTimeout {
                url: offer_url.clone(),
            })??;
        info!(url = %offer_url, "Page loaded");

        wait_for_selector(page, &source.content_selector, timeouts.content()).await?;
        info!("Content ready");

        wait_for_selector(page, &source.filter_selector, timeouts.content()).await?;
        page.find_element(source.filter_selector.as_str())
            .await?
            .click()
            .await?;

        page.evaluate(SCROLL_TO_BOTTOM).await?;
        tokio::time::sleep(timeouts.scroll_settle()).await;

        let offers = match self.settings.scrape.mode {
            ScrapeMode::Live => self.collect_live(page).await,
            ScrapeMode::Snapshot => self.collect_snapshot(page).await?,
        };
        info!(count = offers.len(), "Scraped");
        Ok(offers)
    }

    async fn collect_live(&self, page: &Page) -> Vec<Offer> {
        let cards = match page.find_elements(self.settings.source.card_selector.as_str()).await {
            Ok(elements) => elements.into_iter().map(ChromiumCard::new).collect::<Vec<_>>(),
            Err(e) => {
                warn!("No offer cards matched: {}", e);
                Vec::new()
            }
        };
        collect_offers(&self.extractor, &cards).await
    }

    async fn collect_snapshot(&self, page: &Page) -> Result<Vec<Offer>, EngineError> {
        let html = page.content().await?;
        let cards = snapshot_engine::parse_cards(&html, &self.settings.source.card_selector)?;
        Ok(collect_offers(&self.extractor, &cards).await)
    }
}

#[async_trait]
impl OfferScraper for ChromiumScraper {
    async fn read_offers(&self) -> Result<Vec<Offer>, EngineError> {
        let session = BrowserSession::launch(&self.settings.browser).await?;
        let result = match session.new_page().await {
            Ok(page) => {
                let result = self.scrape_page(&page).await;
                session.close_page(page).await;
                result
            }
            Err(e) => Err(e),
        };
        session.close().await;
        result
    }

    fn name(&self) -> &'static str {
        "chromium"
    }
}

/// 轮询等待元素出现
async fn wait_for_selector(
    page: &Page,
    selector: &str,
    timeout: Duration,
) -> Result<(), EngineError> {
    wait_until_present(selector, timeout, || async move {
        page.find_element(selector).await.is_ok()
    })
    .await
}

/// 按固定间隔检查，直到 `present` 为真或超时
async fn wait_until_present<F, Fut>(
    selector: &str,
    timeout: Duration,
    mut present: F,
) -> Result<(), EngineError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = bool>,
{
    let poll = async {
        loop {
            if present().await {
                return;
            }
            tokio::time::sleep(CONTENT_POLL_INTERVAL).await;
        }
    };

    tokio::time::timeout(timeout, poll)
        .await
        .map_err(|_| EngineError::ContentNotReady {
            selector: selector.to_string(),
        })
}

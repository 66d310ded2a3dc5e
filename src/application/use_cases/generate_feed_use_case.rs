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

use crate::{
    config::settings::Settings,
    domain::{
        models::offer::Offer,
        repositories::storage_repository::StorageRepository,
        services::feed_service::FeedService,
    },
    engines::traits::OfferScraper,
    utils::errors::RunError,
};
use chrono::Utc;
use std::sync::Arc;
use tracing::{info, warn};

/// 一次运行的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    /// 实际抓取到的优惠数量
    pub offers_found: usize,
    /// 是否写入了占位条目
    pub placeholder_used: bool,
    /// 订阅文件的存储键
    pub output_path: String,
}

/// 生成订阅用例
///
/// 抓取优惠，空结果时补一个占位条目，序列化为 RSS 并覆盖写入输出文件。
/// 浏览器的获取与释放由抓取器负责，这里只看到抓取结果。
pub struct GenerateFeedUseCase<S, ST> {
    scraper: Arc<S>,
    storage: Arc<ST>,
    feed_service: FeedService,
    output_path: String,
    fallback_url: String,
}

impl<S, ST> GenerateFeedUseCase<S, ST>
where
    S: OfferScraper,
    ST: StorageRepository,
{
    pub fn new(scraper: Arc<S>, storage: Arc<ST>, settings: &Settings) -> Self {
        Self {
            scraper,
            storage,
            feed_service: FeedService::new(settings.feed.clone()),
            output_path: settings.output.path.clone(),
            fallback_url: settings.source.offer_url(),
        }
    }

    /// 执行一次完整运行
    ///
    /// # 返回值
    ///
    /// * `Ok(RunReport)` - 订阅已写入，包括零优惠写入占位条目的情况
    /// * `Err(RunError)` - 抓取、序列化或写文件失败
    pub async fn execute(&self) -> Result<RunReport, RunError> {
        info!(scraper = self.scraper.name(), "Scraping games...");
        let offers = self.scraper.read_offers().await?;
        let offers_found = offers.len();
        info!("Found {} game offers", offers_found);

        let (offers, placeholder_used) = with_placeholder(offers, &self.fallback_url);

        let rss = self.feed_service.render(&offers)?;
        self.storage
            .save(&self.output_path, rss.as_bytes())
            .await?;
        info!(path = %self.output_path, items = offers.len(), "RSS feed written");

        Ok(RunReport {
            offers_found,
            placeholder_used,
            output_path: self.output_path.clone(),
        })
    }
}

/// 空结果时替换为单个占位条目
///
/// # 返回值
///
/// 处理后的优惠列表，以及是否使用了占位条目
pub fn with_placeholder(offers: Vec<Offer>, fallback_url: &str) -> (Vec<Offer>, bool) {
    if !offers.is_empty() {
        return (offers, false);
    }
    warn!("No offers found, creating placeholder feed");
    (vec![Offer::placeholder(fallback_url.to_string(), Utc::now())], true)
}

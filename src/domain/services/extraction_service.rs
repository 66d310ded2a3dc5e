// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::Utc;
use std::future::Future;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

use crate::config::settings::SourceSettings;
use crate::domain::models::offer::{BaseOffer, Offer};
use crate::domain::services::title_normalizer::normalize_title;
use crate::engines::traits::{EngineError, OfferCard};
use crate::utils::errors::ExtractError;
use crate::utils::url_utils;

/// 提取服务
///
/// 把单个优惠卡片映射为 [`Offer`]。标题是唯一的必需字段；
/// 图片和链接按顺序尝试备选方案，全部失败时使用默认值，不会导致卡片被丢弃。
///
/// 不读取过期时间：列表页不可靠地展示该信息，而逐个打开详情页的代价过高，
/// 所以 `valid_to` 始终为空。
pub struct OfferExtractor {
    base_url: Url,
    fallback_url: String,
    title_selector: String,
    image_selectors: Vec<String>,
    attribute_timeout: Duration,
}

impl OfferExtractor {
    /// 根据站点配置创建提取服务
    ///
    /// # 参数
    ///
    /// * `source` - 站点地址与选择器
    /// * `attribute_timeout` - 单个文本或属性读取的超时时间
    pub fn new(source: &SourceSettings, attribute_timeout: Duration) -> Result<Self, url::ParseError> {
        let base_url = Url::parse(&source.base_url)?;
        Ok(Self {
            base_url,
            fallback_url: source.offer_url(),
            title_selector: source.title_selector.clone(),
            image_selectors: vec![
                source.image_selector.clone(),
                source.fallback_image_selector.clone(),
            ],
            attribute_timeout,
        })
    }

    /// 提取单个卡片
    ///
    /// # 返回值
    ///
    /// * `Ok(Offer)` - 标题有效的优惠
    /// * `Err(ExtractError::MissingTitle)` - 标题缺失、读取失败或清理后为空
    pub async fn extract<C>(&self, card: &C) -> Result<Offer, ExtractError>
    where
        C: OfferCard + ?Sized,
    {
        let base = self.read_base_offer(card).await?;
        let title = normalize_title(&base.title);
        if title.is_empty() {
            return Err(ExtractError::MissingTitle);
        }
        Ok(Offer::from_base(base, title, Utc::now()))
    }

    async fn read_base_offer<C>(&self, card: &C) -> Result<BaseOffer, ExtractError>
    where
        C: OfferCard + ?Sized,
    {
        let title = self.read_title(card).await?;
        let img_url = self.read_image(card).await;
        let url = self.read_link(card, &title).await;

        Ok(BaseOffer {
            title,
            url,
            img_url,
        })
    }

    async fn read_title<C>(&self, card: &C) -> Result<String, ExtractError>
    where
        C: OfferCard + ?Sized,
    {
        match bounded(self.attribute_timeout, card.child_text(&self.title_selector)).await {
            Ok(Some(title)) if !title.trim().is_empty() => Ok(title),
            Ok(_) => Err(ExtractError::MissingTitle),
            Err(reason) => {
                debug!(reason = %reason, "Title read failed");
                Err(ExtractError::MissingTitle)
            }
        }
    }

    /// 依次尝试主图片和卡片内第一张图片，都失败时返回空字符串
    async fn read_image<C>(&self, card: &C) -> String
    where
        C: OfferCard + ?Sized,
    {
        for selector in &self.image_selectors {
            match bounded(self.attribute_timeout, card.child_attribute(selector, "src")).await {
                Ok(Some(src)) => {
                    if let Some(src) = url_utils::absolutize(&self.base_url, &src) {
                        return src;
                    }
                }
                Ok(None) => debug!(selector = %selector, "No image found"),
                Err(reason) => debug!(selector = %selector, reason = %reason, "Image read failed"),
            }
        }
        String::new()
    }

    /// 读取详情页链接，失败时回退到列表页地址
    async fn read_link<C>(&self, card: &C, title: &str) -> String
    where
        C: OfferCard + ?Sized,
    {
        let reason = match bounded(self.attribute_timeout, card.attribute("href")).await {
            Ok(Some(href)) => match url_utils::absolutize(&self.base_url, &href) {
                Some(url) => return url,
                None => format!("unusable href {:?}", href),
            },
            Ok(None) => "href attribute missing".to_string(),
            Err(reason) => reason,
        };

        warn!(title = %title.trim(), reason = %reason, "Couldn't find detail page, using fallback URL");
        self.fallback_url.clone()
    }
}

/// 在超时时间内执行一次读取，把引擎错误和超时统一为描述字符串
async fn bounded<F>(timeout: Duration, read: F) -> Result<Option<String>, String>
where
    F: Future<Output = Result<Option<String>, EngineError>>,
{
    match tokio::time::timeout(timeout, read).await {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(e)) => Err(e.to_string()),
        Err(_) => Err(format!("timed out after {}ms", timeout.as_millis())),
    }
}

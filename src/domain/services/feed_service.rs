// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::Utc;
use rss::extension::atom::{AtomExtension, Link};
use rss::{Channel, ChannelBuilder, GuidBuilder, Item, ItemBuilder};
use thiserror::Error;

use crate::config::settings::FeedSettings;
use crate::domain::models::offer::Offer;

/// 订阅生成错误
#[derive(Error, Debug)]
pub enum FeedError {
    #[error("XML error: {0}")]
    Xml(#[from] rss::Error),

    #[error("Feed is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}

/// RSS 订阅服务
///
/// 把优惠列表序列化为 RSS 2.0 文档。频道信息来自配置，与输入无关。
pub struct FeedService {
    settings: FeedSettings,
}

impl FeedService {
    pub fn new(settings: FeedSettings) -> Self {
        Self { settings }
    }

    /// 生成 RSS 文档
    ///
    /// 每个优惠对应一个条目：标题同时用作条目标题和描述，链接同时用作
    /// `link` 和 `guid`，首次发现时间作为 `pubDate`。空列表生成没有条目的合法文档。
    pub fn render(&self, offers: &[Offer]) -> Result<String, FeedError> {
        let channel = self.build_channel(offers);
        let buffer = channel.write_to(Vec::new())?;
        Ok(String::from_utf8(buffer)?)
    }

    fn build_channel(&self, offers: &[Offer]) -> Channel {
        let settings = &self.settings;
        let self_link = Link {
            href: settings.feed_url.clone(),
            rel: "self".to_string(),
            mime_type: Some("application/rss+xml".to_string()),
            ..Default::default()
        };

        ChannelBuilder::default()
            .title(settings.title.clone())
            .description(settings.description.clone())
            .link(settings.site_url.clone())
            .language(Some(settings.language.clone()))
            .managing_editor(Some(settings.managing_editor.clone()))
            .webmaster(Some(settings.webmaster.clone()))
            .generator(Some(format!(
                "{} {}",
                env!("CARGO_PKG_NAME"),
                env!("CARGO_PKG_VERSION")
            )))
            .last_build_date(Some(Utc::now().to_rfc2822()))
            .atom_ext(Some(AtomExtension {
                links: vec![self_link],
            }))
            .items(offers.iter().map(feed_item).collect::<Vec<_>>())
            .build()
    }
}

fn feed_item(offer: &Offer) -> Item {
    let guid = GuidBuilder::default()
        .value(offer.url.clone())
        .permalink(false)
        .build();

    ItemBuilder::default()
        .title(Some(offer.title.clone()))
        .description(Some(offer.title.clone()))
        .link(Some(offer.url.clone()))
        .guid(Some(guid))
        .pub_date(Some(offer.seen_first.to_rfc2822()))
        .build()
}

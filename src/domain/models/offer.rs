// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;

/// 优惠来源
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OfferSource {
    Amazon,
}

/// 优惠时效类别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OfferDuration {
    /// 领取后永久保留
    Claimable,
}

/// 优惠类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OfferType {
    Game,
}

/// 游戏平台
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OfferPlatform {
    Pc,
}

/// 从卡片中读取的原始数据
///
/// 标题尚未规范化，链接和图片已经应用过回退策略
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseOffer {
    /// 未经处理的标题文本
    pub title: String,
    /// 详情页绝对地址
    pub url: String,
    /// 图片地址，空字符串表示没有找到图片
    pub img_url: String,
}

/// 优惠实体
///
/// 每次运行重新创建，仅用于序列化进订阅，不做持久化
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Offer {
    pub source: OfferSource,
    pub duration: OfferDuration,
    #[serde(rename = "type")]
    pub offer_type: OfferType,
    pub platform: OfferPlatform,
    /// 规范化后的标题
    pub title: String,
    /// 推测的游戏名称，当前与标题相同
    pub probable_game_name: String,
    /// 首次发现时间
    pub seen_first: DateTime<Utc>,
    /// 最后发现时间
    pub seen_last: DateTime<Utc>,
    /// 过期时间，Prime Gaming 的游戏领取后不会过期
    pub valid_to: Option<DateTime<Utc>>,
    /// 原始抓取内容的 JSON 表示
    pub rawtext: String,
    /// 详情页绝对地址
    pub url: String,
    /// 图片地址，空字符串表示没有图片
    pub img_url: String,
}

impl Offer {
    /// 由原始卡片数据和规范化后的标题构建优惠
    ///
    /// `seen_first` 与 `seen_last` 都取 `seen_at`，因为没有历史记录可供比较
    pub fn from_base(base: BaseOffer, title: String, seen_at: DateTime<Utc>) -> Self {
        let rawtext = json!({ "title": base.title }).to_string();
        Self {
            source: OfferSource::Amazon,
            duration: OfferDuration::Claimable,
            offer_type: OfferType::Game,
            platform: OfferPlatform::Pc,
            probable_game_name: title.clone(),
            title,
            seen_first: seen_at,
            seen_last: seen_at,
            valid_to: None,
            rawtext,
            url: base.url,
            img_url: base.img_url,
        }
    }

    /// 没有抓取到任何优惠时写入订阅的占位条目
    pub fn placeholder(url: String, seen_at: DateTime<Utc>) -> Self {
        let title = PLACEHOLDER_TITLE.to_string();
        Self::from_base(
            BaseOffer {
                title: title.clone(),
                url,
                img_url: String::new(),
            },
            title,
            seen_at,
        )
    }
}

/// 占位条目的标题
pub const PLACEHOLDER_TITLE: &str = "No games available";

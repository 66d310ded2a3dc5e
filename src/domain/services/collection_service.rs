// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use tracing::{info, warn};

use crate::domain::models::offer::Offer;
use crate::domain::services::extraction_service::OfferExtractor;
use crate::engines::traits::OfferCard;

/// 采集全部卡片
///
/// 按页面顺序逐个提取；单个卡片失败只记录日志并跳过，不影响其余卡片。
/// 没有匹配到卡片或全部失败时返回空列表，由调用方决定如何处理。
pub async fn collect_offers<C>(extractor: &OfferExtractor, cards: &[C]) -> Vec<Offer>
where
    C: OfferCard,
{
    let mut offers = Vec::with_capacity(cards.len());

    for (index, card) in cards.iter().enumerate() {
        match extractor.extract(card).await {
            Ok(offer) => offers.push(offer),
            Err(e) => warn!(index, error = %e, "Failed to read offer, skipping"),
        }
    }

    info!(
        matched = cards.len(),
        extracted = offers.len(),
        "Collected offers"
    );
    offers
}

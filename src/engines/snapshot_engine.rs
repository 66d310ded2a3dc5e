// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use scraper::{ElementRef, Html, Selector};

use crate::engines::traits::{EngineError, OfferCard};

/// HTML 快照中的优惠卡片
///
/// 保存卡片内部的 HTML 和卡片自身的 `href`，每次读取时重新解析片段，
/// 这样卡片本身可以在线程间传递。
#[derive(Debug, Clone)]
pub struct HtmlCard {
    fragment: String,
    href: Option<String>,
}

impl HtmlCard {
    pub fn from_element(element: ElementRef<'_>) -> Self {
        Self {
            fragment: element.inner_html(),
            href: element.value().attr("href").map(str::to_string),
        }
    }

    fn select_first<T>(
        &self,
        selector: &str,
        read: impl Fn(ElementRef<'_>) -> Option<T>,
    ) -> Result<Option<T>, EngineError> {
        let selector = parse_selector(selector)?;
        let fragment = Html::parse_fragment(&self.fragment);
        let value = fragment.select(&selector).next().and_then(read);
        Ok(value)
    }
}

#[async_trait]
impl OfferCard for HtmlCard {
    async fn child_text(&self, selector: &str) -> Result<Option<String>, EngineError> {
        self.select_first(selector, |element| Some(element.text().collect::<String>()))
    }

    async fn child_attribute(
        &self,
        selector: &str,
        name: &str,
    ) -> Result<Option<String>, EngineError> {
        self.select_first(selector, |element| {
            element.value().attr(name).map(str::to_string)
        })
    }

    async fn attribute(&self, name: &str) -> Result<Option<String>, EngineError> {
        match name {
            "href" => Ok(self.href.clone()),
            _ => Ok(None),
        }
    }
}

/// 从整页 HTML 中取出全部卡片，保持文档顺序
pub fn parse_cards(html: &str, card_selector: &str) -> Result<Vec<HtmlCard>, EngineError> {
    let selector = parse_selector(card_selector)?;
    let document = Html::parse_document(html);
    Ok(document.select(&selector).map(HtmlCard::from_element).collect())
}

fn parse_selector(selector: &str) -> Result<Selector, EngineError> {
    Selector::parse(selector)
        .map_err(|e| EngineError::InvalidSelector(format!("{}: {}", selector, e)))
}

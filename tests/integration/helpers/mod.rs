// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use chrono::Utc;
use prime_gaming_rss::domain::models::offer::{BaseOffer, Offer};
use prime_gaming_rss::engines::traits::{EngineError, OfferScraper};
use std::sync::atomic::{AtomicUsize, Ordering};

/// 返回预设结果的抓取器
pub struct StubScraper {
    titles: Vec<&'static str>,
    fail_with_timeout: bool,
    calls: AtomicUsize,
}

impl StubScraper {
    pub fn with_titles(titles: Vec<&'static str>) -> Self {
        Self {
            titles,
            fail_with_timeout: false,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn timing_out() -> Self {
        Self {
            titles: Vec::new(),
            fail_with_timeout: true,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl OfferScraper for StubScraper {
    async fn read_offers(&self) -> Result<Vec<Offer>, EngineError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_with_timeout {
            return Err(EngineError::NavigationTimeout {
                url: "https://gaming.amazon.com/home".to_string(),
            });
        }
        Ok(self.titles.iter().map(|title| offer(title)).collect())
    }

    fn name(&self) -> &'static str {
        "stub"
    }
}

pub fn offer(title: &str) -> Offer {
    let slug = title.to_lowercase().replace(' ', "-");
    Offer::from_base(
        BaseOffer {
            title: title.to_string(),
            url: format!("https://gaming.amazon.com/{}", slug),
            img_url: String::new(),
        },
        title.to_string(),
        Utc::now(),
    )
}

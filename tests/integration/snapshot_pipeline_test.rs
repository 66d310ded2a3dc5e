// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// HTML 快照流水线测试
///
/// 从整页 HTML 出发，经过卡片解析、提取、采集、序列化到存储的完整流程

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use prime_gaming_rss::application::use_cases::generate_feed_use_case::GenerateFeedUseCase;
    use prime_gaming_rss::config::settings::Settings;
    use prime_gaming_rss::domain::models::offer::Offer;
    use prime_gaming_rss::domain::repositories::storage_repository::StorageRepository;
    use prime_gaming_rss::domain::services::collection_service::collect_offers;
    use prime_gaming_rss::domain::services::extraction_service::OfferExtractor;
    use prime_gaming_rss::engines::snapshot_engine::parse_cards;
    use prime_gaming_rss::engines::traits::{EngineError, OfferScraper};
    use prime_gaming_rss::infrastructure::storage::InMemoryStorage;
    use rss::Channel;
    use std::sync::Arc;

    const PAGE: &str = r#"
        <!DOCTYPE html>
        <html><body>
          <div class="offer-list__content">
            <div data-a-target="offer-list-FGWP_FULL">
              <div class="item-card__action">
                <a href="/deals/xyz">
                  <div data-a-target="card-image"><img src="https://x/img.png"></div>
                  <div class="item-card-details__body__primary">
                    <h3>
                      Raw Title
                    </h3>
                  </div>
                </a>
              </div>
              <div class="item-card__action">
                <a href="/deals/broken">
                  <div data-a-target="card-image"><img src="https://x/broken.png"></div>
                </a>
              </div>
              <div class="item-card__action">
                <a href="https://luna.amazon.com/game/quake">
                  <picture><img src="https://x/quake.png"></picture>
                  <div class="item-card-details__body__primary"><h3>Quake (Prime Gaming)</h3></div>
                </a>
              </div>
              <div class="item-card__action">
                <a>
                  <div class="item-card-details__body__primary"><h3>Fallout 3&#8482;</h3></div>
                </a>
              </div>
            </div>
          </div>
        </body></html>
    "#;

    fn settings() -> Settings {
        Settings::defaults().unwrap()
    }

    async fn scrape(html: &str) -> Vec<Offer> {
        let settings = settings();
        let extractor =
            OfferExtractor::new(&settings.source, settings.timeouts.attribute()).unwrap();
        let cards = parse_cards(html, &settings.source.card_selector).unwrap();
        collect_offers(&extractor, &cards).await
    }

    /// 从固定 HTML 读取优惠的抓取器
    struct StaticPageScraper {
        html: &'static str,
    }

    #[async_trait]
    impl OfferScraper for StaticPageScraper {
        async fn read_offers(&self) -> Result<Vec<Offer>, EngineError> {
            Ok(scrape(self.html).await)
        }

        fn name(&self) -> &'static str {
            "static"
        }
    }

    #[tokio::test]
    async fn test_cards_are_extracted_in_page_order() {
        let offers = scrape(PAGE).await;

        assert_eq!(offers.len(), 3);

        assert_eq!(offers[0].title, "Raw Title");
        assert_eq!(offers[0].probable_game_name, "Raw Title");
        assert_eq!(offers[0].url, "https://gaming.amazon.com/deals/xyz");
        assert_eq!(offers[0].img_url, "https://x/img.png");
        assert!(offers[0].valid_to.is_none());

        assert_eq!(offers[1].title, "Quake");
        assert_eq!(offers[1].url, "https://luna.amazon.com/game/quake");
        assert_eq!(offers[1].img_url, "https://x/quake.png");

        assert_eq!(offers[2].title, "Fallout 3");
        assert_eq!(offers[2].url, "https://gaming.amazon.com/home");
        assert_eq!(offers[2].img_url, "");
    }

    #[tokio::test]
    async fn test_page_without_cards_yields_nothing() {
        let offers = scrape("<html><body><div class=\"offer-list__content\"></div></body></html>").await;
        assert!(offers.is_empty());
    }

    #[tokio::test]
    async fn test_end_to_end_into_storage() {
        let settings = settings();
        let storage = Arc::new(InMemoryStorage::new());
        let scraper = Arc::new(StaticPageScraper { html: PAGE });

        let report = GenerateFeedUseCase::new(scraper, storage.clone(), &settings)
            .execute()
            .await
            .unwrap();
        assert_eq!(report.offers_found, 3);

        let bytes = storage.get("docs/games.rss").await.unwrap().unwrap();
        let channel = String::from_utf8(bytes).unwrap().parse::<Channel>().unwrap();

        assert_eq!(channel.items().len(), 3);
        let links: Vec<_> = channel.items().iter().filter_map(|i| i.link()).collect();
        assert_eq!(
            links,
            vec![
                "https://gaming.amazon.com/deals/xyz",
                "https://luna.amazon.com/game/quake",
                "https://gaming.amazon.com/home",
            ]
        );
    }

    #[tokio::test]
    async fn test_end_to_end_empty_page_uses_placeholder() {
        let settings = settings();
        let storage = Arc::new(InMemoryStorage::new());
        let scraper = Arc::new(StaticPageScraper {
            html: "<html><body></body></html>",
        });

        let report = GenerateFeedUseCase::new(scraper, storage.clone(), &settings)
            .execute()
            .await
            .unwrap();
        assert!(report.placeholder_used);

        let bytes = storage.get("docs/games.rss").await.unwrap().unwrap();
        let channel = String::from_utf8(bytes).unwrap().parse::<Channel>().unwrap();
        assert_eq!(channel.items().len(), 1);
        assert_eq!(channel.items()[0].title(), Some("No games available"));
    }
}

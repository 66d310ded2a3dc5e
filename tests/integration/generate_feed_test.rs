// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 生成订阅用例集成测试
///
/// 使用预设抓取器和临时目录验证占位条目、文件覆盖与错误传播

#[cfg(test)]
mod tests {
    use crate::integration::helpers::StubScraper;
    use prime_gaming_rss::application::use_cases::generate_feed_use_case::GenerateFeedUseCase;
    use prime_gaming_rss::config::settings::Settings;
    use prime_gaming_rss::engines::traits::EngineError;
    use prime_gaming_rss::infrastructure::storage::LocalStorage;
    use prime_gaming_rss::utils::errors::RunError;
    use rss::Channel;
    use std::sync::Arc;

    fn read_channel(path: &std::path::Path) -> Channel {
        let xml = std::fs::read_to_string(path).unwrap();
        xml.parse::<Channel>().unwrap()
    }

    #[tokio::test]
    async fn test_zero_offers_writes_single_placeholder() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::defaults().unwrap();
        let scraper = Arc::new(StubScraper::with_titles(Vec::new()));
        let storage = Arc::new(LocalStorage::new(dir.path()));

        let use_case = GenerateFeedUseCase::new(scraper.clone(), storage, &settings);
        let report = use_case.execute().await.unwrap();

        assert_eq!(report.offers_found, 0);
        assert!(report.placeholder_used);
        assert_eq!(report.output_path, "docs/games.rss");
        assert_eq!(scraper.calls(), 1);

        let channel = read_channel(&dir.path().join("docs/games.rss"));
        assert_eq!(channel.items().len(), 1);
        let item = &channel.items()[0];
        assert_eq!(item.title(), Some("No games available"));
        assert_eq!(item.link(), Some("https://gaming.amazon.com/home"));
    }

    #[tokio::test]
    async fn test_offers_are_written_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::defaults().unwrap();
        let scraper = Arc::new(StubScraper::with_titles(vec!["Quake", "Fallout 3", "Dishonored"]));
        let storage = Arc::new(LocalStorage::new(dir.path()));

        let report = GenerateFeedUseCase::new(scraper, storage, &settings)
            .execute()
            .await
            .unwrap();

        assert_eq!(report.offers_found, 3);
        assert!(!report.placeholder_used);

        let channel = read_channel(&dir.path().join("docs/games.rss"));
        let titles: Vec<_> = channel.items().iter().filter_map(|i| i.title()).collect();
        assert_eq!(titles, vec!["Quake", "Fallout 3", "Dishonored"]);
        assert_eq!(
            channel.items()[1].guid().map(|g| g.value()),
            Some("https://gaming.amazon.com/fallout-3")
        );
    }

    #[tokio::test]
    async fn test_previous_feed_is_overwritten() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("docs")).unwrap();
        std::fs::write(
            dir.path().join("docs/games.rss"),
            "<rss><channel><title>stale</title></channel></rss>".repeat(50),
        )
        .unwrap();

        let settings = Settings::defaults().unwrap();
        let scraper = Arc::new(StubScraper::with_titles(vec!["Quake"]));
        let storage = Arc::new(LocalStorage::new(dir.path()));
        GenerateFeedUseCase::new(scraper, storage, &settings)
            .execute()
            .await
            .unwrap();

        let xml = std::fs::read_to_string(dir.path().join("docs/games.rss")).unwrap();
        assert!(!xml.contains("stale"));
        assert_eq!(xml.parse::<Channel>().unwrap().items().len(), 1);
    }

    #[tokio::test]
    async fn test_scrape_failure_is_fatal_and_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::defaults().unwrap();
        let scraper = Arc::new(StubScraper::timing_out());
        let storage = Arc::new(LocalStorage::new(dir.path()));

        let result = GenerateFeedUseCase::new(scraper, storage, &settings)
            .execute()
            .await;

        assert!(matches!(
            result,
            Err(RunError::Scrape(EngineError::NavigationTimeout { .. }))
        ));
        assert!(!dir.path().join("docs/games.rss").exists());
    }

    #[tokio::test]
    async fn test_write_failure_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("docs"), b"not a directory").unwrap();

        let settings = Settings::defaults().unwrap();
        let scraper = Arc::new(StubScraper::with_titles(vec!["Quake"]));
        let storage = Arc::new(LocalStorage::new(dir.path()));

        let result = GenerateFeedUseCase::new(scraper, storage, &settings)
            .execute()
            .await;

        assert!(matches!(result, Err(RunError::FileWrite(_))));
    }
}

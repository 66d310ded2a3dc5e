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

use prime_gaming_rss::application::use_cases::generate_feed_use_case::GenerateFeedUseCase;
use prime_gaming_rss::config::settings::Settings;
use prime_gaming_rss::engines::chromium_engine::ChromiumScraper;
use prime_gaming_rss::infrastructure::storage::LocalStorage;
use prime_gaming_rss::utils::telemetry;
use std::sync::Arc;
use tracing::{error, info};

/// 主函数
///
/// 抓取一次 Prime Gaming 免费游戏列表并写出 RSS 文件，失败时以非零状态退出
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize logging
    telemetry::init_telemetry();
    info!("Starting Prime Gaming RSS scraper...");

    // 2. Load configuration
    let settings = Settings::new()?;
    info!(mode = ?settings.scrape.mode, output = %settings.output.path, "Configuration loaded");

    // 3. Wire components
    let scraper = Arc::new(ChromiumScraper::new(settings.clone())?);
    let storage = Arc::new(LocalStorage::new("."));
    let use_case = GenerateFeedUseCase::new(scraper, storage, &settings);

    // 4. Run
    match use_case.execute().await {
        Ok(report) => {
            info!(
                offers = report.offers_found,
                placeholder = report.placeholder_used,
                path = %report.output_path,
                "Scraping completed successfully!"
            );
            Ok(())
        }
        Err(e) => {
            error!("Scraping failed: {}", e);
            std::process::exit(1);
        }
    }
}
